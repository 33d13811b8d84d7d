use crate::consts::consts::PersonId;

use super::person::Person;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Returns every person in insertion order
    List,
    /// Returns the first person with a matching id, if any
    Get(PersonId),
    /// Appends the person, returns the updated list
    Create(Person),
    /// Removes the first person with a matching id, returns the updated list
    Delete(PersonId),
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::Create(_) | Action::Delete(_) => true,
            Action::List | Action::Get(_) => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionResult {
    GetSingle(Option<Person>),
    List(Vec<Person>),
}

#[cfg(test)]
impl ActionResult {
    pub fn get_single(self) -> Option<Person> {
        if let ActionResult::GetSingle(p) = self {
            p
        } else {
            panic!("Action result is not of type GetSingle")
        }
    }

    pub fn list(self) -> Vec<Person> {
        if let ActionResult::List(l) = self {
            l
        } else {
            panic!("Action result is not of type List")
        }
    }
}
