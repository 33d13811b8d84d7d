use crate::{
    consts::consts::PersonId,
    model::{
        action::{Action, ActionResult},
        person::Person,
    },
};

/// Insertion ordered list of people. Ids are not unique, every lookup is a linear scan
/// that stops at the first match.
#[derive(Debug, Default)]
pub struct PersonTable {
    pub person_rows: Vec<Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self {
            person_rows: Vec::new(),
        }
    }

    pub fn from_rows(person_rows: Vec<Person>) -> Self {
        Self { person_rows }
    }

    pub fn len(&self) -> usize {
        self.person_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.person_rows.is_empty()
    }

    pub fn apply(&mut self, action: Action) -> ActionResult {
        match action {
            Action::List => ActionResult::List(self.list()),
            Action::Get(id) => ActionResult::GetSingle(self.get(&id).cloned()),
            Action::Create(person) => {
                self.person_rows.push(person);

                ActionResult::List(self.list())
            }
            Action::Delete(id) => {
                if let Some(index) = self.position(&id) {
                    // `remove` shifts the tail left so the survivors keep their order
                    self.person_rows.remove(index);
                }

                ActionResult::List(self.list())
            }
        }
    }

    fn list(&self) -> Vec<Person> {
        self.person_rows.clone()
    }

    fn get(&self, id: &PersonId) -> Option<&Person> {
        self.person_rows.iter().find(|person| &person.id == id)
    }

    fn position(&self, id: &PersonId) -> Option<usize> {
        self.person_rows.iter().position(|person| &person.id == id)
    }
}
