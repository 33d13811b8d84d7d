use crate::model::person::{Address, Person};

/// The records every fresh store starts with.
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new("1", "Joe", "Dirt", Some(Address::new("Los Angeles", "CA"))),
        Person::new("2", "Roger", "Rabbit", None),
        Person::new("4", "Mickey", "Mouse", Some(Address::new("Orlando", "FL"))),
    ]
}
