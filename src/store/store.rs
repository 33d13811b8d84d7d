use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::{
    action::{Action, ActionResult},
    person::Person,
};

use super::{seed::seed_people, table::PersonTable};

/// Shared handle to the in-memory table, injected into every handler.
///
/// Every action runs under one lock acquisition, so a mutation and the list returned from it
/// always describe the same state.
#[derive(Debug, Default)]
pub struct PersonStore {
    table: Mutex<PersonTable>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::from_people(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::from_people(seed_people())
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self {
            table: Mutex::new(PersonTable::from_rows(people)),
        }
    }

    pub fn send_request(&self, action: Action) -> ActionResult {
        if action.is_mutation() {
            log::debug!("Applying mutation: {:?}", action);
        }

        self.lock().apply(action)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic mid-action cannot leave the table half-written, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, PersonTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
