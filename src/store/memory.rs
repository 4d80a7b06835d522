use std::cell::RefCell;

use super::ContactStore;
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// In-memory store for exercising the service without touching disk.
/// RefCell keeps the trait's `&self` signatures.
#[derive(Default)]
pub struct MemStore {
    pub data: RefCell<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}
