pub use crate::cli::{command, run::run_app};
pub use crate::domain::{
    book::ContactBook,
    contact::{Contact, ContactDraft},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, json::JsonStore, memory::MemStore, parse_store};
