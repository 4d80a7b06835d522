pub mod csv_port;
pub mod json;
pub mod memory;

use dotenv::dotenv;
use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

/// Resolve the contacts file location: `CONTACTS_PATH` from the
/// environment (a `.env` file works too), falling back to the default
/// instance directory.
pub fn storage_path() -> String {
    dotenv().ok();

    std::env::var("CONTACTS_PATH").unwrap_or(DEFAULT_STORAGE_PATH.to_string())
}

pub fn parse_store() -> Result<json::JsonStore, AppError> {
    json::JsonStore::new(&storage_path())
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
