use std::fs;
use std::path::Path;

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Whole-file JSON persistence: one array of contact objects, pretty
/// printed so the file stays readable in an editor.
pub struct JsonStore {
    pub path: String,
}

impl JsonStore {
    pub fn new(path: &str) -> Result<Self, AppError> {
        create_file_parent(Path::new(path))?;

        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(Path::new(&self.path))?;

        let json_contacts = serde_json::to_string_pretty(&contacts)?;

        // Write the whole file beside the target first, then rename it
        // into place. A failed write can never truncate the real file.
        let tmp_path = format!("{}.tmp", self.path);
        fs::write(&tmp_path, json_contacts.as_bytes())?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
