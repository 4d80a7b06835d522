use uuid::Uuid;

use super::contact::{Contact, ContactDraft};
use crate::errors::AppError;
use crate::store::ContactStore;

/// The contact service. Every operation is a fresh load-mutate-save
/// cycle against the backing store; nothing is cached between calls,
/// so the file on disk is always the single source of truth.
pub struct ContactBook {
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &dyn ContactStore {
        self.storage.as_ref()
    }

    /// Trim, validate and append a new contact.
    pub fn add(&self, draft: ContactDraft) -> Result<Contact, AppError> {
        let draft = draft.trimmed();
        draft.validate()?;

        let mut contacts = self.storage.load()?;
        let contact = Contact::new(draft);
        contacts.push(contact.clone());
        self.storage.save(&contacts)?;

        Ok(contact)
    }

    /// The full collection, in stored order.
    pub fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        self.storage.load()
    }

    /// Contacts whose name contains `keyword` as a case-insensitive
    /// substring. An empty keyword is rejected rather than matching
    /// everything; an empty result is a valid outcome.
    pub fn search(&self, keyword: &str) -> Result<Vec<Contact>, AppError> {
        let keyword = keyword.trim().to_lowercase();

        if keyword.is_empty() {
            return Err(AppError::Validation(
                "No search keyword provided".to_string(),
            ));
        }

        let contacts = self.storage.load()?;
        Ok(contacts
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&keyword))
            .collect())
    }

    /// Exact-name lookup. Names are not unique, so this is explicitly
    /// a multi-match operation; use the returned ids to address one
    /// contact among duplicates.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Contact>, AppError> {
        let contacts = self.storage.load()?;
        Ok(contacts.into_iter().filter(|c| c.name == name).collect())
    }

    /// Replace the first contact whose name equals `target_name`
    /// exactly. The whole record is swapped for the draft, not merged.
    pub fn update(&self, target_name: &str, draft: ContactDraft) -> Result<Contact, AppError> {
        let draft = draft.trimmed();
        draft.validate()?;

        let mut contacts = self.storage.load()?;
        let contact = contacts
            .iter_mut()
            .find(|c| c.name == target_name)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        contact.apply(draft);
        let updated = contact.clone();
        self.storage.save(&contacts)?;

        Ok(updated)
    }

    /// Like `update`, addressed by the immutable id instead of the
    /// (possibly duplicated) name.
    pub fn update_by_id(&self, id: &Uuid, draft: ContactDraft) -> Result<Contact, AppError> {
        let draft = draft.trimmed();
        draft.validate()?;

        let mut contacts = self.storage.load()?;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        contact.apply(draft);
        let updated = contact.clone();
        self.storage.save(&contacts)?;

        Ok(updated)
    }

    /// Remove every contact whose name equals `target_name` exactly.
    /// Returns how many were removed; 0 means nothing matched, which
    /// is reported to the caller, not raised as an error.
    pub fn delete(&self, target_name: &str) -> Result<usize, AppError> {
        let mut contacts = self.storage.load()?;
        let before = contacts.len();
        contacts.retain(|c| c.name != target_name);
        let removed = before - contacts.len();

        if removed > 0 {
            self.storage.save(&contacts)?;
        }

        Ok(removed)
    }

    /// Remove the one contact with this id.
    pub fn delete_by_id(&self, id: &Uuid) -> Result<Contact, AppError> {
        let mut contacts = self.storage.load()?;
        let position = contacts
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        let removed = contacts.remove(position);
        self.storage.save(&contacts)?;

        Ok(removed)
    }
}
