pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
pub use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default = "Uuid::new_v4")] // For backward compatibility with contacts without id.
    pub id: Uuid,

    pub name: String,
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub address: String,

    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// The four user-supplied fields of a contact, carried as one unit.
/// Both `add` and `edit` take a whole draft so a record is always
/// validated and applied in full, never merged field by field.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        Self {
            name,
            phone,
            email,
            address,
        }
    }

    /// Strip leading/trailing whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }

    // Name and phone must be present. Email and address may stay empty.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if self.phone.is_empty() {
            return Err(AppError::Validation(
                "Phone number is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Contact {
    pub fn new(draft: ContactDraft) -> Self {
        let now = Utc::now();

        Contact {
            id: Uuid::new_v4(),
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every user-editable field from a draft. The id and
    /// created_at stay, updated_at is refreshed.
    pub fn apply(&mut self, draft: ContactDraft) {
        self.name = draft.name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.address = draft.address;
        self.updated_at = Utc::now();
    }

    /// The one-line listing format.
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.name, self.phone)
    }
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_every_field() {
        let draft = ContactDraft::new(
            "  Alice ".to_string(),
            " 08031234567".to_string(),
            " alice@example.com ".to_string(),
            "  12 Main St  ".to_string(),
        )
        .trimmed();

        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.phone, "08031234567");
        assert_eq!(draft.email, "alice@example.com");
        assert_eq!(draft.address, "12 Main St");
    }

    #[test]
    fn whitespace_only_name_fails_validation() {
        let draft = ContactDraft::new(
            "   ".to_string(),
            "08031234567".to_string(),
            "".to_string(),
            "".to_string(),
        )
        .trimmed();

        let err = draft.validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_phone_fails_validation() {
        let draft = ContactDraft::new(
            "Alice".to_string(),
            "".to_string(),
            "alice@example.com".to_string(),
            "".to_string(),
        );

        assert!(draft.validate().is_err());
    }

    #[test]
    fn empty_email_and_address_are_fine() {
        let draft = ContactDraft::new(
            "Alice".to_string(),
            "08031234567".to_string(),
            "".to_string(),
            "".to_string(),
        );

        assert!(draft.validate().is_ok());
    }

    #[test]
    fn apply_replaces_all_fields_and_keeps_identity() {
        let mut contact = Contact::new(ContactDraft::new(
            "Alice".to_string(),
            "123".to_string(),
            "alice@example.com".to_string(),
            "12 Main St".to_string(),
        ));
        let id = contact.id;
        let created = contact.created_at;

        contact.apply(ContactDraft::new(
            "Alice2".to_string(),
            "555".to_string(),
            "".to_string(),
            "".to_string(),
        ));

        assert_eq!(contact.id, id);
        assert_eq!(contact.created_at, created);
        assert_eq!(contact.name, "Alice2");
        assert_eq!(contact.phone, "555");
        assert_eq!(contact.email, "");
        assert_eq!(contact.address, "");
    }

    #[test]
    fn display_line_is_name_dash_phone() {
        let contact = Contact::new(ContactDraft::new(
            "Alice".to_string(),
            "08031234567".to_string(),
            "".to_string(),
            "".to_string(),
        ));

        assert_eq!(contact.display_line(), "Alice - 08031234567");
    }

    #[test]
    fn legacy_contact_without_id_gets_one_on_load() -> Result<(), AppError> {
        // The shape older tools wrote: only the four string fields.
        let data = r#"{"name":"Alice","phone":"123","email":"","address":""}"#;
        let contact: Contact = serde_json::from_str(data)?;

        assert_eq!(contact.name, "Alice");
        assert_eq!(contact.phone, "123");
        assert!(!contact.id.is_nil());
        Ok(())
    }
}
