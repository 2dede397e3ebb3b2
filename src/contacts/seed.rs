//! Startup seed data.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::contacts::model::{Contact, ContactId};
use crate::contacts::store::ContactStore;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed contains duplicate id {0}")]
    DuplicateId(ContactId),

    #[error("seed contains duplicate email {0}")]
    DuplicateEmail(String),
}

/// Read a JSON array of contacts from disk and build a store from it.
pub fn load_seed(path: &Path) -> Result<ContactStore, SeedError> {
    let content = fs::read_to_string(path)?;
    let store = parse_seed(&content)?;
    tracing::info!(path = %path.display(), contacts = store.len(), "Loaded seed contacts");
    Ok(store)
}

/// Parse seed contacts, rejecting duplicate ids or emails.
pub fn parse_seed(content: &str) -> Result<ContactStore, SeedError> {
    let contacts: Vec<Contact> = serde_json::from_str(content)?;

    {
        let mut ids = HashSet::new();
        let mut emails = HashSet::new();
        for contact in &contacts {
            if !ids.insert(contact.id) {
                return Err(SeedError::DuplicateId(contact.id));
            }
            if !emails.insert(contact.email.as_str()) {
                return Err(SeedError::DuplicateEmail(contact.email.clone()));
            }
        }
    }

    Ok(ContactStore::with_contacts(contacts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        let store = parse_seed(
            r#"[
                {"id": 3, "fname": "Grace", "lname": "Hopper", "email": "grace@example.com", "birthday": "1906-12-09"},
                {"id": 7, "fname": "Alan", "lname": "Turing", "email": "alan@example.com", "birthday": "1912-06-23"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(7).unwrap().lname, "Turing");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = parse_seed(
            r#"[
                {"id": 1, "fname": "A", "lname": "A", "email": "a@example.com", "birthday": "1990-01-01"},
                {"id": 1, "fname": "B", "lname": "B", "email": "b@example.com", "birthday": "1990-01-01"}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId(1)));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let err = parse_seed(
            r#"[
                {"id": 1, "fname": "A", "lname": "A", "email": "a@example.com", "birthday": "1990-01-01"},
                {"id": 2, "fname": "B", "lname": "B", "email": "a@example.com", "birthday": "1990-01-01"}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateEmail(_)));
    }

    #[test]
    fn test_malformed_seed() {
        assert!(matches!(parse_seed(r#"{"id": 1}"#), Err(SeedError::Parse(_))));
    }
}
