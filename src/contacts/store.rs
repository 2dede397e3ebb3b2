//! In-memory contact store.
//!
//! # Design Decisions
//! - Ordered `Vec`; lookups are linear scans
//! - Identifiers are monotonic and never reused after deletion
//! - Email uniqueness is checked at creation only
//! - Owned by the HTTP state, one instance per server

use std::sync::{Arc, Mutex};

use crate::contacts::model::{Contact, ContactDraft, ContactId};
use crate::contacts::validate::{parse_birthday, validate, validate_complete};
use crate::contacts::ContactError;

/// Store shared between request handlers.
///
/// Handlers hold the lock for their whole (synchronous) body, so at most one
/// handler touches the store at a time.
pub type SharedStore = Arc<Mutex<ContactStore>>;

#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    next_id: ContactId,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding already identified contacts.
    ///
    /// New identifiers continue after the largest seeded one.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let next_id = contacts.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        Self { contacts, next_id }
    }

    /// Wrap the store for sharing with handlers.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// All contacts in insertion order.
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by identifier.
    pub fn get(&self, id: ContactId) -> Result<&Contact, ContactError> {
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .ok_or(ContactError::NotFound)
    }

    /// Validate a complete draft, reject duplicate emails, and append it.
    pub fn create(&mut self, draft: ContactDraft) -> Result<Contact, ContactError> {
        validate_complete(&draft)?;

        let ContactDraft {
            fname: Some(fname),
            lname: Some(lname),
            email: Some(email),
            birthday: Some(birthday),
        } = draft
        else {
            return Err(ContactError::Invalid("contact is incomplete".into()));
        };

        if self.contacts.iter().any(|c| c.email == email) {
            return Err(ContactError::Duplicate);
        }

        let contact = Contact {
            id: self.next_id,
            fname,
            lname,
            email,
            birthday: parse_birthday(&birthday)?,
        };
        self.next_id += 1;
        self.contacts.push(contact.clone());

        tracing::debug!(id = contact.id, total = self.contacts.len(), "Contact created");
        Ok(contact)
    }

    /// Overlay the supplied fields of `draft` onto an existing contact.
    ///
    /// The draft is validated before the lookup.
    pub fn update(&mut self, id: ContactId, draft: ContactDraft) -> Result<&Contact, ContactError> {
        validate(&draft)?;

        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(ContactError::NotFound)?;
        contact.merge(draft);

        tracing::debug!(id, "Contact updated");
        Ok(contact)
    }

    /// Remove a contact, returning it.
    pub fn delete(&mut self, id: ContactId) -> Result<Contact, ContactError> {
        let index = self
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or(ContactError::NotFound)?;
        let removed = self.contacts.remove(index);

        tracing::debug!(id, total = self.contacts.len(), "Contact deleted");
        Ok(removed)
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}
