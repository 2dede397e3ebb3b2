//! Contact domain: records, validation, and the in-memory store.
//!
//! # Data Flow
//! ```text
//! request body → ContactDraft
//!     → validate.rs (field checks; all fields required on create)
//!     → store.rs (duplicate scan, id assignment, merge, removal)
//!     → Contact (serialized back to the client)
//! ```

pub mod model;
pub mod seed;
pub mod store;
pub mod validate;

use thiserror::Error;

pub use model::{Contact, ContactDraft, ContactId};
pub use seed::{load_seed, parse_seed, SeedError};
pub use store::{ContactStore, SharedStore};

/// Failures raised by contact operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The candidate contact is structurally invalid.
    #[error("Invalid contact: {0}")]
    Invalid(String),

    /// Another contact already uses the email.
    #[error("A contact with this email already exists")]
    Duplicate,

    #[error("Contact not found")]
    NotFound,
}
