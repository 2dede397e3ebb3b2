//! Contact ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::contacts::Contact;
use crate::query::QueryError;

/// Fields a contact listing can be sorted (and filtered) by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Birthday,
}

impl SortField {
    /// Compare two contacts by this field.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            SortField::FirstName => a.fname.cmp(&b.fname),
            SortField::LastName => a.lname.cmp(&b.lname),
            SortField::Email => a.email.cmp(&b.email),
            SortField::Birthday => a.birthday.cmp(&b.birthday),
        }
    }

    /// Text form of the field's value, as used by filters.
    pub fn text(&self, contact: &Contact) -> String {
        match self {
            SortField::FirstName => contact.fname.clone(),
            SortField::LastName => contact.lname.clone(),
            SortField::Email => contact.email.clone(),
            SortField::Birthday => contact.birthday.format("%Y-%m-%d").to_string(),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "fname" => Some(SortField::FirstName),
            "lname" => Some(SortField::LastName),
            "email" => Some(SortField::Email),
            "birthday" => Some(SortField::Birthday),
            _ => None,
        }
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| QueryError::InvalidEnum("Invalid sort field".into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(QueryError::InvalidEnum("Invalid sort direction".into())),
        }
    }
}

/// Stable sort by `field`. Ties keep their relative order in both directions.
pub fn sort_contacts(contacts: &mut [Contact], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Asc => contacts.sort_by(|a, b| field.compare(a, b)),
        SortDirection::Desc => contacts.sort_by(|a, b| field.compare(b, a)),
    }
}
