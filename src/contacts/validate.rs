//! Contact draft validation.
//!
//! `validate` checks the fields a draft supplies; `validate_complete` also
//! requires every field to be present and is used for creation.

use chrono::{Local, NaiveDate};

use crate::contacts::model::ContactDraft;
use crate::contacts::ContactError;

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Check every supplied field of `draft` for well-formedness.
pub fn validate(draft: &ContactDraft) -> Result<(), ContactError> {
    if let Some(fname) = &draft.fname {
        check_name("fname", fname)?;
    }
    if let Some(lname) = &draft.lname {
        check_name("lname", lname)?;
    }
    if let Some(email) = &draft.email {
        check_email(email)?;
    }
    if let Some(birthday) = &draft.birthday {
        let date = parse_birthday(birthday)?;
        if date > Local::now().date_naive() {
            return Err(invalid("birthday must not be in the future"));
        }
    }
    Ok(())
}

/// Validate a draft and require all fields to be present.
pub fn validate_complete(draft: &ContactDraft) -> Result<(), ContactError> {
    let missing = [
        ("fname", draft.fname.is_none()),
        ("lname", draft.lname.is_none()),
        ("email", draft.email.is_none()),
        ("birthday", draft.birthday.is_none()),
    ]
    .into_iter()
    .find_map(|(field, absent)| absent.then_some(field));

    if let Some(field) = missing {
        return Err(invalid(format!("{field} is required")));
    }
    validate(draft)
}

pub(crate) fn parse_birthday(value: &str) -> Result<NaiveDate, ContactError> {
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| invalid("birthday must be a date formatted as YYYY-MM-DD"))
}

fn check_name(field: &str, value: &str) -> Result<(), ContactError> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{field} must not be blank")));
    }
    Ok(())
}

fn check_email(value: &str) -> Result<(), ContactError> {
    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(invalid("email must be a valid address"))
    }
}

fn invalid(reason: impl Into<String>) -> ContactError {
    ContactError::Invalid(reason.into())
}
