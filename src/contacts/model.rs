//! Contact record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contact identifier, assigned by the store at creation.
pub type ContactId = u64;

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique, immutable identifier.
    pub id: ContactId,
    pub fname: String,
    pub lname: String,
    /// Unique across the store at creation time.
    pub email: String,
    /// Serialized as `YYYY-MM-DD`.
    pub birthday: NaiveDate,
}

/// A candidate contact as supplied in a request body.
///
/// Every field is optional so the same shape serves creation (all fields
/// required) and update (overlay of the supplied fields). An `id` key in
/// the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl Contact {
    /// Overlay the supplied fields of an already validated draft.
    ///
    /// Fields absent from the draft keep their prior values. A birthday that
    /// does not parse is left untouched; callers validate before merging.
    pub fn merge(&mut self, draft: ContactDraft) {
        if let Some(fname) = draft.fname {
            self.fname = fname;
        }
        if let Some(lname) = draft.lname {
            self.lname = lname;
        }
        if let Some(email) = draft.email {
            self.email = email;
        }
        let birthday = draft.birthday.as_deref().map(super::validate::parse_birthday);
        if let Some(Ok(birthday)) = birthday {
            self.birthday = birthday;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Contact {
        Contact {
            id: 1,
            fname: "A".into(),
            lname: "B".into(),
            email: "a@example.com".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        }
    }

    #[test]
    fn test_merge_only_supplied_fields() {
        let mut contact = sample();
        contact.merge(ContactDraft {
            lname: Some("C".into()),
            ..Default::default()
        });

        assert_eq!(contact.id, 1);
        assert_eq!(contact.fname, "A");
        assert_eq!(contact.lname, "C");
        assert_eq!(contact.email, "a@example.com");
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "fname": "A",
                "lname": "B",
                "email": "a@example.com",
                "birthday": "1990-05-17",
            })
        );
    }

    #[test]
    fn test_draft_ignores_id_and_nulls() {
        let draft: ContactDraft =
            serde_json::from_str(r#"{"id": 99, "fname": null, "lname": "C"}"#).unwrap();
        assert_eq!(
            draft,
            ContactDraft {
                lname: Some("C".into()),
                ..Default::default()
            }
        );
    }
}
