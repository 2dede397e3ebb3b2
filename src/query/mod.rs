//! Contact listing pipeline.
//!
//! # Data Flow
//! ```text
//! headers (X-Filter-*) + query (sort, direction, page, size)
//!     → filter.rs   (only when the full triple is present)
//!     → sort.rs     (field/direction validated first)
//!     → size cap    (size > 20 fails before paging)
//!     → pager.rs    (page window + total/next/prev)
//!     → ContactPage
//! ```

pub mod filter;
pub mod pager;
pub mod sort;

use serde::Deserialize;
use thiserror::Error;

use crate::contacts::Contact;

pub use filter::{filter_contacts, FilterOperator, FilterTriple};
pub use pager::Pager;
pub use sort::{sort_contacts, SortDirection, SortField};

pub const DEFAULT_SORT_FIELD: &str = "fname";
pub const DEFAULT_SORT_DIRECTION: &str = "asc";
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 20;

/// Failures raised while listing contacts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A sort or filter value outside its allowed set.
    #[error("{0}")]
    InvalidEnum(String),

    #[error("Page size must be between 1 and 20")]
    LimitExceeded,

    #[error("Requested page is out of range")]
    OutOfRange,
}

/// Raw listing parameters from the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

/// One materialized page of contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub contacts: Vec<Contact>,
    pub total: usize,
    pub next: Option<usize>,
    pub prev: Option<usize>,
}

/// Run filter, sort and paging over `contacts`.
pub fn list_contacts(
    contacts: &[Contact],
    filter: &FilterTriple,
    params: &ListParams,
) -> Result<ContactPage, QueryError> {
    let mut selected = contacts.to_vec();
    if let Some((field, operator, value)) = filter.complete() {
        selected = filter_contacts(selected, field, operator, value)?;
    }

    let field: SortField = non_empty(&params.sort).unwrap_or(DEFAULT_SORT_FIELD).parse()?;
    let direction: SortDirection = non_empty(&params.direction)
        .unwrap_or(DEFAULT_SORT_DIRECTION)
        .parse()?;
    sort_contacts(&mut selected, field, direction);

    let page = parse_number(&params.page).unwrap_or(DEFAULT_PAGE as i64);
    let size = parse_number(&params.size).unwrap_or(DEFAULT_PAGE_SIZE as i64);
    let size = usize::try_from(size)
        .ok()
        .filter(|s| *s <= MAX_PAGE_SIZE)
        .ok_or(QueryError::LimitExceeded)?;
    let page = usize::try_from(page).map_err(|_| QueryError::OutOfRange)?;

    let pager = Pager::new(&selected, page, size)?;
    Ok(ContactPage {
        contacts: pager.results().to_vec(),
        total: pager.total(),
        next: pager.next(),
        prev: pager.prev(),
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Parse the leading integer of a parameter, ignoring trailing characters
/// (`25abc` is 25). Missing, malformed or zero values fall back to the
/// default.
fn parse_number(value: &Option<String>) -> Option<i64> {
    let s = non_empty(value)?.trim_start();
    let digits_start = usize::from(s.starts_with(['-', '+']));
    let digits_end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| digits_start + i);
    s[..digits_end].parse::<i64>().ok().filter(|n| *n != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contacts(names: &[&str]) -> Vec<Contact> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Contact {
                id: i as u64 + 1,
                fname: name.to_string(),
                lname: "L".into(),
                email: format!("{}@example.com", name.to_lowercase()),
                birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            })
            .collect()
    }

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut params = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "sort" => params.sort = value,
                "direction" => params.direction = value,
                "page" => params.page = value,
                "size" => params.size = value,
                _ => unreachable!(),
            }
        }
        params
    }

    fn list(all: &[Contact], pairs: &[(&str, &str)]) -> Result<ContactPage, QueryError> {
        list_contacts(all, &FilterTriple::default(), &params(pairs))
    }

    #[test]
    fn test_defaults_sort_by_fname_ascending() {
        let all = contacts(&["Cleo", "Abe", "Bea"]);
        let page = list_contacts(&all, &FilterTriple::default(), &ListParams::default()).unwrap();

        let names: Vec<_> = page.contacts.iter().map(|c| c.fname.as_str()).collect();
        assert_eq!(names, vec!["Abe", "Bea", "Cleo"]);
        assert_eq!(page.total, 1);
        assert_eq!(page.next, None);
        assert_eq!(page.prev, None);
    }

    #[test]
    fn test_paging_over_sorted_results() {
        let names: Vec<String> = (0..25).map(|i| format!("N{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let all = contacts(&refs);

        let page = list_contacts(
            &all,
            &FilterTriple::default(),
            &params(&[("direction", "desc"), ("page", "2"), ("size", "20")]),
        )
        .unwrap();

        assert_eq!(page.contacts.len(), 5);
        assert_eq!(page.contacts[0].fname, "N04");
        assert_eq!(page.total, 2);
        assert_eq!(page.prev, Some(1));
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_size_limit() {
        let all = contacts(&["A"]);
        let err = list(&all, &[("size", "21")]).unwrap_err();
        assert_eq!(err, QueryError::LimitExceeded);

        let err = list(&all, &[("size", "-1")]).unwrap_err();
        assert_eq!(err, QueryError::LimitExceeded);

        assert!(list(&all, &[("size", "20")]).is_ok());
    }

    #[test]
    fn test_malformed_numbers_fall_back_to_defaults() {
        let all = contacts(&["A", "B"]);
        let page = list_contacts(
            &all,
            &FilterTriple::default(),
            &params(&[("page", "abc"), ("size", "0")]),
        )
        .unwrap();
        assert_eq!(page.contacts.len(), 2);
    }

    #[test]
    fn test_numbers_read_leading_digits() {
        assert_eq!(parse_number(&Some("25abc".into())), Some(25));
        assert_eq!(parse_number(&Some(" -3".into())), Some(-3));
        assert_eq!(parse_number(&Some("+7".into())), Some(7));
        assert_eq!(parse_number(&Some("x1".into())), None);
        assert_eq!(parse_number(&Some("-".into())), None);
        assert_eq!(parse_number(&Some("0".into())), None);
        assert_eq!(parse_number(&None), None);

        let all = contacts(&["A"]);
        let err = list(&all, &[("size", "25abc")]).unwrap_err();
        assert_eq!(err, QueryError::LimitExceeded);
    }

    #[test]
    fn test_out_of_range_page() {
        let all = contacts(&["A", "B", "C"]);
        let err = list(&all, &[("page", "9999")]).unwrap_err();
        assert_eq!(err, QueryError::OutOfRange);

        let err = list(&all, &[("page", "-2")]).unwrap_err();
        assert_eq!(err, QueryError::OutOfRange);
    }

    #[test]
    fn test_enum_checked_before_size() {
        let all = contacts(&["A"]);
        let err = list_contacts(
            &all,
            &FilterTriple::default(),
            &params(&[("sort", "age"), ("size", "50")]),
        )
        .unwrap_err();
        assert_eq!(err, QueryError::InvalidEnum("Invalid sort field".into()));
    }

    #[test]
    fn test_filter_applied_before_sort() {
        let all = contacts(&["Cleo", "Abe", "Carl"]);
        let filter = FilterTriple {
            field: Some("fname".into()),
            operator: Some("contains".into()),
            value: Some("c".into()),
        };
        let page = list_contacts(&all, &filter, &ListParams::default()).unwrap();

        let names: Vec<_> = page.contacts.iter().map(|c| c.fname.as_str()).collect();
        assert_eq!(names, vec!["Carl", "Cleo"]);
    }
}
