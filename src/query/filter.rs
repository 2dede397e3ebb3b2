//! Header-driven contact filtering.
//!
//! # Design Decisions
//! - Applied only when field, operator and value are all supplied
//! - Text comparisons ignore case
//! - Birthdays compare by ISO text, which orders chronologically

use std::str::FromStr;

use crate::contacts::Contact;
use crate::query::sort::SortField;
use crate::query::QueryError;

pub const X_FILTER_BY: &str = "x-filter-by";
pub const X_FILTER_OPERATOR: &str = "x-filter-operator";
pub const X_FILTER_VALUE: &str = "x-filter-value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
}

impl FromStr for FilterOperator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "contains" => Ok(FilterOperator::Contains),
            _ => Err(QueryError::InvalidEnum("Invalid filter operator".into())),
        }
    }
}

impl FilterOperator {
    fn matches(&self, actual: &str, expected: &str) -> bool {
        match self {
            FilterOperator::Eq => actual == expected,
            FilterOperator::Ne => actual != expected,
            FilterOperator::Gt => actual > expected,
            FilterOperator::Gte => actual >= expected,
            FilterOperator::Lt => actual < expected,
            FilterOperator::Lte => actual <= expected,
            FilterOperator::Contains => actual.contains(expected),
        }
    }
}

/// Raw filter triple as read from the request headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTriple {
    pub field: Option<String>,
    pub operator: Option<String>,
    pub value: Option<String>,
}

impl FilterTriple {
    /// The triple, if every part is present and non-empty.
    pub fn complete(&self) -> Option<(&str, &str, &str)> {
        fn part(p: &Option<String>) -> Option<&str> {
            p.as_deref().filter(|s| !s.is_empty())
        }
        Some((part(&self.field)?, part(&self.operator)?, part(&self.value)?))
    }
}

/// Keep the contacts whose `field` satisfies `operator` against `value`.
pub fn filter_contacts(
    contacts: Vec<Contact>,
    field: &str,
    operator: &str,
    value: &str,
) -> Result<Vec<Contact>, QueryError> {
    let field: SortField = field
        .parse()
        .map_err(|_| QueryError::InvalidEnum("Invalid filter field".into()))?;
    let operator: FilterOperator = operator.parse()?;
    let expected = value.to_lowercase();

    Ok(contacts
        .into_iter()
        .filter(|c| operator.matches(&field.text(c).to_lowercase(), &expected))
        .collect())
}
