//! Operator input parsing shared by every entity form.
//!
//! # Responsibility
//! - Turn raw operator strings into typed values.
//! - Name the offending field in every validation error.
//!
//! # Invariants
//! - Parsing never touches the store.
//! - Dates are accepted only in exact `YYYY-MM-DD` shape and must exist in
//!   the calendar.
//! - Text values are trimmed; blank optional text becomes `None`.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date shape regex"));

/// Display and storage format of every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SELECTION_SEPARATOR: &str = " - ";

/// Local input validation failures. No store call is made when one occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was blank.
    Required { field: &'static str },
    /// An integer field could not be parsed.
    NotANumber { field: &'static str, value: String },
    /// A date field was not a `YYYY-MM-DD` calendar date.
    InvalidDate { field: &'static str, value: String },
    /// A selection did not name a known option.
    InvalidChoice { field: &'static str, value: String },
    /// A partial update named none of its fields.
    NoUpdateField { fields: &'static [&'static str] },
    /// An exclusive partial update named more than one field.
    ConflictingUpdateFields { fields: Vec<&'static str> },
}

impl ValidationError {
    /// Name of the field the error is about, when there is exactly one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Required { field }
            | Self::NotANumber { field, .. }
            | Self::InvalidDate { field, .. }
            | Self::InvalidChoice { field, .. } => Some(*field),
            Self::NoUpdateField { .. } | Self::ConflictingUpdateFields { .. } => None,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::NotANumber { field, value } => {
                write!(f, "{field} must be a valid number, got `{value}`")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} must be in YYYY-MM-DD format, got `{value}`")
            }
            Self::InvalidChoice { field, value } => {
                write!(f, "{field} has no option `{value}`")
            }
            Self::NoUpdateField { fields } => {
                write!(f, "enter at least one field to update ({})", fields.join(", "))
            }
            Self::ConflictingUpdateFields { fields } => write!(
                f,
                "update only one field at a time, got {}",
                fields.join(" and ")
            ),
        }
    }
}

impl Error for ValidationError {}

pub type FormResult<T> = Result<T, ValidationError>;

/// Id/name pair offered in a selection list, rendered as `"<id> - <name>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: i64,
    pub name: String,
}

impl Display for Choice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SELECTION_SEPARATOR}{}", self.id, self.name)
    }
}

/// Fails on the first blank field, in declaration order.
pub fn require_all<S: AsRef<str>>(fields: &[(&'static str, S)]) -> FormResult<()> {
    for (field, raw) in fields {
        if raw.as_ref().trim().is_empty() {
            return Err(ValidationError::Required { field: *field });
        }
    }
    Ok(())
}

/// Trimmed required text.
pub fn required(field: &'static str, raw: &str) -> FormResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Trimmed optional text; blank becomes `None`.
pub fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Required integer field.
pub fn parse_int(field: &'static str, raw: &str) -> FormResult<i64> {
    let trimmed = required(field, raw)?;
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: trimmed,
        })
}

/// Required `YYYY-MM-DD` date field. Surrounding whitespace is rejected,
/// not trimmed.
pub fn parse_date(field: &'static str, raw: &str) -> FormResult<NaiveDate> {
    required(field, raw)?;
    let invalid = || ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    };
    if !DATE_SHAPE_RE.is_match(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

/// Optional `YYYY-MM-DD` date field; blank becomes `None`.
pub fn parse_optional_date(field: &'static str, raw: &str) -> FormResult<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(field, raw).map(Some)
}

/// Selection field holding either `"<id>"` or `"<id> - <name>"`.
pub fn parse_selection(field: &'static str, raw: &str) -> FormResult<i64> {
    let trimmed = required(field, raw)?;
    let id_part = trimmed
        .split(SELECTION_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim();
    id_part
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidChoice {
            field,
            value: trimmed.clone(),
        })
}

/// Storage text of a date value.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
