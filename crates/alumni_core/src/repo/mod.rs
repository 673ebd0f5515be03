//! Repository layer: entity statements over the query gateway.
//!
//! # Responsibility
//! - Own every SQL statement of the alumni store.
//! - Bind typed model values as positional parameters.
//! - Isolate statement text from service/business orchestration.
//!
//! # Invariants
//! - Repositories never check roles and never parse operator input.
//! - Listing views order by primary key unless the statement says otherwise.
//! - Column names in dynamic partial updates come from fixed code only.

pub mod alumni_repo;
pub mod committee_repo;
pub mod department_repo;
pub mod education_repo;
pub mod event_repo;
pub mod mentorship_repo;
pub mod participation_repo;
pub mod student_repo;

use crate::gateway::{CellValue, GatewayResult, QueryGateway};
use crate::model::form::{format_date, Choice};
use chrono::NaiveDate;
use rusqlite::types::Value;

pub(crate) fn int(value: i64) -> Value {
    Value::Integer(value)
}

pub(crate) fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

pub(crate) fn opt_text(value: Option<&str>) -> Value {
    value.map_or(Value::Null, text)
}

pub(crate) fn date(value: NaiveDate) -> Value {
    Value::Text(format_date(value))
}

pub(crate) fn opt_date(value: Option<NaiveDate>) -> Value {
    value.map_or(Value::Null, date)
}

/// Runs a two-column `(id, name)` statement and returns selection choices.
pub(crate) fn read_choices(gateway: &QueryGateway<'_>, sql: &str) -> GatewayResult<Vec<Choice>> {
    let outcome = gateway.read(sql, &[])?;
    Ok(outcome
        .rows()
        .iter()
        .filter_map(|row| match row.as_slice() {
            [CellValue::Integer(id), name, ..] => Some(Choice {
                id: *id,
                name: name.to_string(),
            }),
            _ => None,
        })
        .collect())
}

/// Escapes `LIKE` wildcards so the fragment matches literally.
pub(crate) fn like_fragment(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
