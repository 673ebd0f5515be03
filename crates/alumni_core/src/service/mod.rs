//! Domain operations: role-checked, validated use cases over repositories.
//!
//! # Responsibility
//! - Check the session's capability for an operation before anything else.
//! - Parse operator input into typed records before any store call.
//! - Refresh the entity listing after every successful write.
//!
//! # Invariants
//! - Order per operation: policy check, validation, confirmation, store.
//! - Declined deletes never reach the store.
//! - Display transforms (duplicate suppression) never change stored data.

pub mod alumni_service;
pub mod committee_service;
pub mod department_service;
pub mod education_service;
pub mod event_service;
pub mod mentorship_service;
pub mod participation_service;
pub mod student_service;

use crate::gateway::{CellValue, GatewayError, GatewayResult, ReadOutcome, ResultSet, WriteOutcome};
use crate::model::form::ValidationError;
use crate::policy::{AccessGuard, Operation, PolicyError};
use log::{error, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of one domain operation.
#[derive(Debug)]
pub enum ServiceError {
    /// The session role may not invoke the operation. Nothing was validated or executed.
    Denied(PolicyError),
    /// Operator input was rejected locally. Nothing was executed.
    Validation(ValidationError),
    /// The store rejected or failed the statement.
    Gateway(GatewayError),
}

impl ServiceError {
    /// True for both policy denials and store-reported permission errors.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Denied(_) => true,
            Self::Gateway(err) => err.is_permission_denied(),
            Self::Validation(_) => false,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Denied(_) => "denied",
            Self::Validation(_) => "validation",
            Self::Gateway(GatewayError::PermissionDenied { .. }) => "store_denied",
            Self::Gateway(GatewayError::Store(_)) => "store",
            Self::Gateway(GatewayError::ProcedureMode { .. }) => "procedure_mode",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denied(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Denied(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Gateway(err) => Some(err),
        }
    }
}

impl From<PolicyError> for ServiceError {
    fn from(value: PolicyError) -> Self {
        Self::Denied(value)
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<GatewayError> for ServiceError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Result of a successful write: affected rows plus the refreshed listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteReport {
    pub affected_rows: usize,
    pub refreshed: ReadOutcome,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The operator declined the confirmation; the store was not touched.
    Declined,
    Completed(WriteReport),
}

impl DeleteOutcome {
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }

    pub fn report(&self) -> Option<&WriteReport> {
        match self {
            Self::Declined => None,
            Self::Completed(report) => Some(report),
        }
    }
}

/// Yes/no confirmation asked before every delete.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirmation for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Runs one domain operation behind the session guard and logs its outcome.
pub(crate) fn run<T>(
    guard: &AccessGuard,
    operation: Operation,
    body: impl FnOnce() -> ServiceResult<T>,
) -> ServiceResult<T> {
    guard.check(operation)?;

    let started_at = Instant::now();
    let result = body();
    let duration_ms = started_at.elapsed().as_millis();
    match &result {
        Ok(_) => info!(
            "event=operation module=service status=ok session_id={} role={} operation={} duration_ms={}",
            guard.session_id(),
            guard.role(),
            operation,
            duration_ms
        ),
        Err(ServiceError::Validation(validation)) => warn!(
            "event=operation module=service status=invalid session_id={} role={} operation={} duration_ms={} field={}",
            guard.session_id(),
            guard.role(),
            operation,
            duration_ms,
            validation.field().unwrap_or("-")
        ),
        Err(err) => error!(
            "event=operation module=service status=error session_id={} role={} operation={} duration_ms={} error_kind={}",
            guard.session_id(),
            guard.role(),
            operation,
            duration_ms,
            err.kind()
        ),
    }
    result
}

/// Wraps a write outcome with the refreshed listing of the entity.
pub(crate) fn report(
    outcome: WriteOutcome,
    refresh: impl FnOnce() -> ServiceResult<ReadOutcome>,
) -> ServiceResult<WriteReport> {
    Ok(WriteReport {
        affected_rows: outcome.affected_rows,
        refreshed: refresh()?,
    })
}

/// Asks for confirmation and runs `delete` only when the operator agrees.
pub(crate) fn confirm_then(
    confirmation: &dyn Confirmation,
    prompt: &str,
    delete: impl FnOnce() -> ServiceResult<WriteReport>,
) -> ServiceResult<DeleteOutcome> {
    if !confirmation.confirm(prompt) {
        info!("event=delete_declined module=service status=ok");
        return Ok(DeleteOutcome::Declined);
    }
    delete().map(DeleteOutcome::Completed)
}

/// Lifts a repository read into the service result type.
pub(crate) fn read(result: GatewayResult<ReadOutcome>) -> ServiceResult<ReadOutcome> {
    result.map_err(ServiceError::from)
}

/// Blanks the first `blank_width` cells of every row whose first cell equals
/// the previous row's first cell. Rows must already be ordered by that cell.
pub fn suppress_repeated_leading(set: &mut ResultSet, blank_width: usize) {
    let mut previous: Option<CellValue> = None;
    for row in &mut set.rows {
        let Some(leading) = row.first().cloned() else {
            continue;
        };
        if previous.as_ref() == Some(&leading) {
            for cell in row.iter_mut().take(blank_width) {
                *cell = CellValue::blank();
            }
        }
        previous = Some(leading);
    }
}
