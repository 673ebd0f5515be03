//! Query gateway: the single path from domain operations to the store.
//!
//! # Responsibility
//! - Execute one parameterized statement in read or write mode.
//! - Return discriminated outcomes (rows / empty / write count) instead of
//!   sentinel values.
//! - Classify store failures into permission-denied vs generic errors.
//!
//! # Invariants
//! - Every call prepares its own statement; it is released on every exit path.
//! - Writes run in a transaction that commits only after the statement
//!   succeeded; failures roll back.
//! - Bound parameter values are never logged.

use crate::db::routines::Procedure;
use crate::db::DbError;
use log::{debug, error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params_from_iter, Connection, ErrorCode};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

static PERMISSION_TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(command denied|not authorized|permission denied|access denied)")
        .expect("valid permission regex")
});

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway failure classes.
#[derive(Debug)]
pub enum GatewayError {
    /// The store refused the statement for lack of privileges. Nothing was committed.
    PermissionDenied { message: String },
    /// Any other store failure (constraint, syntax, connectivity). Nothing was committed.
    Store(DbError),
    /// A procedure was called through the helper of the other mode. Nothing was executed.
    ProcedureMode {
        procedure: &'static str,
        expected: Mode,
    },
}

impl GatewayError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied { message } => write!(f, "permission denied: {message}"),
            Self::Store(err) => write!(f, "error executing query: {err}"),
            Self::ProcedureMode {
                procedure,
                expected,
            } => write!(
                f,
                "procedure `{procedure}` is not a {} procedure",
                expected.as_str()
            ),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PermissionDenied { .. } | Self::ProcedureMode { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(value: rusqlite::Error) -> Self {
        if is_permission_error(&value) {
            Self::PermissionDenied {
                message: value.to_string(),
            }
        } else {
            Self::Store(DbError::Sqlite(value))
        }
    }
}

/// Returns whether a store error reports missing privileges.
pub fn is_permission_error(err: &rusqlite::Error) -> bool {
    if matches!(
        err.sqlite_error_code(),
        Some(ErrorCode::AuthorizationForStatementDenied | ErrorCode::PermissionDenied)
    ) {
        return true;
    }
    PERMISSION_TEXT_RE.is_match(&err.to_string())
}

/// Execution mode of one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// One scalar cell of a result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    pub fn blank() -> Self {
        Self::Text(String::new())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(value) => Self::Integer(value),
            ValueRef::Real(value) => Self::Real(value),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Self::Text(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Ordered rows plus ordered column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultSet {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Values of one named column, in row order.
    pub fn column(&self, name: &str) -> Vec<&CellValue> {
        match self.column_index(name) {
            Some(index) => self.rows.iter().filter_map(|row| row.get(index)).collect(),
            None => Vec::new(),
        }
    }
}

/// Outcome of a successful read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadOutcome {
    Rows(ResultSet),
    Empty { columns: Vec<String> },
}

impl ReadOutcome {
    fn from_result_set(set: ResultSet) -> Self {
        if set.rows.is_empty() {
            Self::Empty {
                columns: set.columns,
            }
        } else {
            Self::Rows(set)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn columns(&self) -> &[String] {
        match self {
            Self::Rows(set) => &set.columns,
            Self::Empty { columns } => columns,
        }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        match self {
            Self::Rows(set) => &set.rows,
            Self::Empty { .. } => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn into_result_set(self) -> ResultSet {
        match self {
            Self::Rows(set) => set,
            Self::Empty { columns } => ResultSet {
                columns,
                rows: Vec::new(),
            },
        }
    }

    /// Applies a display transform to the rows, keeping the outcome shape.
    pub fn map_rows(self, transform: impl FnOnce(&mut ResultSet)) -> Self {
        match self {
            Self::Rows(mut set) => {
                transform(&mut set);
                Self::Rows(set)
            }
            empty @ Self::Empty { .. } => empty,
        }
    }
}

/// Outcome of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub affected_rows: usize,
}

/// Outcome of [`QueryGateway::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Execution {
    Read(ReadOutcome),
    Write(WriteOutcome),
}

/// Statement executor bound to one session connection.
#[derive(Clone, Copy)]
pub struct QueryGateway<'conn> {
    conn: &'conn Connection,
}

impl<'conn> QueryGateway<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Executes `sql` with positional `params` in the requested mode.
    pub fn execute(&self, sql: &str, params: &[Value], mode: Mode) -> GatewayResult<Execution> {
        match mode {
            Mode::Read => self.read(sql, params).map(Execution::Read),
            Mode::Write => self.write(sql, params).map(Execution::Write),
        }
    }

    /// Runs a row-returning statement.
    pub fn read(&self, sql: &str, params: &[Value]) -> GatewayResult<ReadOutcome> {
        let started_at = Instant::now();
        let result = self.query_rows(sql, params);
        let result = self.finish(Mode::Read, started_at, result, |set| set.rows.len());
        result.map(ReadOutcome::from_result_set)
    }

    /// Runs a mutating statement and commits it.
    pub fn write(&self, sql: &str, params: &[Value]) -> GatewayResult<WriteOutcome> {
        let started_at = Instant::now();
        let result = self.execute_committed(sql, params);
        let affected_rows = self.finish(Mode::Write, started_at, result, |count| *count)?;
        Ok(WriteOutcome { affected_rows })
    }

    /// Calls a stored procedure; only its first result set is returned.
    pub fn call_procedure(
        &self,
        procedure: Procedure,
        params: &[Value],
    ) -> GatewayResult<Execution> {
        if params.len() != procedure.arity() {
            error!(
                "event=procedure_call module=gateway status=error procedure={} error_code=arity_mismatch",
                procedure.name()
            );
            return Err(rusqlite::Error::InvalidParameterCount(params.len(), procedure.arity()).into());
        }

        debug!(
            "event=procedure_call module=gateway status=start procedure={}",
            procedure.name()
        );
        let mode = if procedure.returns_rows() {
            Mode::Read
        } else {
            Mode::Write
        };
        self.execute(procedure.body(), params, mode)
    }

    /// Calls a row-returning procedure.
    pub fn call_read_procedure(
        &self,
        procedure: Procedure,
        params: &[Value],
    ) -> GatewayResult<ReadOutcome> {
        self.ensure_mode(procedure, Mode::Read)?;
        match self.call_procedure(procedure, params)? {
            Execution::Read(outcome) => Ok(outcome),
            Execution::Write(_) => Err(procedure_mode(procedure, Mode::Read)),
        }
    }

    /// Calls a mutating procedure.
    pub fn call_write_procedure(
        &self,
        procedure: Procedure,
        params: &[Value],
    ) -> GatewayResult<WriteOutcome> {
        self.ensure_mode(procedure, Mode::Write)?;
        match self.call_procedure(procedure, params)? {
            Execution::Write(outcome) => Ok(outcome),
            Execution::Read(_) => Err(procedure_mode(procedure, Mode::Write)),
        }
    }

    fn ensure_mode(&self, procedure: Procedure, expected: Mode) -> GatewayResult<()> {
        if procedure.returns_rows() == (expected == Mode::Read) {
            return Ok(());
        }
        error!(
            "event=procedure_call module=gateway status=error procedure={} error_code=mode_mismatch expected={}",
            procedure.name(),
            expected.as_str()
        );
        Err(procedure_mode(procedure, expected))
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> rusqlite::Result<ResultSet> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                cells.push(CellValue::from(row.get_ref(index)?));
            }
            collected.push(cells);
        }

        Ok(ResultSet {
            columns,
            rows: collected,
        })
    }

    fn execute_committed(&self, sql: &str, params: &[Value]) -> rusqlite::Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let affected = {
            let mut stmt = tx.prepare(sql)?;
            stmt.execute(params_from_iter(params.iter()))?
        };
        tx.commit()?;
        Ok(affected)
    }

    fn finish<T>(
        &self,
        mode: Mode,
        started_at: Instant,
        result: rusqlite::Result<T>,
        count: impl FnOnce(&T) -> usize,
    ) -> GatewayResult<T> {
        match result {
            Ok(value) => {
                debug!(
                    "event=query_execute module=gateway status=ok mode={} rows={} duration_ms={}",
                    mode.as_str(),
                    count(&value),
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(err) => {
                let err = GatewayError::from(err);
                if err.is_permission_denied() {
                    warn!(
                        "event=query_execute module=gateway status=denied mode={} duration_ms={}",
                        mode.as_str(),
                        started_at.elapsed().as_millis()
                    );
                } else {
                    error!(
                        "event=query_execute module=gateway status=error mode={} duration_ms={} error={}",
                        mode.as_str(),
                        started_at.elapsed().as_millis(),
                        err
                    );
                }
                Err(err)
            }
        }
    }
}

fn procedure_mode(procedure: Procedure, expected: Mode) -> GatewayError {
    GatewayError::ProcedureMode {
        procedure: procedure.name(),
        expected,
    }
}
