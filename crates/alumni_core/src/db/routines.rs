//! Stored routines and procedures of the alumni store.
//!
//! SQLite has no server-side routines, so scalar routines are registered on
//! every connection as application-defined SQL functions and procedures are
//! kept here as named statement bodies invoked through
//! [`crate::gateway::QueryGateway::call_procedure`].
//!
//! # Invariants
//! - Routine names match the ones used inline in report queries.
//! - Procedures bind parameters positionally in declaration order.

use crate::model::form::DATE_FORMAT;
use chrono::{Local, NaiveDate};
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::Connection;

/// `mentorship_duration(start_date, end_date)` -> days; open mentorships run until today.
pub const MENTORSHIP_DURATION_FN: &str = "mentorship_duration";

/// Registers every scalar routine on the given connection.
pub fn register_routines(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        MENTORSHIP_DURATION_FN,
        2,
        FunctionFlags::SQLITE_UTF8,
        mentorship_duration,
    )
}

/// Days between two dates, negative when `end` precedes `start`.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

fn mentorship_duration(ctx: &Context<'_>) -> rusqlite::Result<Option<i64>> {
    let Some(start) = ctx.get::<Option<String>>(0)? else {
        return Ok(None);
    };
    let start = parse_stored_date(&start)?;
    let end = match ctx.get::<Option<String>>(1)? {
        Some(end) => parse_stored_date(&end)?,
        None => Local::now().date_naive(),
    };
    Ok(Some(duration_days(start, end)))
}

fn parse_stored_date(value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| rusqlite::Error::UserFunctionError(Box::new(err)))
}

/// Stored procedures known to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    /// `(alumni_id)` -> mentee roster of one alumnus.
    ListMentorshipsByAlumni,
    /// `(alumni_id, email, phone)`; empty strings keep the current value.
    UpdateAlumniContact,
}

impl Procedure {
    pub fn name(self) -> &'static str {
        match self {
            Self::ListMentorshipsByAlumni => "list_mentorships_by_alumni",
            Self::UpdateAlumniContact => "update_alumni_contact",
        }
    }

    /// Number of positional parameters the procedure expects.
    pub fn arity(self) -> usize {
        match self {
            Self::ListMentorshipsByAlumni => 1,
            Self::UpdateAlumniContact => 3,
        }
    }

    /// Whether the procedure produces a result set rather than mutating rows.
    pub fn returns_rows(self) -> bool {
        matches!(self, Self::ListMentorshipsByAlumni)
    }

    pub(crate) fn body(self) -> &'static str {
        match self {
            Self::ListMentorshipsByAlumni => {
                "SELECT
                    M.mid,
                    S.student_id,
                    S.name AS student_name,
                    S.email AS student_email,
                    M.start_date,
                    M.end_date
                 FROM Mentorship M
                 JOIN Student S ON M.student_id = S.student_id
                 WHERE M.alumni_id = ?1
                 ORDER BY M.mid;"
            }
            Self::UpdateAlumniContact => {
                "UPDATE Alumni
                 SET
                    email = COALESCE(NULLIF(?2, ''), email),
                    phone_number = COALESCE(NULLIF(?3, ''), phone_number)
                 WHERE alumni_id = ?1;"
            }
        }
    }
}
