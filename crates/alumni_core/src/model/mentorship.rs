//! Mentorship records linking one alumnus to one student.
//!
//! # Invariants
//! - `end_date = None` means the mentorship is ongoing.
//! - `end_date` earlier than `start_date` is accepted; see
//!   [`Mentorship::ends_before_start`].

use crate::model::form::{
    parse_date, parse_int, parse_optional_date, parse_selection, require_all, FormResult,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentorship {
    pub mid: i64,
    pub alumni_id: i64,
    pub student_id: i64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Mentorship {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn ends_before_start(&self) -> bool {
        self.end_date.is_some_and(|end| end < self.start_date)
    }
}

/// Operator input for `mentorship.start`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorshipForm {
    pub mid: String,
    pub alumni: String,
    pub student: String,
    pub start_date: String,
    pub end_date: String,
}

impl MentorshipForm {
    pub fn parse(&self) -> FormResult<Mentorship> {
        require_all(&[
            ("Mentorship ID", &self.mid),
            ("Alumni", &self.alumni),
            ("Student", &self.student),
            ("Start Date", &self.start_date),
        ])?;
        Ok(Mentorship {
            mid: parse_int("Mentorship ID", &self.mid)?,
            alumni_id: parse_selection("Alumni", &self.alumni)?,
            student_id: parse_selection("Student", &self.student)?,
            start_date: parse_date("Start Date", &self.start_date)?,
            end_date: parse_optional_date("End Date", &self.end_date)?,
        })
    }
}

/// Operator input for `mentorship.end`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndMentorshipForm {
    pub mid: String,
    pub end_date: String,
}

impl EndMentorshipForm {
    pub fn parse(&self) -> FormResult<(i64, NaiveDate)> {
        require_all(&[("Mentorship ID", &self.mid), ("End Date", &self.end_date)])?;
        Ok((
            parse_int("Mentorship ID", &self.mid)?,
            parse_date("End Date", &self.end_date)?,
        ))
    }
}
