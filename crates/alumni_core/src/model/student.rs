//! Student records and forms.

use crate::model::form::{
    optional, parse_int, parse_selection, require_all, required, FormResult, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub batch_year: i64,
    pub dept_id: i64,
}

/// Operator input for `student.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub batch_year: String,
    pub department: String,
}

impl StudentForm {
    pub fn parse(&self) -> FormResult<Student> {
        require_all(&[
            ("Student ID", &self.student_id),
            ("Name", &self.name),
            ("Email", &self.email),
            ("Batch Year", &self.batch_year),
            ("Department", &self.department),
        ])?;
        Ok(Student {
            student_id: parse_int("Student ID", &self.student_id)?,
            name: required("Name", &self.name)?,
            email: required("Email", &self.email)?,
            phone: optional(&self.phone),
            batch_year: parse_int("Batch Year", &self.batch_year)?,
            dept_id: parse_selection("Department", &self.department)?,
        })
    }
}

/// The single contact field a `student.update` changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentContactChange {
    Email(String),
    Phone(String),
}

/// Operator input for `student.update`; exactly one of email/phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdateForm {
    pub student_id: String,
    pub email: String,
    pub phone: String,
}

impl StudentUpdateForm {
    pub fn parse(&self) -> FormResult<(i64, StudentContactChange)> {
        let student_id = parse_int("Student ID", &self.student_id)?;
        let change = match (optional(&self.email), optional(&self.phone)) {
            (Some(email), None) => StudentContactChange::Email(email),
            (None, Some(phone)) => StudentContactChange::Phone(phone),
            (None, None) => {
                return Err(ValidationError::NoUpdateField {
                    fields: &["New Email", "New Phone"],
                })
            }
            (Some(_), Some(_)) => {
                return Err(ValidationError::ConflictingUpdateFields {
                    fields: vec!["New Email", "New Phone"],
                })
            }
        };
        Ok((student_id, change))
    }
}
