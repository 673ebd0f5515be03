//! Education history records. Identity is `(alumni_id, edu_id)`.

use crate::model::form::{parse_int, parse_selection, require_all, required, FormResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub edu_id: i64,
    pub alumni_id: i64,
    pub college_name: String,
    pub degree: String,
    pub course: String,
    pub start_year: i64,
    pub end_year: i64,
}

/// Operator input for `education.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationForm {
    pub edu_id: String,
    pub alumni: String,
    pub college_name: String,
    pub degree: String,
    pub course: String,
    pub start_year: String,
    pub end_year: String,
}

impl EducationForm {
    pub fn parse(&self) -> FormResult<Education> {
        require_all(&[
            ("Education ID", &self.edu_id),
            ("Alumni", &self.alumni),
            ("College Name", &self.college_name),
            ("Degree", &self.degree),
            ("Course", &self.course),
            ("Start Year", &self.start_year),
            ("End Year", &self.end_year),
        ])?;
        Ok(Education {
            edu_id: parse_int("Education ID", &self.edu_id)?,
            alumni_id: parse_selection("Alumni", &self.alumni)?,
            college_name: required("College Name", &self.college_name)?,
            degree: required("Degree", &self.degree)?,
            course: required("Course", &self.course)?,
            start_year: parse_int("Start Year", &self.start_year)?,
            end_year: parse_int("End Year", &self.end_year)?,
        })
    }
}

/// Composite key of one education record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationKey {
    pub alumni_id: i64,
    pub edu_id: i64,
}

/// Operator input for `education.delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationKeyForm {
    pub alumni: String,
    pub edu_id: String,
}

impl EducationKeyForm {
    pub fn parse(&self) -> FormResult<EducationKey> {
        require_all(&[("Alumni", &self.alumni), ("Education ID", &self.edu_id)])?;
        Ok(EducationKey {
            edu_id: parse_int("Education ID", &self.edu_id)?,
            alumni_id: parse_selection("Alumni", &self.alumni)?,
        })
    }
}
