//! Department records.

use crate::model::form::{parse_int, require_all, required, FormResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub dept_id: i64,
    pub name: String,
    /// Head of department.
    pub hod: String,
}

/// Operator input for `department.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    pub dept_id: String,
    pub name: String,
    pub hod: String,
}

impl DepartmentForm {
    pub fn parse(&self) -> FormResult<Department> {
        require_all(&[
            ("Department ID", &self.dept_id),
            ("Name", &self.name),
            ("HOD", &self.hod),
        ])?;
        Ok(Department {
            dept_id: parse_int("Department ID", &self.dept_id)?,
            name: required("Name", &self.name)?,
            hod: required("HOD", &self.hod)?,
        })
    }
}

/// Operator input for `department.update`: replaces the head of department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentHodForm {
    pub dept_id: String,
    pub hod: String,
}

impl DepartmentHodForm {
    pub fn parse(&self) -> FormResult<(i64, String)> {
        require_all(&[("Department ID", &self.dept_id), ("New HOD", &self.hod)])?;
        Ok((
            parse_int("Department ID", &self.dept_id)?,
            required("New HOD", &self.hod)?,
        ))
    }
}
