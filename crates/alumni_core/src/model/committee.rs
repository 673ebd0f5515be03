//! Event committee records.

use crate::model::form::{
    optional, parse_int, parse_selection, require_all, required, FormResult, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Committee {
    pub cid: i64,
    pub event_id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub head: String,
}

/// Operator input for `committee.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteeForm {
    pub cid: String,
    pub event: String,
    pub name: String,
    pub phone: String,
    pub head: String,
}

impl CommitteeForm {
    pub fn parse(&self) -> FormResult<Committee> {
        require_all(&[
            ("Committee ID", &self.cid),
            ("Event", &self.event),
            ("Name", &self.name),
            ("Head", &self.head),
        ])?;
        Ok(Committee {
            cid: parse_int("Committee ID", &self.cid)?,
            event_id: parse_selection("Event", &self.event)?,
            name: required("Name", &self.name)?,
            phone: optional(&self.phone),
            head: required("Head", &self.head)?,
        })
    }
}

/// Parsed `committee.update`; at least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeUpdate {
    pub cid: i64,
    pub head: Option<String>,
    pub phone: Option<String>,
}

/// Operator input for `committee.update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteeUpdateForm {
    pub cid: String,
    pub head: String,
    pub phone: String,
}

impl CommitteeUpdateForm {
    pub fn parse(&self) -> FormResult<CommitteeUpdate> {
        let cid = parse_int("Committee ID", &self.cid)?;
        let head = optional(&self.head);
        let phone = optional(&self.phone);
        if head.is_none() && phone.is_none() {
            return Err(ValidationError::NoUpdateField {
                fields: &["New Head", "New Phone"],
            });
        }
        Ok(CommitteeUpdate { cid, head, phone })
    }
}
