//! Event records.

use crate::model::form::{
    optional, parse_date, parse_int, parse_optional_date, require_all, required, FormResult,
    ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub date: NaiveDate,
}

/// Operator input for `event.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub event_id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

impl EventForm {
    pub fn parse(&self) -> FormResult<Event> {
        require_all(&[
            ("Event ID", &self.event_id),
            ("Name", &self.name),
            ("Location", &self.location),
            ("Date", &self.date),
        ])?;
        Ok(Event {
            event_id: parse_int("Event ID", &self.event_id)?,
            name: required("Name", &self.name)?,
            description: optional(&self.description),
            location: required("Location", &self.location)?,
            date: parse_date("Date", &self.date)?,
        })
    }
}

/// Parsed `event.update`; at least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventUpdate {
    pub event_id: i64,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Operator input for `event.update`; blank fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdateForm {
    pub event_id: String,
    pub description: String,
    pub location: String,
    pub date: String,
}

impl EventUpdateForm {
    pub fn parse(&self) -> FormResult<EventUpdate> {
        let event_id = parse_int("Event ID", &self.event_id)?;
        let update = EventUpdate {
            event_id,
            description: optional(&self.description),
            location: optional(&self.location),
            date: parse_optional_date("New Date", &self.date)?,
        };
        if update.description.is_none() && update.location.is_none() && update.date.is_none() {
            return Err(ValidationError::NoUpdateField {
                fields: &["New Description", "New Location", "New Date"],
            });
        }
        Ok(update)
    }
}
