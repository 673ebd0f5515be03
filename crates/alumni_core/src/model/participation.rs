//! Event participation of students and alumni.
//!
//! # Invariants
//! - Status is one of `Registered`, `Attended`, `Cancelled`.
//! - A registration with a blank status is stored as `Registered`.
//! - Participation ids are scoped per participant kind.

use crate::model::form::{parse_int, parse_selection, require_all, FormResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// RSVP status of one participation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpStatus {
    #[default]
    Registered,
    Attended,
    Cancelled,
}

impl RsvpStatus {
    pub const ALL: [RsvpStatus; 3] = [Self::Registered, Self::Attended, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "Registered",
            Self::Attended => "Attended",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Case-insensitive parse of a status name.
    pub fn parse(field: &'static str, raw: &str) -> FormResult<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::InvalidChoice {
                field,
                value: trimmed.to_string(),
            })
    }
}

impl Display for RsvpStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which participation table a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    Student,
    Alumni,
}

impl ParticipantKind {
    pub fn parse(field: &'static str, raw: &str) -> FormResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "alumni" => Ok(Self::Alumni),
            _ => Err(ValidationError::InvalidChoice {
                field,
                value: raw.trim().to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Alumni => "alumni",
        }
    }

    pub(crate) fn table(self) -> &'static str {
        match self {
            Self::Student => "EventParticipationStudent",
            Self::Alumni => "EventParticipationAlumni",
        }
    }

    pub(crate) fn participant_column(self) -> &'static str {
        match self {
            Self::Student => "student_id",
            Self::Alumni => "alumni_id",
        }
    }

    fn participant_field(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Alumni => "Alumni",
        }
    }
}

impl Display for ParticipantKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    pub pid: i64,
    pub event_id: i64,
    pub kind: ParticipantKind,
    pub participant_id: i64,
    pub status: RsvpStatus,
}

/// Operator input for the `participation.register_*` operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipationForm {
    pub pid: String,
    pub event: String,
    pub participant: String,
    pub status: String,
}

impl ParticipationForm {
    pub fn parse(&self, kind: ParticipantKind) -> FormResult<Participation> {
        let participant_field = kind.participant_field();
        require_all(&[
            ("Participation ID", &self.pid),
            ("Event", &self.event),
            (participant_field, &self.participant),
        ])?;
        let status = if self.status.trim().is_empty() {
            RsvpStatus::default()
        } else {
            RsvpStatus::parse("Status", &self.status)?
        };
        Ok(Participation {
            pid: parse_int("Participation ID", &self.pid)?,
            event_id: parse_selection("Event", &self.event)?,
            kind,
            participant_id: parse_selection(participant_field, &self.participant)?,
            status,
        })
    }
}

/// Key of one participation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipationKey {
    pub kind: ParticipantKind,
    pub pid: i64,
}

/// Operator input for `participation.delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipationKeyForm {
    pub kind: String,
    pub pid: String,
}

impl ParticipationKeyForm {
    pub fn parse(&self) -> FormResult<ParticipationKey> {
        require_all(&[("Participant Type", &self.kind), ("Participation ID", &self.pid)])?;
        Ok(ParticipationKey {
            kind: ParticipantKind::parse("Participant Type", &self.kind)?,
            pid: parse_int("Participation ID", &self.pid)?,
        })
    }
}

/// Operator input for `participation.update_status`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusUpdateForm {
    pub kind: String,
    pub pid: String,
    pub status: String,
}

impl StatusUpdateForm {
    pub fn parse(&self) -> FormResult<(ParticipationKey, RsvpStatus)> {
        require_all(&[
            ("Participant Type", &self.kind),
            ("Participation ID", &self.pid),
            ("New Status", &self.status),
        ])?;
        let key = ParticipationKeyForm {
            kind: self.kind.clone(),
            pid: self.pid.clone(),
        }
        .parse()?;
        Ok((key, RsvpStatus::parse("New Status", &self.status)?))
    }
}

#[cfg(test)]
mod tests {
    use super::{ParticipantKind, ParticipationForm, RsvpStatus, StatusUpdateForm};
    use crate::model::form::ValidationError;

    #[test]
    fn blank_status_defaults_to_registered() {
        let form = ParticipationForm {
            pid: "1".to_string(),
            event: "5 - Meetup".to_string(),
            participant: "7 - Sam".to_string(),
            status: String::new(),
        };
        let participation = form.parse(ParticipantKind::Student).expect("valid form");
        assert_eq!(participation.status, RsvpStatus::Registered);
        assert_eq!(participation.participant_id, 7);
        assert_eq!(participation.event_id, 5);
    }

    #[test]
    fn status_parse_is_case_insensitive_and_closed() {
        assert_eq!(
            RsvpStatus::parse("Status", "attended"),
            Ok(RsvpStatus::Attended)
        );
        assert!(matches!(
            RsvpStatus::parse("Status", "Maybe"),
            Err(ValidationError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn status_update_names_missing_participant_field() {
        let form = StatusUpdateForm {
            kind: "alumni".to_string(),
            pid: "2".to_string(),
            status: String::new(),
        };
        assert_eq!(
            form.parse(),
            Err(ValidationError::Required {
                field: "New Status"
            })
        );
    }

    #[test]
    fn participant_kind_selects_table() {
        assert_eq!(ParticipantKind::Student.table(), "EventParticipationStudent");
        assert_eq!(ParticipantKind::Alumni.participant_column(), "alumni_id");
        assert!(ParticipantKind::parse("Participant Type", "staff").is_err());
    }
}
