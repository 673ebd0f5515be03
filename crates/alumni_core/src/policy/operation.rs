//! Catalogue of domain operations.
//!
//! Every operation has a stable identifier (`<group>.<action>`) used by the
//! capability table and the CLI, a display label for presentation layers, a
//! group and a kind.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Management area an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperationGroup {
    Alumni,
    Student,
    Department,
    Education,
    Mentorship,
    Committee,
    Event,
    Participation,
}

impl OperationGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::Alumni => "Alumni Management",
            Self::Student => "Student Management",
            Self::Department => "Department Management",
            Self::Education => "Education Management",
            Self::Mentorship => "Mentorship Management",
            Self::Committee => "Committee Management",
            Self::Event => "Event Management",
            Self::Participation => "Participation Management",
        }
    }
}

/// Effect class of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Read-only listing or report.
    View,
    /// Inserts, updates or deletes rows.
    Write,
    /// Id/name pairs feeding selection lists.
    Lookup,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Write => "write",
            Self::Lookup => "lookup",
        }
    }
}

/// Every operation the core exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Operation {
    AddAlumni,
    ViewAlumni,
    SearchAlumni,
    UpdateAlumniCompany,
    DeleteAlumni,
    CountAlumniByCompany,
    FilterAlumniByDepartment,
    UpdateAlumniContact,
    LookupAlumni,
    AddStudent,
    ViewStudents,
    UpdateStudent,
    DeleteStudent,
    LookupStudents,
    AddDepartment,
    ViewDepartments,
    UpdateDepartment,
    DeleteDepartment,
    LookupDepartments,
    AddEducation,
    ViewEducation,
    DeleteEducation,
    ViewAlumniEducation,
    StartMentorship,
    ViewMentorships,
    ViewMentorshipDurations,
    EndMentorship,
    DeleteMentorship,
    ListMenteesByAlumni,
    AddCommittee,
    ViewCommittees,
    UpdateCommittee,
    DeleteCommittee,
    AddEvent,
    ViewEvents,
    UpdateEvent,
    DeleteEvent,
    LookupEvents,
    RegisterStudentParticipation,
    RegisterAlumniParticipation,
    ViewStudentParticipation,
    ViewAlumniParticipation,
    CountEventParticipants,
    TotalEventsAttended,
    ViewAlumniByEvent,
    DeleteParticipant,
    UpdateRsvpStatus,
}

impl Operation {
    pub const ALL: [Operation; 47] = [
        Operation::AddAlumni,
        Operation::ViewAlumni,
        Operation::SearchAlumni,
        Operation::UpdateAlumniCompany,
        Operation::DeleteAlumni,
        Operation::CountAlumniByCompany,
        Operation::FilterAlumniByDepartment,
        Operation::UpdateAlumniContact,
        Operation::LookupAlumni,
        Operation::AddStudent,
        Operation::ViewStudents,
        Operation::UpdateStudent,
        Operation::DeleteStudent,
        Operation::LookupStudents,
        Operation::AddDepartment,
        Operation::ViewDepartments,
        Operation::UpdateDepartment,
        Operation::DeleteDepartment,
        Operation::LookupDepartments,
        Operation::AddEducation,
        Operation::ViewEducation,
        Operation::DeleteEducation,
        Operation::ViewAlumniEducation,
        Operation::StartMentorship,
        Operation::ViewMentorships,
        Operation::ViewMentorshipDurations,
        Operation::EndMentorship,
        Operation::DeleteMentorship,
        Operation::ListMenteesByAlumni,
        Operation::AddCommittee,
        Operation::ViewCommittees,
        Operation::UpdateCommittee,
        Operation::DeleteCommittee,
        Operation::AddEvent,
        Operation::ViewEvents,
        Operation::UpdateEvent,
        Operation::DeleteEvent,
        Operation::LookupEvents,
        Operation::RegisterStudentParticipation,
        Operation::RegisterAlumniParticipation,
        Operation::ViewStudentParticipation,
        Operation::ViewAlumniParticipation,
        Operation::CountEventParticipants,
        Operation::TotalEventsAttended,
        Operation::ViewAlumniByEvent,
        Operation::DeleteParticipant,
        Operation::UpdateRsvpStatus,
    ];

    /// Stable identifier used by capability tables and command lines.
    pub fn id(self) -> &'static str {
        match self {
            Self::AddAlumni => "alumni.add",
            Self::ViewAlumni => "alumni.view",
            Self::SearchAlumni => "alumni.search",
            Self::UpdateAlumniCompany => "alumni.update_company",
            Self::DeleteAlumni => "alumni.delete",
            Self::CountAlumniByCompany => "alumni.count_by_company",
            Self::FilterAlumniByDepartment => "alumni.filter_by_department",
            Self::UpdateAlumniContact => "alumni.update_contact",
            Self::LookupAlumni => "alumni.lookup",
            Self::AddStudent => "student.add",
            Self::ViewStudents => "student.view",
            Self::UpdateStudent => "student.update",
            Self::DeleteStudent => "student.delete",
            Self::LookupStudents => "student.lookup",
            Self::AddDepartment => "department.add",
            Self::ViewDepartments => "department.view",
            Self::UpdateDepartment => "department.update",
            Self::DeleteDepartment => "department.delete",
            Self::LookupDepartments => "department.lookup",
            Self::AddEducation => "education.add",
            Self::ViewEducation => "education.view",
            Self::DeleteEducation => "education.delete",
            Self::ViewAlumniEducation => "education.view_alumni_education",
            Self::StartMentorship => "mentorship.start",
            Self::ViewMentorships => "mentorship.view",
            Self::ViewMentorshipDurations => "mentorship.view_durations",
            Self::EndMentorship => "mentorship.end",
            Self::DeleteMentorship => "mentorship.delete",
            Self::ListMenteesByAlumni => "mentorship.list_by_alumni",
            Self::AddCommittee => "committee.add",
            Self::ViewCommittees => "committee.view",
            Self::UpdateCommittee => "committee.update",
            Self::DeleteCommittee => "committee.delete",
            Self::AddEvent => "event.add",
            Self::ViewEvents => "event.view",
            Self::UpdateEvent => "event.update",
            Self::DeleteEvent => "event.delete",
            Self::LookupEvents => "event.lookup",
            Self::RegisterStudentParticipation => "participation.register_student",
            Self::RegisterAlumniParticipation => "participation.register_alumni",
            Self::ViewStudentParticipation => "participation.view_students",
            Self::ViewAlumniParticipation => "participation.view_alumni",
            Self::CountEventParticipants => "participation.count_participants",
            Self::TotalEventsAttended => "participation.total_events_attended",
            Self::ViewAlumniByEvent => "participation.alumni_by_event",
            Self::DeleteParticipant => "participation.delete",
            Self::UpdateRsvpStatus => "participation.update_status",
        }
    }

    /// User-facing button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddAlumni => "Add Alumni",
            Self::ViewAlumni => "View All Alumni",
            Self::SearchAlumni => "Search Alumni",
            Self::UpdateAlumniCompany => "Update Company",
            Self::DeleteAlumni => "Delete Alumni",
            Self::CountAlumniByCompany => "Count by Company",
            Self::FilterAlumniByDepartment => "Filter by Department",
            Self::UpdateAlumniContact => "Update Contact Details",
            Self::LookupAlumni => "Alumni List",
            Self::AddStudent => "Add Student",
            Self::ViewStudents => "View All Students",
            Self::UpdateStudent => "Update Student",
            Self::DeleteStudent => "Delete Student",
            Self::LookupStudents => "Student List",
            Self::AddDepartment => "Add Department",
            Self::ViewDepartments => "View Departments",
            Self::UpdateDepartment => "Update Department",
            Self::DeleteDepartment => "Delete Department",
            Self::LookupDepartments => "Department List",
            Self::AddEducation => "Add Education",
            Self::ViewEducation => "View Education",
            Self::DeleteEducation => "Delete Education",
            Self::ViewAlumniEducation => "View Alumni Education",
            Self::StartMentorship => "Start Mentorship",
            Self::ViewMentorships => "View Mentorships",
            Self::ViewMentorshipDurations => "View Duration (in Days)",
            Self::EndMentorship => "End Mentorship (set end date)",
            Self::DeleteMentorship => "Delete Mentorship",
            Self::ListMenteesByAlumni => "List Students by Alumni",
            Self::AddCommittee => "Add Committee",
            Self::ViewCommittees => "View Committees",
            Self::UpdateCommittee => "Update Committee",
            Self::DeleteCommittee => "Delete Committee",
            Self::AddEvent => "Add Event",
            Self::ViewEvents => "View Events",
            Self::UpdateEvent => "Update Event",
            Self::DeleteEvent => "Delete Event",
            Self::LookupEvents => "Event List",
            Self::RegisterStudentParticipation => "Register Student Participation",
            Self::RegisterAlumniParticipation => "Register Alumni Participation",
            Self::ViewStudentParticipation => "View Student Participation",
            Self::ViewAlumniParticipation => "View Alumni Participation",
            Self::CountEventParticipants => "Count Event Participants",
            Self::TotalEventsAttended => "Total Events Attended by Alumni",
            Self::ViewAlumniByEvent => "View Alumni by Event",
            Self::DeleteParticipant => "Delete Participant",
            Self::UpdateRsvpStatus => "Update RSVP Status",
        }
    }

    pub fn group(self) -> OperationGroup {
        match self {
            Self::AddAlumni
            | Self::ViewAlumni
            | Self::SearchAlumni
            | Self::UpdateAlumniCompany
            | Self::DeleteAlumni
            | Self::CountAlumniByCompany
            | Self::FilterAlumniByDepartment
            | Self::UpdateAlumniContact
            | Self::LookupAlumni => OperationGroup::Alumni,
            Self::AddStudent
            | Self::ViewStudents
            | Self::UpdateStudent
            | Self::DeleteStudent
            | Self::LookupStudents => OperationGroup::Student,
            Self::AddDepartment
            | Self::ViewDepartments
            | Self::UpdateDepartment
            | Self::DeleteDepartment
            | Self::LookupDepartments => OperationGroup::Department,
            Self::AddEducation
            | Self::ViewEducation
            | Self::DeleteEducation
            | Self::ViewAlumniEducation => OperationGroup::Education,
            Self::StartMentorship
            | Self::ViewMentorships
            | Self::ViewMentorshipDurations
            | Self::EndMentorship
            | Self::DeleteMentorship
            | Self::ListMenteesByAlumni => OperationGroup::Mentorship,
            Self::AddCommittee
            | Self::ViewCommittees
            | Self::UpdateCommittee
            | Self::DeleteCommittee => OperationGroup::Committee,
            Self::AddEvent
            | Self::ViewEvents
            | Self::UpdateEvent
            | Self::DeleteEvent
            | Self::LookupEvents => OperationGroup::Event,
            Self::RegisterStudentParticipation
            | Self::RegisterAlumniParticipation
            | Self::ViewStudentParticipation
            | Self::ViewAlumniParticipation
            | Self::CountEventParticipants
            | Self::TotalEventsAttended
            | Self::ViewAlumniByEvent
            | Self::DeleteParticipant
            | Self::UpdateRsvpStatus => OperationGroup::Participation,
        }
    }

    pub fn kind(self) -> OperationKind {
        match self {
            Self::LookupAlumni
            | Self::LookupStudents
            | Self::LookupDepartments
            | Self::LookupEvents => OperationKind::Lookup,
            Self::ViewAlumni
            | Self::SearchAlumni
            | Self::CountAlumniByCompany
            | Self::FilterAlumniByDepartment
            | Self::ViewStudents
            | Self::ViewDepartments
            | Self::ViewEducation
            | Self::ViewAlumniEducation
            | Self::ViewMentorships
            | Self::ViewMentorshipDurations
            | Self::ListMenteesByAlumni
            | Self::ViewCommittees
            | Self::ViewEvents
            | Self::ViewStudentParticipation
            | Self::ViewAlumniParticipation
            | Self::CountEventParticipants
            | Self::TotalEventsAttended
            | Self::ViewAlumniByEvent => OperationKind::View,
            _ => OperationKind::Write,
        }
    }

    pub fn is_write(self) -> bool {
        self.kind() == OperationKind::Write
    }

    /// Parses an operation from its stable identifier.
    pub fn parse(value: &str) -> Result<Self, OperationError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(OperationError::EmptyOperation);
        }

        Self::ALL
            .into_iter()
            .find(|operation| operation.id() == normalized)
            .ok_or_else(|| OperationError::UnsupportedOperation(normalized.to_string()))
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Operation identifier parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    EmptyOperation,
    UnsupportedOperation(String),
}

impl Display for OperationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOperation => write!(f, "operation id must not be empty"),
            Self::UnsupportedOperation(value) => write!(f, "operation is unsupported: {value}"),
        }
    }
}

impl Error for OperationError {}
