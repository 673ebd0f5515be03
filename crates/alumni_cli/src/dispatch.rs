//! Maps operation identifiers and `key=value` fields onto domain services.

use alumni_core::model::alumni::{AlumniForm, CompanyForm, ContactForm};
use alumni_core::model::committee::{CommitteeForm, CommitteeUpdateForm};
use alumni_core::model::department::{DepartmentForm, DepartmentHodForm};
use alumni_core::model::education::{EducationForm, EducationKeyForm};
use alumni_core::model::event::{EventForm, EventUpdateForm};
use alumni_core::model::mentorship::{EndMentorshipForm, MentorshipForm};
use alumni_core::model::participation::{
    ParticipationForm, ParticipationKeyForm, StatusUpdateForm,
};
use alumni_core::model::student::{StudentForm, StudentUpdateForm};
use alumni_core::{
    Choice, DeleteOutcome, Operation, ReadOutcome, ServiceResult, Session, WriteReport,
};
use std::collections::BTreeMap;

/// Outcome of one dispatched operation.
#[derive(Debug)]
pub enum Outcome {
    Rows(ReadOutcome),
    Written(WriteReport),
    Deleted(DeleteOutcome),
    Choices(Vec<Choice>),
}

/// Operator form fields; missing keys read as blank.
#[derive(Debug, Default)]
pub struct Fields(BTreeMap<String, String>);

impl Fields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub fn get(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_default()
    }
}

/// Runs `operation` on the session. `confirmed` answers delete confirmations.
pub fn dispatch(
    session: &Session,
    operation: Operation,
    fields: &Fields,
    confirmed: bool,
) -> ServiceResult<Outcome> {
    let f = |key: &str| fields.get(key);
    let confirm = &confirmed;

    match operation {
        Operation::AddAlumni => session
            .alumni()
            .add(&AlumniForm {
                alumni_id: f("alumni_id"),
                name: f("name"),
                email: f("email"),
                phone_number: f("phone_number"),
                graduation_year: f("graduation_year"),
                company: f("company"),
                department: f("department"),
            })
            .map(Outcome::Written),
        Operation::ViewAlumni => session.alumni().view().map(Outcome::Rows),
        Operation::SearchAlumni => session.alumni().search(&f("name")).map(Outcome::Rows),
        Operation::UpdateAlumniCompany => session
            .alumni()
            .update_company(&CompanyForm {
                alumni_id: f("alumni_id"),
                company: f("company"),
            })
            .map(Outcome::Written),
        Operation::DeleteAlumni => session
            .alumni()
            .delete(&f("alumni_id"), confirm)
            .map(Outcome::Deleted),
        Operation::CountAlumniByCompany => session.alumni().count_by_company().map(Outcome::Rows),
        Operation::FilterAlumniByDepartment => session
            .alumni()
            .filter_by_department(&f("department"))
            .map(Outcome::Rows),
        Operation::UpdateAlumniContact => session
            .alumni()
            .update_contact(&ContactForm {
                alumni_id: f("alumni_id"),
                email: f("email"),
                phone_number: f("phone_number"),
            })
            .map(Outcome::Written),
        Operation::LookupAlumni => session.alumni().lookup().map(Outcome::Choices),

        Operation::AddStudent => session
            .students()
            .add(&StudentForm {
                student_id: f("student_id"),
                name: f("name"),
                email: f("email"),
                phone: f("phone"),
                batch_year: f("batch_year"),
                department: f("department"),
            })
            .map(Outcome::Written),
        Operation::ViewStudents => session.students().view().map(Outcome::Rows),
        Operation::UpdateStudent => session
            .students()
            .update(&StudentUpdateForm {
                student_id: f("student_id"),
                email: f("email"),
                phone: f("phone"),
            })
            .map(Outcome::Written),
        Operation::DeleteStudent => session
            .students()
            .delete(&f("student_id"), confirm)
            .map(Outcome::Deleted),
        Operation::LookupStudents => session.students().lookup().map(Outcome::Choices),

        Operation::AddDepartment => session
            .departments()
            .add(&DepartmentForm {
                dept_id: f("dept_id"),
                name: f("name"),
                hod: f("hod"),
            })
            .map(Outcome::Written),
        Operation::ViewDepartments => session.departments().view().map(Outcome::Rows),
        Operation::UpdateDepartment => session
            .departments()
            .update(&DepartmentHodForm {
                dept_id: f("dept_id"),
                hod: f("hod"),
            })
            .map(Outcome::Written),
        Operation::DeleteDepartment => session
            .departments()
            .delete(&f("dept_id"), confirm)
            .map(Outcome::Deleted),
        Operation::LookupDepartments => session.departments().lookup().map(Outcome::Choices),

        Operation::AddEducation => session
            .education()
            .add(&EducationForm {
                edu_id: f("edu_id"),
                alumni: f("alumni"),
                college_name: f("college_name"),
                degree: f("degree"),
                course: f("course"),
                start_year: f("start_year"),
                end_year: f("end_year"),
            })
            .map(Outcome::Written),
        Operation::ViewEducation => session.education().view().map(Outcome::Rows),
        Operation::DeleteEducation => session
            .education()
            .delete(
                &EducationKeyForm {
                    alumni: f("alumni"),
                    edu_id: f("edu_id"),
                },
                confirm,
            )
            .map(Outcome::Deleted),
        Operation::ViewAlumniEducation => session
            .education()
            .view_alumni_education()
            .map(Outcome::Rows),

        Operation::StartMentorship => session
            .mentorships()
            .start(&MentorshipForm {
                mid: f("mid"),
                alumni: f("alumni"),
                student: f("student"),
                start_date: f("start_date"),
                end_date: f("end_date"),
            })
            .map(Outcome::Written),
        Operation::ViewMentorships => session.mentorships().view().map(Outcome::Rows),
        Operation::ViewMentorshipDurations => {
            session.mentorships().view_durations().map(Outcome::Rows)
        }
        Operation::EndMentorship => session
            .mentorships()
            .end(&EndMentorshipForm {
                mid: f("mid"),
                end_date: f("end_date"),
            })
            .map(Outcome::Written),
        Operation::DeleteMentorship => session
            .mentorships()
            .delete(&f("mid"), confirm)
            .map(Outcome::Deleted),
        Operation::ListMenteesByAlumni => session
            .mentorships()
            .list_by_alumni(&f("alumni"))
            .map(Outcome::Rows),

        Operation::AddCommittee => session
            .committees()
            .add(&CommitteeForm {
                cid: f("cid"),
                event: f("event"),
                name: f("name"),
                phone: f("phone"),
                head: f("head"),
            })
            .map(Outcome::Written),
        Operation::ViewCommittees => session.committees().view().map(Outcome::Rows),
        Operation::UpdateCommittee => session
            .committees()
            .update(&CommitteeUpdateForm {
                cid: f("cid"),
                head: f("head"),
                phone: f("phone"),
            })
            .map(Outcome::Written),
        Operation::DeleteCommittee => session
            .committees()
            .delete(&f("cid"), confirm)
            .map(Outcome::Deleted),

        Operation::AddEvent => session
            .events()
            .add(&EventForm {
                event_id: f("event_id"),
                name: f("name"),
                description: f("description"),
                location: f("location"),
                date: f("date"),
            })
            .map(Outcome::Written),
        Operation::ViewEvents => session.events().view().map(Outcome::Rows),
        Operation::UpdateEvent => session
            .events()
            .update(&EventUpdateForm {
                event_id: f("event_id"),
                description: f("description"),
                location: f("location"),
                date: f("date"),
            })
            .map(Outcome::Written),
        Operation::DeleteEvent => session
            .events()
            .delete(&f("event_id"), confirm)
            .map(Outcome::Deleted),
        Operation::LookupEvents => session.events().lookup().map(Outcome::Choices),

        Operation::RegisterStudentParticipation => session
            .participation()
            .register_student(&participation_form(fields, "student"))
            .map(Outcome::Written),
        Operation::RegisterAlumniParticipation => session
            .participation()
            .register_alumni(&participation_form(fields, "alumni"))
            .map(Outcome::Written),
        Operation::ViewStudentParticipation => {
            session.participation().view_students().map(Outcome::Rows)
        }
        Operation::ViewAlumniParticipation => {
            session.participation().view_alumni().map(Outcome::Rows)
        }
        Operation::CountEventParticipants => {
            session.participation().count_participants().map(Outcome::Rows)
        }
        Operation::TotalEventsAttended => session
            .participation()
            .total_events_attended(&f("alumni"))
            .map(Outcome::Rows),
        Operation::ViewAlumniByEvent => session
            .participation()
            .alumni_by_event(&f("event"))
            .map(Outcome::Rows),
        Operation::DeleteParticipant => session
            .participation()
            .delete(
                &ParticipationKeyForm {
                    kind: f("kind"),
                    pid: f("pid"),
                },
                confirm,
            )
            .map(Outcome::Deleted),
        Operation::UpdateRsvpStatus => session
            .participation()
            .update_status(&StatusUpdateForm {
                kind: f("kind"),
                pid: f("pid"),
                status: f("status"),
            })
            .map(Outcome::Written),
    }
}

fn participation_form(fields: &Fields, participant_key: &str) -> ParticipationForm {
    ParticipationForm {
        pid: fields.get("pid"),
        event: fields.get("event"),
        participant: fields.get(participant_key),
        status: fields.get("status"),
    }
}
