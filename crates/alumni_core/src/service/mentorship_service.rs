//! Mentorship use-case service.
//!
//! # Invariants
//! - An end date before the start date is stored as entered and logged.

use crate::gateway::ReadOutcome;
use crate::model::form::{parse_int, parse_selection};
use crate::model::mentorship::{EndMentorshipForm, MentorshipForm};
use crate::policy::{AccessGuard, Operation};
use crate::repo::mentorship_repo::MentorshipRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};
use log::warn;

/// Use-case service wrapper for mentorship operations.
pub struct MentorshipService<R: MentorshipRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: MentorshipRepository> MentorshipService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn start(&self, form: &MentorshipForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::StartMentorship, || {
            let mentorship = form.parse()?;
            if mentorship.ends_before_start() {
                warn!(
                    "event=mentorship_dates module=service status=warning session_id={} mid={} issue=end_before_start",
                    self.guard.session_id(),
                    mentorship.mid
                );
            }
            let outcome = self.repo.insert(&mentorship)?;
            report(outcome, || self.listing())
        })
    }

    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewMentorships, || self.listing())
    }

    /// Mentorships with their length in days; open ones run until today.
    pub fn view_durations(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewMentorshipDurations, || {
            read(self.repo.list_durations())
        })
    }

    /// Sets the end date of one mentorship.
    pub fn end(&self, form: &EndMentorshipForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::EndMentorship, || {
            let (mid, end_date) = form.parse()?;
            let outcome = self.repo.set_end_date(mid, end_date)?;
            report(outcome, || self.listing())
        })
    }

    pub fn delete(&self, mid: &str, confirmation: &dyn Confirmation) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteMentorship, || {
            let mid = parse_int("Mentorship ID", mid)?;
            let prompt = format!("Delete Mentorship {mid}?");
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(mid)?;
                report(outcome, || self.listing())
            })
        })
    }

    /// Mentees of one alumnus, via the `list_mentorships_by_alumni` procedure.
    pub fn list_by_alumni(&self, alumni: &str) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ListMenteesByAlumni, || {
            let alumni_id = parse_selection("Alumni", alumni)?;
            read(self.repo.list_by_alumni(alumni_id))
        })
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        read(self.repo.list())
    }
}
