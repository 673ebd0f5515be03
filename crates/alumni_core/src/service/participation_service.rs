//! Event participation use-case service and attendance reports.

use crate::gateway::ReadOutcome;
use crate::model::form::{parse_selection, required};
use crate::model::participation::{
    ParticipantKind, ParticipationForm, ParticipationKeyForm, StatusUpdateForm,
};
use crate::policy::{AccessGuard, Operation};
use crate::repo::participation_repo::ParticipationRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};

/// Use-case service wrapper for participation operations.
pub struct ParticipationService<R: ParticipationRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: ParticipationRepository> ParticipationService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn register_student(&self, form: &ParticipationForm) -> ServiceResult<WriteReport> {
        self.register(Operation::RegisterStudentParticipation, ParticipantKind::Student, form)
    }

    pub fn register_alumni(&self, form: &ParticipationForm) -> ServiceResult<WriteReport> {
        self.register(Operation::RegisterAlumniParticipation, ParticipantKind::Alumni, form)
    }

    pub fn view_students(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewStudentParticipation, || {
            self.listing(ParticipantKind::Student)
        })
    }

    pub fn view_alumni(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewAlumniParticipation, || {
            self.listing(ParticipantKind::Alumni)
        })
    }

    /// Attended students plus attended alumni, per event.
    pub fn count_participants(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::CountEventParticipants, || {
            read(self.repo.count_participants())
        })
    }

    /// Distinct events one alumnus attended.
    pub fn total_events_attended(&self, alumni: &str) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::TotalEventsAttended, || {
            let alumni_id = parse_selection("Alumni", alumni)?;
            read(self.repo.total_events_attended(alumni_id))
        })
    }

    /// Alumni registered for the event with exactly this name.
    pub fn alumni_by_event(&self, event_name: &str) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewAlumniByEvent, || {
            let event_name = required("Event", event_name)?;
            read(self.repo.alumni_by_event(&event_name))
        })
    }

    pub fn delete(
        &self,
        form: &ParticipationKeyForm,
        confirmation: &dyn Confirmation,
    ) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteParticipant, || {
            let key = form.parse()?;
            let prompt = format!("Delete {} participation {}?", key.kind, key.pid);
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(key)?;
                report(outcome, || self.listing(key.kind))
            })
        })
    }

    pub fn update_status(&self, form: &StatusUpdateForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateRsvpStatus, || {
            let (key, status) = form.parse()?;
            let outcome = self.repo.update_status(key, status)?;
            report(outcome, || self.listing(key.kind))
        })
    }

    fn register(
        &self,
        operation: Operation,
        kind: ParticipantKind,
        form: &ParticipationForm,
    ) -> ServiceResult<WriteReport> {
        run(&self.guard, operation, || {
            let participation = form.parse(kind)?;
            let outcome = self.repo.insert(&participation)?;
            report(outcome, || self.listing(kind))
        })
    }

    fn listing(&self, kind: ParticipantKind) -> ServiceResult<ReadOutcome> {
        read(self.repo.list(kind))
    }
}
