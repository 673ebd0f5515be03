//! Event use-case service.

use crate::gateway::ReadOutcome;
use crate::model::event::{EventForm, EventUpdateForm};
use crate::model::form::{parse_int, Choice};
use crate::policy::{AccessGuard, Operation};
use crate::repo::event_repo::EventRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};

/// Use-case service wrapper for event operations.
pub struct EventService<R: EventRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn add(&self, form: &EventForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::AddEvent, || {
            let event = form.parse()?;
            let outcome = self.repo.insert(&event)?;
            report(outcome, || self.listing())
        })
    }

    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewEvents, || self.listing())
    }

    /// Replaces any of description, location and date.
    pub fn update(&self, form: &EventUpdateForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateEvent, || {
            let update = form.parse()?;
            let outcome = self.repo.update(&update)?;
            report(outcome, || self.listing())
        })
    }

    /// Deletes one event with its committees and participation.
    pub fn delete(
        &self,
        event_id: &str,
        confirmation: &dyn Confirmation,
    ) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteEvent, || {
            let event_id = parse_int("Event ID", event_id)?;
            let prompt = format!(
                "Delete Event {event_id}? Its committees and participation records are removed too."
            );
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(event_id)?;
                report(outcome, || self.listing())
            })
        })
    }

    pub fn lookup(&self) -> ServiceResult<Vec<Choice>> {
        run(&self.guard, Operation::LookupEvents, || Ok(self.repo.lookup()?))
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        read(self.repo.list())
    }
}
