//! Committee use-case service.

use crate::gateway::ReadOutcome;
use crate::model::committee::{CommitteeForm, CommitteeUpdateForm};
use crate::model::form::parse_int;
use crate::policy::{AccessGuard, Operation};
use crate::repo::committee_repo::CommitteeRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};

/// Use-case service wrapper for committee operations.
pub struct CommitteeService<R: CommitteeRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: CommitteeRepository> CommitteeService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn add(&self, form: &CommitteeForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::AddCommittee, || {
            let committee = form.parse()?;
            let outcome = self.repo.insert(&committee)?;
            report(outcome, || self.listing())
        })
    }

    /// Committees grouped by event.
    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewCommittees, || self.listing())
    }

    /// Replaces head and/or phone.
    pub fn update(&self, form: &CommitteeUpdateForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateCommittee, || {
            let update = form.parse()?;
            let outcome = self.repo.update(&update)?;
            report(outcome, || self.listing())
        })
    }

    pub fn delete(&self, cid: &str, confirmation: &dyn Confirmation) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteCommittee, || {
            let cid = parse_int("Committee ID", cid)?;
            let prompt = format!("Delete Committee {cid}?");
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(cid)?;
                report(outcome, || self.listing())
            })
        })
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        read(self.repo.list())
    }
}
