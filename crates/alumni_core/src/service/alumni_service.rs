//! Alumni use-case service.
//!
//! # Invariants
//! - Every entry point runs behind [`AccessGuard::check`].
//! - Writes refresh the alumni listing.

use crate::gateway::ReadOutcome;
use crate::model::alumni::{AlumniForm, CompanyForm, ContactForm};
use crate::model::form::{parse_int, required, Choice};
use crate::policy::{AccessGuard, Operation};
use crate::repo::alumni_repo::AlumniRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};

/// Use-case service wrapper for alumni operations.
pub struct AlumniService<R: AlumniRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: AlumniRepository> AlumniService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn add(&self, form: &AlumniForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::AddAlumni, || {
            let alumni = form.parse()?;
            let outcome = self.repo.insert(&alumni)?;
            report(outcome, || self.listing())
        })
    }

    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewAlumni, || self.listing())
    }

    /// Alumni whose name contains `name`, ordered by name.
    pub fn search(&self, name: &str) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::SearchAlumni, || {
            let fragment = required("Search Name", name)?;
            read(self.repo.search_by_name(&fragment))
        })
    }

    pub fn update_company(&self, form: &CompanyForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateAlumniCompany, || {
            let (alumni_id, company) = form.parse()?;
            let outcome = self.repo.update_company(alumni_id, &company)?;
            report(outcome, || self.listing())
        })
    }

    /// Replaces email and/or phone through the contact procedure.
    pub fn update_contact(&self, form: &ContactForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateAlumniContact, || {
            let update = form.parse()?;
            let outcome = self.repo.update_contact(&update)?;
            report(outcome, || self.listing())
        })
    }

    /// Deletes one alumnus together with their education, mentorships and
    /// event participation.
    pub fn delete(
        &self,
        alumni_id: &str,
        confirmation: &dyn Confirmation,
    ) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteAlumni, || {
            let alumni_id = parse_int("Alumni ID", alumni_id)?;
            let prompt = format!(
                "Delete Alumni {alumni_id}? Related education, mentorship and participation records are removed too."
            );
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(alumni_id)?;
                report(outcome, || self.listing())
            })
        })
    }

    pub fn count_by_company(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::CountAlumniByCompany, || {
            read(self.repo.count_by_company())
        })
    }

    /// Alumni of the department with exactly this name.
    pub fn filter_by_department(&self, department_name: &str) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::FilterAlumniByDepartment, || {
            let department_name = required("Department", department_name)?;
            read(self.repo.filter_by_department(&department_name))
        })
    }

    pub fn lookup(&self) -> ServiceResult<Vec<Choice>> {
        run(&self.guard, Operation::LookupAlumni, || Ok(self.repo.lookup()?))
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        read(self.repo.list())
    }
}
