//! Education use-case service.
//!
//! Both education listings blank repeated alumni names for display; the
//! combined report blanks the company as well.

use crate::gateway::ReadOutcome;
use crate::model::education::{EducationForm, EducationKeyForm};
use crate::policy::{AccessGuard, Operation};
use crate::repo::education_repo::EducationRepository;
use crate::service::{
    confirm_then, read, report, run, suppress_repeated_leading, Confirmation, DeleteOutcome,
    ServiceResult, WriteReport,
};

const EDUCATION_BLANK_WIDTH: usize = 1;
const ALUMNI_EDUCATION_BLANK_WIDTH: usize = 2;

/// Use-case service wrapper for education operations.
pub struct EducationService<R: EducationRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: EducationRepository> EducationService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn add(&self, form: &EducationForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::AddEducation, || {
            let education = form.parse()?;
            let outcome = self.repo.insert(&education)?;
            report(outcome, || self.listing())
        })
    }

    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewEducation, || self.listing())
    }

    /// Deletes the record identified by alumni and education id.
    pub fn delete(
        &self,
        form: &EducationKeyForm,
        confirmation: &dyn Confirmation,
    ) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteEducation, || {
            let key = form.parse()?;
            let prompt = format!(
                "Delete Education {} of Alumni {}?",
                key.edu_id, key.alumni_id
            );
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(key)?;
                report(outcome, || self.listing())
            })
        })
    }

    /// Alumni with company and every education record, grouped by name.
    pub fn view_alumni_education(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewAlumniEducation, || {
            let outcome = read(self.repo.list_alumni_education())?;
            Ok(outcome.map_rows(|set| suppress_repeated_leading(set, ALUMNI_EDUCATION_BLANK_WIDTH)))
        })
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        let outcome = read(self.repo.list())?;
        Ok(outcome.map_rows(|set| suppress_repeated_leading(set, EDUCATION_BLANK_WIDTH)))
    }
}
