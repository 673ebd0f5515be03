//! Department use-case service.

use crate::gateway::ReadOutcome;
use crate::model::department::{DepartmentForm, DepartmentHodForm};
use crate::model::form::{parse_int, Choice};
use crate::policy::{AccessGuard, Operation};
use crate::repo::department_repo::DepartmentRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};

/// Use-case service wrapper for department operations.
pub struct DepartmentService<R: DepartmentRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn add(&self, form: &DepartmentForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::AddDepartment, || {
            let department = form.parse()?;
            let outcome = self.repo.insert(&department)?;
            report(outcome, || self.listing())
        })
    }

    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewDepartments, || self.listing())
    }

    /// Replaces the head of department.
    pub fn update(&self, form: &DepartmentHodForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateDepartment, || {
            let (dept_id, hod) = form.parse()?;
            let outcome = self.repo.update_hod(dept_id, &hod)?;
            report(outcome, || self.listing())
        })
    }

    /// Deletes one department; its alumni and students lose the reference.
    pub fn delete(
        &self,
        dept_id: &str,
        confirmation: &dyn Confirmation,
    ) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteDepartment, || {
            let dept_id = parse_int("Department ID", dept_id)?;
            let prompt = format!(
                "Delete Department {dept_id}? Alumni and students keep their records without a department."
            );
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(dept_id)?;
                report(outcome, || self.listing())
            })
        })
    }

    pub fn lookup(&self) -> ServiceResult<Vec<Choice>> {
        run(&self.guard, Operation::LookupDepartments, || {
            Ok(self.repo.lookup()?)
        })
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        read(self.repo.list())
    }
}
