//! Student use-case service.

use crate::gateway::ReadOutcome;
use crate::model::form::{parse_int, Choice};
use crate::model::student::{StudentForm, StudentUpdateForm};
use crate::policy::{AccessGuard, Operation};
use crate::repo::student_repo::StudentRepository;
use crate::service::{
    confirm_then, read, report, run, Confirmation, DeleteOutcome, ServiceResult, WriteReport,
};

/// Use-case service wrapper for student operations.
pub struct StudentService<R: StudentRepository> {
    guard: AccessGuard,
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(guard: AccessGuard, repo: R) -> Self {
        Self { guard, repo }
    }

    pub fn add(&self, form: &StudentForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::AddStudent, || {
            let student = form.parse()?;
            let outcome = self.repo.insert(&student)?;
            report(outcome, || self.listing())
        })
    }

    pub fn view(&self) -> ServiceResult<ReadOutcome> {
        run(&self.guard, Operation::ViewStudents, || self.listing())
    }

    /// Changes exactly one of email or phone.
    pub fn update(&self, form: &StudentUpdateForm) -> ServiceResult<WriteReport> {
        run(&self.guard, Operation::UpdateStudent, || {
            let (student_id, change) = form.parse()?;
            let outcome = self.repo.update_contact(student_id, &change)?;
            report(outcome, || self.listing())
        })
    }

    pub fn delete(
        &self,
        student_id: &str,
        confirmation: &dyn Confirmation,
    ) -> ServiceResult<DeleteOutcome> {
        run(&self.guard, Operation::DeleteStudent, || {
            let student_id = parse_int("Student ID", student_id)?;
            let prompt = format!(
                "Delete Student {student_id}? Related mentorship and participation records are removed too."
            );
            confirm_then(confirmation, &prompt, || {
                let outcome = self.repo.delete(student_id)?;
                report(outcome, || self.listing())
            })
        })
    }

    pub fn lookup(&self) -> ServiceResult<Vec<Choice>> {
        run(&self.guard, Operation::LookupStudents, || Ok(self.repo.lookup()?))
    }

    fn listing(&self) -> ServiceResult<ReadOutcome> {
        read(self.repo.list())
    }
}
