//! Student repository contracts and SQLite implementation.

use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::form::Choice;
use crate::model::student::{Student, StudentContactChange};
use crate::repo::{int, opt_text, read_choices, text};

/// Repository interface for student operations.
pub trait StudentRepository {
    fn insert(&self, student: &Student) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn update_contact(
        &self,
        student_id: i64,
        change: &StudentContactChange,
    ) -> GatewayResult<WriteOutcome>;
    fn delete(&self, student_id: i64) -> GatewayResult<WriteOutcome>;
    fn lookup(&self) -> GatewayResult<Vec<Choice>>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn insert(&self, student: &Student) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Student (
                student_id,
                name,
                email,
                phone,
                batch_year,
                dept_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            &[
                int(student.student_id),
                text(&student.name),
                text(&student.email),
                opt_text(student.phone.as_deref()),
                int(student.batch_year),
                int(student.dept_id),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                S.student_id,
                S.name,
                S.email,
                S.phone,
                S.batch_year,
                D.name AS department
             FROM Student S
             LEFT JOIN Department D ON S.dept_id = D.dept_id
             ORDER BY S.student_id;",
            &[],
        )
    }

    fn update_contact(
        &self,
        student_id: i64,
        change: &StudentContactChange,
    ) -> GatewayResult<WriteOutcome> {
        let (sql, value) = match change {
            StudentContactChange::Email(email) => {
                ("UPDATE Student SET email = ?1 WHERE student_id = ?2;", email)
            }
            StudentContactChange::Phone(phone) => {
                ("UPDATE Student SET phone = ?1 WHERE student_id = ?2;", phone)
            }
        };
        self.gateway.write(sql, &[text(value), int(student_id)])
    }

    fn delete(&self, student_id: i64) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "DELETE FROM Student WHERE student_id = ?1;",
            &[int(student_id)],
        )
    }

    fn lookup(&self) -> GatewayResult<Vec<Choice>> {
        read_choices(
            &self.gateway,
            "SELECT student_id, name FROM Student ORDER BY student_id;",
        )
    }
}
