//! Department repository contracts and SQLite implementation.

use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::department::Department;
use crate::model::form::Choice;
use crate::repo::{int, read_choices, text};

/// Repository interface for department operations.
pub trait DepartmentRepository {
    fn insert(&self, department: &Department) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn update_hod(&self, dept_id: i64, hod: &str) -> GatewayResult<WriteOutcome>;
    fn delete(&self, dept_id: i64) -> GatewayResult<WriteOutcome>;
    fn lookup(&self) -> GatewayResult<Vec<Choice>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn insert(&self, department: &Department) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Department (dept_id, name, hod) VALUES (?1, ?2, ?3);",
            &[
                int(department.dept_id),
                text(&department.name),
                text(&department.hod),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT dept_id, name, hod FROM Department ORDER BY dept_id;",
            &[],
        )
    }

    fn update_hod(&self, dept_id: i64, hod: &str) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "UPDATE Department SET hod = ?1 WHERE dept_id = ?2;",
            &[text(hod), int(dept_id)],
        )
    }

    fn delete(&self, dept_id: i64) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "DELETE FROM Department WHERE dept_id = ?1;",
            &[int(dept_id)],
        )
    }

    fn lookup(&self) -> GatewayResult<Vec<Choice>> {
        read_choices(
            &self.gateway,
            "SELECT dept_id, name FROM Department ORDER BY dept_id;",
        )
    }
}
