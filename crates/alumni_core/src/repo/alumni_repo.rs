//! Alumni repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Listing joins Department with `LEFT JOIN` so alumni without a
//!   department stay visible.
//! - Contact updates go through the `update_alumni_contact` procedure.

use crate::db::routines::Procedure;
use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::alumni::{Alumni, ContactUpdate};
use crate::model::form::Choice;
use crate::repo::{int, like_fragment, opt_text, read_choices, text};

/// Repository interface for alumni operations.
pub trait AlumniRepository {
    fn insert(&self, alumni: &Alumni) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn search_by_name(&self, fragment: &str) -> GatewayResult<ReadOutcome>;
    fn update_company(&self, alumni_id: i64, company: &str) -> GatewayResult<WriteOutcome>;
    fn update_contact(&self, update: &ContactUpdate) -> GatewayResult<WriteOutcome>;
    fn delete(&self, alumni_id: i64) -> GatewayResult<WriteOutcome>;
    fn count_by_company(&self) -> GatewayResult<ReadOutcome>;
    fn filter_by_department(&self, department_name: &str) -> GatewayResult<ReadOutcome>;
    fn lookup(&self) -> GatewayResult<Vec<Choice>>;
}

/// SQLite-backed alumni repository.
pub struct SqliteAlumniRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteAlumniRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl AlumniRepository for SqliteAlumniRepository<'_> {
    fn insert(&self, alumni: &Alumni) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Alumni (
                alumni_id,
                name,
                email,
                phone_number,
                graduation_year,
                company,
                dept_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            &[
                int(alumni.alumni_id),
                text(&alumni.name),
                text(&alumni.email),
                opt_text(alumni.phone_number.as_deref()),
                int(alumni.graduation_year),
                text(&alumni.company),
                int(alumni.dept_id),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                A.alumni_id,
                A.name,
                A.email,
                A.phone_number,
                A.graduation_year,
                A.company,
                D.name AS department
             FROM Alumni A
             LEFT JOIN Department D ON A.dept_id = D.dept_id
             ORDER BY A.alumni_id;",
            &[],
        )
    }

    fn search_by_name(&self, fragment: &str) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                alumni_id,
                name,
                email,
                phone_number,
                graduation_year,
                company,
                dept_id
             FROM Alumni
             WHERE name LIKE ?1 ESCAPE '\\'
             ORDER BY name, alumni_id;",
            &[text(&like_fragment(fragment))],
        )
    }

    fn update_company(&self, alumni_id: i64, company: &str) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "UPDATE Alumni SET company = ?1 WHERE alumni_id = ?2;",
            &[text(company), int(alumni_id)],
        )
    }

    fn update_contact(&self, update: &ContactUpdate) -> GatewayResult<WriteOutcome> {
        // Blank strings tell the procedure to keep the stored value.
        self.gateway.call_write_procedure(
            Procedure::UpdateAlumniContact,
            &[
                int(update.alumni_id),
                text(update.email.as_deref().unwrap_or_default()),
                text(update.phone_number.as_deref().unwrap_or_default()),
            ],
        )
    }

    fn delete(&self, alumni_id: i64) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "DELETE FROM Alumni WHERE alumni_id = ?1;",
            &[int(alumni_id)],
        )
    }

    fn count_by_company(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT company, COUNT(*) AS count
             FROM Alumni
             GROUP BY company
             ORDER BY count DESC, company;",
            &[],
        )
    }

    fn filter_by_department(&self, department_name: &str) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                A.alumni_id,
                A.name,
                A.company,
                A.graduation_year
             FROM Alumni A
             JOIN Department D ON A.dept_id = D.dept_id
             WHERE D.name = ?1
             ORDER BY A.name, A.alumni_id;",
            &[text(department_name)],
        )
    }

    fn lookup(&self) -> GatewayResult<Vec<Choice>> {
        read_choices(
            &self.gateway,
            "SELECT alumni_id, name FROM Alumni ORDER BY alumni_id;",
        )
    }
}
