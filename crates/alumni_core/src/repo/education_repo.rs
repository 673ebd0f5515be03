//! Education repository contracts and SQLite implementation.
//!
//! Both listings order by alumni name so that repeated names are adjacent;
//! the service layer blanks the repeats for display.

use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::education::{Education, EducationKey};
use crate::repo::{int, text};

/// Repository interface for education operations.
pub trait EducationRepository {
    fn insert(&self, education: &Education) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn delete(&self, key: EducationKey) -> GatewayResult<WriteOutcome>;
    fn list_alumni_education(&self) -> GatewayResult<ReadOutcome>;
}

/// SQLite-backed education repository.
pub struct SqliteEducationRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteEducationRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl EducationRepository for SqliteEducationRepository<'_> {
    fn insert(&self, education: &Education) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Education (
                edu_id,
                alumni_id,
                college_name,
                degree,
                course,
                start_year,
                end_year
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            &[
                int(education.edu_id),
                int(education.alumni_id),
                text(&education.college_name),
                text(&education.degree),
                text(&education.course),
                int(education.start_year),
                int(education.end_year),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                A.name AS alumni_name,
                E.edu_id,
                E.college_name,
                E.degree,
                E.course,
                E.start_year,
                E.end_year
             FROM Education E
             JOIN Alumni A ON E.alumni_id = A.alumni_id
             ORDER BY A.name, A.alumni_id, E.edu_id;",
            &[],
        )
    }

    fn delete(&self, key: EducationKey) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "DELETE FROM Education WHERE edu_id = ?1 AND alumni_id = ?2;",
            &[int(key.edu_id), int(key.alumni_id)],
        )
    }

    fn list_alumni_education(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                A.name AS alumni_name,
                A.company,
                E.end_year AS graduation_year,
                E.college_name,
                E.degree,
                E.course
             FROM Alumni A
             JOIN Education E ON A.alumni_id = E.alumni_id
             ORDER BY A.name, A.alumni_id, E.edu_id;",
            &[],
        )
    }
}
