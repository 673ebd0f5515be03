//! Mentorship repository contracts and SQLite implementation.

use crate::db::routines::{Procedure, MENTORSHIP_DURATION_FN};
use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::mentorship::Mentorship;
use crate::repo::{date, int, opt_date};
use chrono::NaiveDate;

/// Repository interface for mentorship operations.
pub trait MentorshipRepository {
    fn insert(&self, mentorship: &Mentorship) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn list_durations(&self) -> GatewayResult<ReadOutcome>;
    fn set_end_date(&self, mid: i64, end_date: NaiveDate) -> GatewayResult<WriteOutcome>;
    fn delete(&self, mid: i64) -> GatewayResult<WriteOutcome>;
    fn list_by_alumni(&self, alumni_id: i64) -> GatewayResult<ReadOutcome>;
}

/// SQLite-backed mentorship repository.
pub struct SqliteMentorshipRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteMentorshipRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl MentorshipRepository for SqliteMentorshipRepository<'_> {
    fn insert(&self, mentorship: &Mentorship) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Mentorship (
                mid,
                alumni_id,
                student_id,
                start_date,
                end_date
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            &[
                int(mentorship.mid),
                int(mentorship.alumni_id),
                int(mentorship.student_id),
                date(mentorship.start_date),
                opt_date(mentorship.end_date),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                M.mid,
                A.name AS alumni_name,
                S.name AS student_name,
                M.start_date,
                M.end_date
             FROM Mentorship M
             JOIN Alumni A ON M.alumni_id = A.alumni_id
             JOIN Student S ON M.student_id = S.student_id
             ORDER BY M.mid;",
            &[],
        )
    }

    fn list_durations(&self) -> GatewayResult<ReadOutcome> {
        let sql = format!(
            "SELECT
                M.mid,
                A.name AS alumni_name,
                S.name AS student_name,
                M.start_date,
                M.end_date,
                {MENTORSHIP_DURATION_FN}(M.start_date, M.end_date) AS duration_days
             FROM Mentorship M
             JOIN Alumni A ON M.alumni_id = A.alumni_id
             JOIN Student S ON M.student_id = S.student_id
             ORDER BY M.mid;"
        );
        self.gateway.read(&sql, &[])
    }

    fn set_end_date(&self, mid: i64, end_date: NaiveDate) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "UPDATE Mentorship SET end_date = ?1 WHERE mid = ?2;",
            &[date(end_date), int(mid)],
        )
    }

    fn delete(&self, mid: i64) -> GatewayResult<WriteOutcome> {
        self.gateway
            .write("DELETE FROM Mentorship WHERE mid = ?1;", &[int(mid)])
    }

    fn list_by_alumni(&self, alumni_id: i64) -> GatewayResult<ReadOutcome> {
        self.gateway
            .call_read_procedure(Procedure::ListMentorshipsByAlumni, &[int(alumni_id)])
    }
}
