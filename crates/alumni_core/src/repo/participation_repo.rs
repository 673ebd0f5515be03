//! Event participation repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Student and alumni participation live in separate tables; the
//!   [`ParticipantKind`] picks the table from fixed code.
//! - Attendance reports count only rows with status `Attended`.

use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::participation::{ParticipantKind, Participation, ParticipationKey, RsvpStatus};
use crate::repo::{int, text};

/// Repository interface for participation operations and reports.
pub trait ParticipationRepository {
    fn insert(&self, participation: &Participation) -> GatewayResult<WriteOutcome>;
    fn list(&self, kind: ParticipantKind) -> GatewayResult<ReadOutcome>;
    fn count_participants(&self) -> GatewayResult<ReadOutcome>;
    fn total_events_attended(&self, alumni_id: i64) -> GatewayResult<ReadOutcome>;
    fn alumni_by_event(&self, event_name: &str) -> GatewayResult<ReadOutcome>;
    fn delete(&self, key: ParticipationKey) -> GatewayResult<WriteOutcome>;
    fn update_status(
        &self,
        key: ParticipationKey,
        status: RsvpStatus,
    ) -> GatewayResult<WriteOutcome>;
}

/// SQLite-backed participation repository.
pub struct SqliteParticipationRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteParticipationRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl ParticipationRepository for SqliteParticipationRepository<'_> {
    fn insert(&self, participation: &Participation) -> GatewayResult<WriteOutcome> {
        let kind = participation.kind;
        let sql = format!(
            "INSERT INTO {} (pid, event_id, {}, resp_status) VALUES (?1, ?2, ?3, ?4);",
            kind.table(),
            kind.participant_column()
        );
        self.gateway.write(
            &sql,
            &[
                int(participation.pid),
                int(participation.event_id),
                int(participation.participant_id),
                text(participation.status.as_str()),
            ],
        )
    }

    fn list(&self, kind: ParticipantKind) -> GatewayResult<ReadOutcome> {
        let sql = match kind {
            ParticipantKind::Student => {
                "SELECT
                    P.pid,
                    E.name AS event_name,
                    S.name AS student_name,
                    P.resp_status
                 FROM EventParticipationStudent P
                 JOIN Event E ON P.event_id = E.event_id
                 JOIN Student S ON P.student_id = S.student_id
                 ORDER BY P.pid;"
            }
            ParticipantKind::Alumni => {
                "SELECT
                    P.pid,
                    E.name AS event_name,
                    A.name AS alumni_name,
                    P.resp_status
                 FROM EventParticipationAlumni P
                 JOIN Event E ON P.event_id = E.event_id
                 JOIN Alumni A ON P.alumni_id = A.alumni_id
                 ORDER BY P.pid;"
            }
        };
        self.gateway.read(sql, &[])
    }

    fn count_participants(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                E.event_id,
                E.name AS event_name,
                (SELECT COUNT(*) FROM EventParticipationStudent PS
                  WHERE PS.event_id = E.event_id AND PS.resp_status = 'Attended')
                +
                (SELECT COUNT(*) FROM EventParticipationAlumni PA
                  WHERE PA.event_id = E.event_id AND PA.resp_status = 'Attended')
                AS total_attendees
             FROM Event E
             ORDER BY E.event_id;",
            &[],
        )
    }

    fn total_events_attended(&self, alumni_id: i64) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                A.name AS alumni_name,
                COALESCE(V.events_attended, 0) AS events_attended
             FROM Alumni A
             LEFT JOIN alumni_event_attendance V ON V.alumni_id = A.alumni_id
             WHERE A.alumni_id = ?1;",
            &[int(alumni_id)],
        )
    }

    fn alumni_by_event(&self, event_name: &str) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT A.alumni_id, A.name, A.email, A.company
             FROM Alumni A
             WHERE A.alumni_id IN (
                SELECT P.alumni_id
                FROM EventParticipationAlumni P
                JOIN Event E ON P.event_id = E.event_id
                WHERE E.name = ?1
             )
             ORDER BY A.name, A.alumni_id;",
            &[text(event_name)],
        )
    }

    fn delete(&self, key: ParticipationKey) -> GatewayResult<WriteOutcome> {
        let sql = format!("DELETE FROM {} WHERE pid = ?1;", key.kind.table());
        self.gateway.write(&sql, &[int(key.pid)])
    }

    fn update_status(
        &self,
        key: ParticipationKey,
        status: RsvpStatus,
    ) -> GatewayResult<WriteOutcome> {
        let sql = format!(
            "UPDATE {} SET resp_status = ?1 WHERE pid = ?2;",
            key.kind.table()
        );
        self.gateway
            .write(&sql, &[text(status.as_str()), int(key.pid)])
    }
}
