//! Committee repository contracts and SQLite implementation.

use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::committee::{Committee, CommitteeUpdate};
use crate::repo::{int, opt_text, text};
use rusqlite::types::Value;

/// Repository interface for committee operations.
pub trait CommitteeRepository {
    fn insert(&self, committee: &Committee) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn update(&self, update: &CommitteeUpdate) -> GatewayResult<WriteOutcome>;
    fn delete(&self, cid: i64) -> GatewayResult<WriteOutcome>;
}

/// SQLite-backed committee repository.
pub struct SqliteCommitteeRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteCommitteeRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl CommitteeRepository for SqliteCommitteeRepository<'_> {
    fn insert(&self, committee: &Committee) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Committee (cid, event_id, name, phone, head)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            &[
                int(committee.cid),
                int(committee.event_id),
                text(&committee.name),
                opt_text(committee.phone.as_deref()),
                text(&committee.head),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT
                C.cid,
                C.name,
                C.phone,
                C.head,
                E.name AS event_name
             FROM Committee C
             JOIN Event E ON C.event_id = E.event_id
             ORDER BY E.event_id, C.cid;",
            &[],
        )
    }

    fn update(&self, update: &CommitteeUpdate) -> GatewayResult<WriteOutcome> {
        let mut assignments = Vec::new();
        let mut params: Vec<Value> = Vec::new();
        if let Some(head) = update.head.as_deref() {
            params.push(text(head));
            assignments.push(format!("head = ?{}", params.len()));
        }
        if let Some(phone) = update.phone.as_deref() {
            params.push(text(phone));
            assignments.push(format!("phone = ?{}", params.len()));
        }
        params.push(int(update.cid));
        let sql = format!(
            "UPDATE Committee SET {} WHERE cid = ?{};",
            assignments.join(", "),
            params.len()
        );
        self.gateway.write(&sql, &params)
    }

    fn delete(&self, cid: i64) -> GatewayResult<WriteOutcome> {
        self.gateway
            .write("DELETE FROM Committee WHERE cid = ?1;", &[int(cid)])
    }
}
