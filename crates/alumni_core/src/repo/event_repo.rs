//! Event repository contracts and SQLite implementation.

use crate::gateway::{GatewayResult, QueryGateway, ReadOutcome, WriteOutcome};
use crate::model::event::{Event, EventUpdate};
use crate::model::form::Choice;
use crate::repo::{date, int, opt_text, read_choices, text};
use rusqlite::types::Value;

/// Repository interface for event operations.
pub trait EventRepository {
    fn insert(&self, event: &Event) -> GatewayResult<WriteOutcome>;
    fn list(&self) -> GatewayResult<ReadOutcome>;
    fn update(&self, update: &EventUpdate) -> GatewayResult<WriteOutcome>;
    fn delete(&self, event_id: i64) -> GatewayResult<WriteOutcome>;
    fn lookup(&self) -> GatewayResult<Vec<Choice>>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    gateway: QueryGateway<'conn>,
}

impl<'conn> SqliteEventRepository<'conn> {
    pub fn new(gateway: QueryGateway<'conn>) -> Self {
        Self { gateway }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn insert(&self, event: &Event) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "INSERT INTO Event (event_id, name, description, location, date)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            &[
                int(event.event_id),
                text(&event.name),
                opt_text(event.description.as_deref()),
                text(&event.location),
                date(event.date),
            ],
        )
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        self.gateway.read(
            "SELECT event_id, name, description, location, date
             FROM Event
             ORDER BY event_id;",
            &[],
        )
    }

    fn update(&self, update: &EventUpdate) -> GatewayResult<WriteOutcome> {
        let mut assignments = Vec::new();
        let mut params: Vec<Value> = Vec::new();
        if let Some(description) = update.description.as_deref() {
            params.push(text(description));
            assignments.push(format!("description = ?{}", params.len()));
        }
        if let Some(location) = update.location.as_deref() {
            params.push(text(location));
            assignments.push(format!("location = ?{}", params.len()));
        }
        if let Some(new_date) = update.date {
            params.push(date(new_date));
            assignments.push(format!("date = ?{}", params.len()));
        }
        params.push(int(update.event_id));
        let sql = format!(
            "UPDATE Event SET {} WHERE event_id = ?{};",
            assignments.join(", "),
            params.len()
        );
        self.gateway.write(&sql, &params)
    }

    fn delete(&self, event_id: i64) -> GatewayResult<WriteOutcome> {
        self.gateway.write(
            "DELETE FROM Event WHERE event_id = ?1;",
            &[int(event_id)],
        )
    }

    fn lookup(&self) -> GatewayResult<Vec<Choice>> {
        read_choices(
            &self.gateway,
            "SELECT event_id, name FROM Event ORDER BY event_id;",
        )
    }
}
