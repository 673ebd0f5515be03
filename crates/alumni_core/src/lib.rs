//! Core of the alumni network store: role-gated CRUD and reporting over an
//! embedded SQLite schema.
//!
//! Drivers open a [`Session`] for one role and call domain services from it;
//! every service checks the session's capabilities before validating input or
//! touching the store.

pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod policy;
pub mod repo;
pub mod service;
pub mod session;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use gateway::{
    CellValue, Execution, GatewayError, GatewayResult, Mode, QueryGateway, ReadOutcome,
    ResultSet, WriteOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::form::{Choice, ValidationError};
pub use policy::{
    AccessGuard, CapabilityTable, Operation, OperationGroup, OperationKind, PolicyError, Role,
    RolePolicy,
};
pub use service::{Confirmation, DeleteOutcome, ServiceError, ServiceResult, WriteReport};
pub use session::{LoginError, Session, SessionError, StoreConfig, StoreLocation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
