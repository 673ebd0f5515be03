//! Role policy: operation catalogue, session roles and capability table.
//!
//! # Responsibility
//! - Name every domain operation by a stable identifier.
//! - Decide, per role, which operations a session may invoke.
//!
//! # Invariants
//! - Decisions are keyed by operation identifier, never by display label.
//! - A role is fixed for the lifetime of a session.

pub mod operation;
pub mod role;
pub mod role_policy;

pub use operation::{Operation, OperationError, OperationGroup, OperationKind};
pub use role::{Role, RoleError};
pub use role_policy::{AccessGuard, CapabilityTable, PolicyError, RolePolicy};
