//! Store-level grants per session role.
//!
//! # Responsibility
//! - Restrict which tables a session connection may mutate, so the store
//!   itself reports privilege errors like a server with user grants would.
//!
//! # Invariants
//! - Reads, routines and transaction control are always allowed.
//! - Admin connections carry no authorizer at all.
//! - Alumni connections may write the tables reachable from alumni
//!   management, including cascade targets of alumni deletion.

use crate::policy::Role;
use rusqlite::hooks::{AuthAction, AuthContext, Authorization};
use rusqlite::Connection;

const ALUMNI_WRITABLE_TABLES: &[&str] = &[
    "Alumni",
    "Education",
    "Mentorship",
    "EventParticipationAlumni",
];

/// Installs the store grants of `role` on `conn`.
///
/// Must run after migrations; schema changes are writes too.
pub fn install_store_grants(conn: &Connection, role: Role) {
    if role == Role::Admin {
        return;
    }
    conn.authorizer(Some(move |ctx: AuthContext<'_>| authorize(role, &ctx.action)));
}

/// Decides one authorizer callback for `role`.
pub fn authorize(role: Role, action: &AuthAction<'_>) -> Authorization {
    match written_table(action) {
        Some(table) if !may_write(role, table) => Authorization::Deny,
        _ => Authorization::Allow,
    }
}

/// Returns whether `role` holds write privileges on `table`.
pub fn may_write(role: Role, table: &str) -> bool {
    match role {
        Role::Admin => true,
        Role::Student => false,
        Role::Alumni => ALUMNI_WRITABLE_TABLES
            .iter()
            .any(|writable| writable.eq_ignore_ascii_case(table)),
    }
}

fn written_table<'a>(action: &AuthAction<'a>) -> Option<&'a str> {
    match *action {
        AuthAction::Insert { table_name }
        | AuthAction::Delete { table_name }
        | AuthAction::Update { table_name, .. } => Some(table_name),
        _ => None,
    }
}
