//! Declarative role grants and the per-session access guard.
//!
//! # Invariants
//! - Lookups are available to every role; selection lists feed other forms.
//! - Admin may invoke every operation.
//! - Student may invoke view operations only.
//! - Alumni may invoke every operation of the Alumni, Education and
//!   Mentorship groups.
//! - The guard is checked before validation and before any store call.

use crate::policy::operation::{Operation, OperationGroup, OperationKind};
use crate::policy::role::Role;
use log::warn;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ALUMNI_GROUPS: &[OperationGroup] = &[
    OperationGroup::Mentorship,
    OperationGroup::Education,
    OperationGroup::Alumni,
];

#[derive(Debug, Clone, Copy)]
enum Grant {
    Everything,
    ViewOnly,
    Groups(&'static [OperationGroup]),
}

fn grant_for(role: Role) -> Grant {
    match role {
        Role::Admin => Grant::Everything,
        Role::Student => Grant::ViewOnly,
        Role::Alumni => Grant::Groups(ALUMNI_GROUPS),
    }
}

/// Stateless role policy over the operation catalogue.
pub struct RolePolicy;

impl RolePolicy {
    /// Returns whether `role` may invoke `operation`.
    pub fn permits(role: Role, operation: Operation) -> bool {
        if operation.kind() == OperationKind::Lookup {
            return true;
        }

        match grant_for(role) {
            Grant::Everything => true,
            Grant::ViewOnly => operation.kind() == OperationKind::View,
            Grant::Groups(groups) => groups.contains(&operation.group()),
        }
    }

    /// Builds the full capability table of `role`.
    pub fn capabilities(role: Role) -> CapabilityTable {
        let entries = Operation::ALL
            .into_iter()
            .map(|operation| (operation, Self::permits(role, operation)))
            .collect();
        CapabilityTable { role, entries }
    }
}

/// Enabled/disabled state of every operation for one role.
///
/// Presentation layers use this to grey out affordances; enforcement itself
/// happens in [`AccessGuard::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    role: Role,
    entries: BTreeMap<Operation, bool>,
}

impl CapabilityTable {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_enabled(&self, operation: Operation) -> bool {
        self.entries.get(&operation).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Operation, bool)> + '_ {
        self.entries
            .iter()
            .map(|(operation, enabled)| (*operation, *enabled))
    }

    pub fn enabled(&self) -> Vec<Operation> {
        self.iter()
            .filter_map(|(operation, enabled)| enabled.then_some(operation))
            .collect()
    }

    pub fn disabled(&self) -> Vec<Operation> {
        self.iter()
            .filter_map(|(operation, enabled)| (!enabled).then_some(operation))
            .collect()
    }
}

/// Copyable authorization handle handed to every domain service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGuard {
    role: Role,
    session_id: Uuid,
}

impl AccessGuard {
    pub fn new(role: Role, session_id: Uuid) -> Self {
        Self { role, session_id }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Fails with [`PolicyError::OperationDenied`] when the role lacks `operation`.
    pub fn check(&self, operation: Operation) -> Result<(), PolicyError> {
        if RolePolicy::permits(self.role, operation) {
            return Ok(());
        }

        warn!(
            "event=operation_denied module=policy status=denied session_id={} role={} operation={}",
            self.session_id, self.role, operation
        );
        Err(PolicyError::OperationDenied {
            role: self.role,
            operation,
        })
    }
}

/// Domain-layer authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    OperationDenied { role: Role, operation: Operation },
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperationDenied { role, operation } => write!(
                f,
                "role `{role}` is not allowed to perform `{}` ({operation})",
                operation.label()
            ),
        }
    }
}

impl Error for PolicyError {}

#[cfg(test)]
mod tests {
    use super::{AccessGuard, PolicyError, RolePolicy};
    use crate::policy::operation::{Operation, OperationGroup, OperationKind};
    use crate::policy::role::Role;
    use uuid::Uuid;

    #[test]
    fn admin_is_unrestricted() {
        let table = RolePolicy::capabilities(Role::Admin);
        assert!(table.disabled().is_empty());
        assert_eq!(table.enabled().len(), Operation::ALL.len());
    }

    #[test]
    fn student_keeps_view_and_lookup_only() {
        let table = RolePolicy::capabilities(Role::Student);
        for (operation, enabled) in table.iter() {
            assert_eq!(
                enabled,
                operation.kind() != OperationKind::Write,
                "{operation}"
            );
        }
    }

    #[test]
    fn alumni_keeps_alumni_education_and_mentorship_groups() {
        let table = RolePolicy::capabilities(Role::Alumni);
        assert!(table.is_enabled(Operation::DeleteAlumni));
        assert!(table.is_enabled(Operation::AddEducation));
        assert!(table.is_enabled(Operation::EndMentorship));
        assert!(table.is_enabled(Operation::LookupStudents));
        assert!(!table.is_enabled(Operation::ViewEvents));
        assert!(!table.is_enabled(Operation::AddStudent));

        for operation in table.disabled() {
            assert!(!matches!(
                operation.group(),
                OperationGroup::Alumni | OperationGroup::Education | OperationGroup::Mentorship
            ));
        }
    }

    #[test]
    fn guard_reports_role_and_operation_on_denial() {
        let guard = AccessGuard::new(Role::Student, Uuid::new_v4());
        guard
            .check(Operation::ViewAlumni)
            .expect("view stays allowed");

        let err = guard
            .check(Operation::DeleteAlumni)
            .expect_err("delete must be denied");
        assert_eq!(
            err,
            PolicyError::OperationDenied {
                role: Role::Student,
                operation: Operation::DeleteAlumni,
            }
        );
        assert!(err.to_string().contains("Delete Alumni"));
    }

    #[test]
    fn guard_decisions_are_stable_across_repeated_checks() {
        let guard = AccessGuard::new(Role::Alumni, Uuid::new_v4());
        for _ in 0..3 {
            guard
                .check(Operation::StartMentorship)
                .expect("mentorship remains allowed");
            guard
                .check(Operation::AddEvent)
                .expect_err("events remain denied");
        }
    }
}
