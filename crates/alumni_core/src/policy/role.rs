//! Session roles.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coarse operator role chosen at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Student,
    Alumni,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Student, Role::Alumni];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Alumni => "alumni",
        }
    }

    /// Store account name bound to this role.
    pub fn account_name(self) -> &'static str {
        self.as_str()
    }

    /// Parses a role case-insensitively (`Admin`, `student`, ...).
    pub fn parse(value: &str) -> Result<Self, RoleError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(RoleError::EmptyRole);
        }

        match normalized.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "student" => Ok(Self::Student),
            "alumni" => Ok(Self::Alumni),
            _ => Err(RoleError::UnsupportedRole(normalized.to_string())),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    EmptyRole,
    UnsupportedRole(String),
}

impl Display for RoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRole => write!(f, "role must not be empty"),
            Self::UnsupportedRole(value) => {
                write!(f, "unsupported role `{value}`; expected admin|student|alumni")
            }
        }
    }
}

impl Error for RoleError {}
