//! Explicit operator session: role, store connection and session id.
//!
//! # Responsibility
//! - Validate login input and open the store for one role.
//! - Hand out domain services bound to the session connection and guard.
//!
//! # Invariants
//! - The role is fixed for the lifetime of the session.
//! - Store grants of the role are installed before the session is returned.
//! - Every log event of the session carries its `session_id`.

use crate::db::grants::install_store_grants;
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::gateway::QueryGateway;
use crate::policy::{AccessGuard, CapabilityTable, Role, RoleError, RolePolicy};
use crate::repo::alumni_repo::SqliteAlumniRepository;
use crate::repo::committee_repo::SqliteCommitteeRepository;
use crate::repo::department_repo::SqliteDepartmentRepository;
use crate::repo::education_repo::SqliteEducationRepository;
use crate::repo::event_repo::SqliteEventRepository;
use crate::repo::mentorship_repo::SqliteMentorshipRepository;
use crate::repo::participation_repo::SqliteParticipationRepository;
use crate::repo::student_repo::SqliteStudentRepository;
use crate::service::alumni_service::AlumniService;
use crate::service::committee_service::CommitteeService;
use crate::service::department_service::DepartmentService;
use crate::service::education_service::EducationService;
use crate::service::event_service::EventService;
use crate::service::mentorship_service::MentorshipService;
use crate::service::participation_service::ParticipationService;
use crate::service::student_service::StudentService;
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use uuid::Uuid;

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

impl StoreLocation {
    fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Memory => "memory",
        }
    }
}

/// Store connection parameters supplied at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: StoreLocation,
    pub user: String,
    pub password: String,
}

impl StoreConfig {
    pub fn file(path: impl Into<PathBuf>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn memory(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            location: StoreLocation::Memory,
            user: user.into(),
            password: password.into(),
        }
    }

    /// Checks the login fields against `role`.
    ///
    /// The embedded store has no accounts of its own, so the password is only
    /// required to be present.
    pub fn validate_for(&self, role: Role) -> Result<(), LoginError> {
        let user = self.user.trim();
        if user.is_empty() {
            return Err(LoginError::MissingUser);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        if user != role.account_name() {
            return Err(LoginError::AccountMismatch {
                role,
                user: user.to_string(),
            });
        }
        Ok(())
    }
}

/// Rejected login input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    Role(RoleError),
    MissingUser,
    MissingPassword,
    /// The user name is not the store account of the selected role.
    AccountMismatch { role: Role, user: String },
}

impl Display for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Role(err) => write!(f, "{err}"),
            Self::MissingUser => write!(f, "user must not be empty"),
            Self::MissingPassword => write!(f, "password must not be empty"),
            Self::AccountMismatch { role, user } => write!(
                f,
                "user `{user}` cannot log in as `{role}`; expected `{}`",
                role.account_name()
            ),
        }
    }
}

impl Error for LoginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Role(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RoleError> for LoginError {
    fn from(value: RoleError) -> Self {
        Self::Role(value)
    }
}

/// Session start failures. Both are fatal for a driver.
#[derive(Debug)]
pub enum SessionError {
    Login(LoginError),
    Db(DbError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login(err) => write!(f, "login failed: {err}"),
            Self::Db(err) => write!(f, "cannot open store: {err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Login(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<LoginError> for SessionError {
    fn from(value: LoginError) -> Self {
        Self::Login(value)
    }
}

impl From<DbError> for SessionError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// One operator session over one store connection.
pub struct Session {
    id: Uuid,
    role: Role,
    conn: Connection,
}

impl Session {
    /// Parses `role` and opens a session for it.
    pub fn login(role: &str, config: &StoreConfig) -> Result<Self, SessionError> {
        let role = Role::parse(role).map_err(LoginError::from)?;
        Self::open(role, config)
    }

    /// Validates the login fields, opens the store and installs the role's grants.
    pub fn open(role: Role, config: &StoreConfig) -> Result<Self, SessionError> {
        let id = Uuid::new_v4();
        if let Err(err) = config.validate_for(role) {
            error!(
                "event=session_open module=session status=error session_id={} role={} error_code=login_rejected",
                id, role
            );
            return Err(err.into());
        }

        let conn = match &config.location {
            StoreLocation::File(path) => open_db(path)?,
            StoreLocation::Memory => open_db_in_memory()?,
        };
        install_store_grants(&conn, role);

        info!(
            "event=session_open module=session status=ok session_id={} role={} store={}",
            id,
            role,
            config.location.kind()
        );
        Ok(Self { id, role, conn })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn guard(&self) -> AccessGuard {
        AccessGuard::new(self.role, self.id)
    }

    pub fn gateway(&self) -> QueryGateway<'_> {
        QueryGateway::new(&self.conn)
    }

    /// Capability table of the session role, for presentation enablement.
    pub fn capabilities(&self) -> CapabilityTable {
        RolePolicy::capabilities(self.role)
    }

    pub fn alumni(&self) -> AlumniService<SqliteAlumniRepository<'_>> {
        AlumniService::new(self.guard(), SqliteAlumniRepository::new(self.gateway()))
    }

    pub fn students(&self) -> StudentService<SqliteStudentRepository<'_>> {
        StudentService::new(self.guard(), SqliteStudentRepository::new(self.gateway()))
    }

    pub fn departments(&self) -> DepartmentService<SqliteDepartmentRepository<'_>> {
        DepartmentService::new(self.guard(), SqliteDepartmentRepository::new(self.gateway()))
    }

    pub fn education(&self) -> EducationService<SqliteEducationRepository<'_>> {
        EducationService::new(self.guard(), SqliteEducationRepository::new(self.gateway()))
    }

    pub fn mentorships(&self) -> MentorshipService<SqliteMentorshipRepository<'_>> {
        MentorshipService::new(self.guard(), SqliteMentorshipRepository::new(self.gateway()))
    }

    pub fn committees(&self) -> CommitteeService<SqliteCommitteeRepository<'_>> {
        CommitteeService::new(self.guard(), SqliteCommitteeRepository::new(self.gateway()))
    }

    pub fn events(&self) -> EventService<SqliteEventRepository<'_>> {
        EventService::new(self.guard(), SqliteEventRepository::new(self.gateway()))
    }

    pub fn participation(&self) -> ParticipationService<SqliteParticipationRepository<'_>> {
        ParticipationService::new(
            self.guard(),
            SqliteParticipationRepository::new(self.gateway()),
        )
    }

    /// Closes the store connection.
    pub fn close(self) -> Result<(), DbError> {
        let Self { id, role, conn } = self;
        conn.close().map_err(|(_, err)| DbError::Sqlite(err))?;
        info!(
            "event=session_close module=session status=ok session_id={} role={}",
            id, role
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginError, Session, SessionError, StoreConfig};
    use crate::policy::{Role, RoleError};

    #[test]
    fn login_requires_every_field() {
        let config = StoreConfig::memory("admin", "");
        assert_eq!(
            config.validate_for(Role::Admin),
            Err(LoginError::MissingPassword)
        );
        assert_eq!(
            StoreConfig::memory(" ", "pw").validate_for(Role::Admin),
            Err(LoginError::MissingUser)
        );
        assert!(matches!(
            Session::login("", &StoreConfig::memory("admin", "pw")),
            Err(SessionError::Login(LoginError::Role(RoleError::EmptyRole)))
        ));
    }

    #[test]
    fn user_must_match_role_account() {
        let config = StoreConfig::memory("student", "pw");
        assert!(matches!(
            config.validate_for(Role::Admin),
            Err(LoginError::AccountMismatch {
                role: Role::Admin,
                ..
            })
        ));
        assert_eq!(config.validate_for(Role::Student), Ok(()));
    }

    #[test]
    fn open_session_exposes_role_and_capabilities() {
        let session = Session::login("Alumni", &StoreConfig::memory("alumni", "pw"))
            .expect("alumni session");
        assert_eq!(session.role(), Role::Alumni);
        assert_eq!(session.guard().session_id(), session.id());
        assert_eq!(session.capabilities().role(), Role::Alumni);
        session.close().expect("close session");
    }
}
