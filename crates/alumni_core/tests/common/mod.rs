#![allow(dead_code)]

use alumni_core::model::alumni::AlumniForm;
use alumni_core::model::department::DepartmentForm;
use alumni_core::model::event::EventForm;
use alumni_core::model::student::StudentForm;
use alumni_core::{ReadOutcome, Role, Session, StoreConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn admin_session() -> Session {
    Session::open(Role::Admin, &StoreConfig::memory("admin", "secret"))
        .expect("admin in-memory session")
}

/// File-backed store shared by sessions of different roles.
pub fn store_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("alumni.db");
    (dir, path)
}

pub fn open_as(role: Role, path: &Path) -> Session {
    Session::open(role, &StoreConfig::file(path, role.account_name(), "secret"))
        .expect("file-backed session")
}

pub fn add_department(session: &Session, dept_id: i64, name: &str) {
    session
        .departments()
        .add(&DepartmentForm {
            dept_id: dept_id.to_string(),
            name: name.to_string(),
            hod: format!("Head of {name}"),
        })
        .expect("add department");
}

pub fn add_alumni(session: &Session, alumni_id: i64, name: &str, dept_id: i64) {
    session
        .alumni()
        .add(&AlumniForm {
            alumni_id: alumni_id.to_string(),
            name: name.to_string(),
            email: format!("{}@alumni.example", name.to_ascii_lowercase()),
            phone_number: String::new(),
            graduation_year: "2020".to_string(),
            company: String::new(),
            department: dept_id.to_string(),
        })
        .expect("add alumni");
}

pub fn add_student(session: &Session, student_id: i64, name: &str, dept_id: i64) {
    session
        .students()
        .add(&StudentForm {
            student_id: student_id.to_string(),
            name: name.to_string(),
            email: format!("{}@student.example", name.to_ascii_lowercase()),
            phone: String::new(),
            batch_year: "2024".to_string(),
            department: dept_id.to_string(),
        })
        .expect("add student");
}

pub fn add_event(session: &Session, event_id: i64, name: &str, date: &str) {
    session
        .events()
        .add(&EventForm {
            event_id: event_id.to_string(),
            name: name.to_string(),
            description: String::new(),
            location: "Main Hall".to_string(),
            date: date.to_string(),
        })
        .expect("add event");
}

/// Display text of one named column, in row order.
pub fn column_text(outcome: &ReadOutcome, column: &str) -> Vec<String> {
    let index = outcome
        .columns()
        .iter()
        .position(|name| name == column)
        .unwrap_or_else(|| panic!("missing column {column}"));
    outcome
        .rows()
        .iter()
        .map(|row| row[index].to_string())
        .collect()
}
