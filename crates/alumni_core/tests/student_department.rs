mod common;

use alumni_core::model::department::DepartmentHodForm;
use alumni_core::model::student::StudentUpdateForm;
use alumni_core::{Choice, ServiceError, ValidationError};
use common::{add_alumni, add_department, add_student, admin_session, column_text};

fn update(student_id: &str, email: &str, phone: &str) -> StudentUpdateForm {
    StudentUpdateForm {
        student_id: student_id.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

#[test]
fn student_insert_then_view_lists_the_row() {
    let session = admin_session();
    add_department(&session, 1, "CS");
    add_student(&session, 7, "Sam", 1);

    let listing = session.students().view().unwrap();
    assert_eq!(column_text(&listing, "student_id"), vec!["7"]);
    assert_eq!(column_text(&listing, "department"), vec!["CS"]);
}

#[test]
fn student_update_changes_exactly_one_field() {
    let session = admin_session();
    add_department(&session, 1, "CS");
    add_student(&session, 7, "Sam", 1);

    let report = session
        .students()
        .update(&update("7", "", "555-0199"))
        .unwrap();
    assert_eq!(report.affected_rows, 1);
    assert_eq!(column_text(&report.refreshed, "phone"), vec!["555-0199"]);
    assert_eq!(
        column_text(&report.refreshed, "email"),
        vec!["sam@student.example"]
    );

    let both = session
        .students()
        .update(&update("7", "s@x.com", "555"))
        .unwrap_err();
    assert!(matches!(
        both,
        ServiceError::Validation(ValidationError::ConflictingUpdateFields { .. })
    ));

    let neither = session.students().update(&update("7", "", "")).unwrap_err();
    assert!(matches!(
        neither,
        ServiceError::Validation(ValidationError::NoUpdateField { .. })
    ));
}

#[test]
fn lookups_feed_selection_lists() {
    let session = admin_session();
    add_department(&session, 2, "Physics");
    add_department(&session, 1, "CS");
    add_student(&session, 7, "Sam", 1);

    let departments = session.departments().lookup().unwrap();
    assert_eq!(
        departments,
        vec![
            Choice {
                id: 1,
                name: "CS".to_string()
            },
            Choice {
                id: 2,
                name: "Physics".to_string()
            },
        ]
    );
    assert_eq!(departments[0].to_string(), "1 - CS");
    assert_eq!(session.students().lookup().unwrap().len(), 1);
}

#[test]
fn department_update_and_delete_detach_members() {
    let session = admin_session();
    add_department(&session, 1, "CS");
    add_alumni(&session, 100, "Jane", 1);
    add_student(&session, 7, "Sam", 1);

    let report = session
        .departments()
        .update(&DepartmentHodForm {
            dept_id: "1".to_string(),
            hod: "Dr. Iyer".to_string(),
        })
        .unwrap();
    assert_eq!(column_text(&report.refreshed, "hod"), vec!["Dr. Iyer"]);

    let outcome = session.departments().delete("1", &true).unwrap();
    assert_eq!(outcome.report().map(|report| report.affected_rows), Some(1));

    let alumni = session.alumni().view().unwrap();
    assert_eq!(column_text(&alumni, "department"), vec!["NULL"]);
    let students = session.students().view().unwrap();
    assert_eq!(column_text(&students, "student_id"), vec!["7"]);
    assert_eq!(column_text(&students, "department"), vec!["NULL"]);
}

#[test]
fn delete_then_view_and_missing_key() {
    let session = admin_session();
    add_department(&session, 1, "CS");
    add_student(&session, 7, "Sam", 1);

    let declined = session.students().delete("7", &false).unwrap();
    assert!(declined.is_declined());
    assert_eq!(session.students().view().unwrap().len(), 1);

    let outcome = session.students().delete("7", &true).unwrap();
    assert!(outcome.report().unwrap().refreshed.is_empty());

    let missing = session.students().delete("7", &true).unwrap();
    assert_eq!(missing.report().map(|report| report.affected_rows), Some(0));

    let bad = session.students().delete("seven", &true).unwrap_err();
    assert!(matches!(
        bad,
        ServiceError::Validation(ValidationError::NotANumber {
            field: "Student ID",
            ..
        })
    ));
}
