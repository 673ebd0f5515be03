mod common;

use alumni_core::model::alumni::AlumniForm;
use alumni_core::model::department::DepartmentForm;
use alumni_core::model::event::EventForm;
use alumni_core::{ServiceError, ValidationError};
use common::admin_session;

#[test]
fn integer_fields_are_named_in_errors() {
    let session = admin_session();
    let err = session
        .departments()
        .add(&DepartmentForm {
            dept_id: "one".to_string(),
            name: "CS".to_string(),
            hod: "Dr. Rao".to_string(),
        })
        .unwrap_err();
    match err {
        ServiceError::Validation(ValidationError::NotANumber { field, value }) => {
            assert_eq!(field, "Department ID");
            assert_eq!(value, "one");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(session.departments().view().unwrap().is_empty());
}

#[test]
fn required_fields_are_checked_before_types() {
    let session = admin_session();
    let err = session
        .alumni()
        .add(&AlumniForm {
            alumni_id: "x".to_string(),
            name: "Ann".to_string(),
            ..AlumniForm::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Required { field: "Email" })
    ));
}

#[test]
fn event_dates_must_be_calendar_dates() {
    let session = admin_session();
    for (raw, ok) in [
        ("2024-02-29", true),
        ("2023-02-29", false),
        ("2024/02/01", false),
        ("2024-2-1", false),
        (" 2024-03-01", false),
        ("2024-03-01\n", false),
    ] {
        let result = session.events().add(&EventForm {
            event_id: if ok { "1".to_string() } else { "2".to_string() },
            name: "Reunion".to_string(),
            description: String::new(),
            location: "Hall".to_string(),
            date: raw.to_string(),
        });
        assert_eq!(result.is_ok(), ok, "{raw}");
    }
    assert_eq!(session.events().view().unwrap().len(), 1);
}

#[test]
fn selection_fields_reject_names_without_ids() {
    let session = admin_session();
    let err = session
        .alumni()
        .add(&AlumniForm {
            alumni_id: "1".to_string(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            phone_number: String::new(),
            graduation_year: "2020".to_string(),
            company: String::new(),
            department: "CS".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidChoice {
            field: "Department",
            ..
        })
    ));
}
