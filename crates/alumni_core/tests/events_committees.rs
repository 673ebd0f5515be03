mod common;

use alumni_core::model::committee::{CommitteeForm, CommitteeUpdateForm};
use alumni_core::model::event::EventUpdateForm;
use alumni_core::{ServiceError, ValidationError};
use common::{add_event, admin_session, column_text};

fn committee(cid: i64, event: &str, name: &str) -> CommitteeForm {
    CommitteeForm {
        cid: cid.to_string(),
        event: event.to_string(),
        name: name.to_string(),
        phone: String::new(),
        head: "Priya".to_string(),
    }
}

#[test]
fn committees_are_ordered_by_event_then_id() {
    let session = admin_session();
    add_event(&session, 2, "Hackathon", "2024-09-01");
    add_event(&session, 1, "Reunion", "2024-06-01");

    let committees = session.committees();
    committees.add(&committee(5, "2 - Hackathon", "Judges")).unwrap();
    committees.add(&committee(9, "1 - Reunion", "Venue")).unwrap();
    committees.add(&committee(3, "1 - Reunion", "Catering")).unwrap();

    let listing = committees.view().unwrap();
    assert_eq!(column_text(&listing, "cid"), vec!["3", "9", "5"]);
    assert_eq!(
        column_text(&listing, "event_name"),
        vec!["Reunion", "Reunion", "Hackathon"]
    );
    assert_eq!(column_text(&listing, "phone"), vec!["NULL"; 3]);
}

#[test]
fn committee_update_needs_head_or_phone() {
    let session = admin_session();
    add_event(&session, 1, "Reunion", "2024-06-01");
    session
        .committees()
        .add(&committee(1, "1", "Venue"))
        .unwrap();

    let err = session
        .committees()
        .update(&CommitteeUpdateForm {
            cid: "1".to_string(),
            ..CommitteeUpdateForm::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::NoUpdateField { .. })
    ));

    let report = session
        .committees()
        .update(&CommitteeUpdateForm {
            cid: "1".to_string(),
            head: "Ravi".to_string(),
            phone: "555-0142".to_string(),
        })
        .unwrap();
    assert_eq!(column_text(&report.refreshed, "head"), vec!["Ravi"]);
    assert_eq!(column_text(&report.refreshed, "phone"), vec!["555-0142"]);
}

#[test]
fn event_update_changes_only_given_fields() {
    let session = admin_session();
    add_event(&session, 1, "Reunion", "2024-06-01");

    let report = session
        .events()
        .update(&EventUpdateForm {
            event_id: "1".to_string(),
            location: "Auditorium".to_string(),
            date: "2024-07-15".to_string(),
            ..EventUpdateForm::default()
        })
        .unwrap();
    assert_eq!(report.affected_rows, 1);
    assert_eq!(column_text(&report.refreshed, "location"), vec!["Auditorium"]);
    assert_eq!(column_text(&report.refreshed, "date"), vec!["2024-07-15"]);
    assert_eq!(column_text(&report.refreshed, "description"), vec!["NULL"]);

    let err = session
        .events()
        .update(&EventUpdateForm {
            event_id: "1".to_string(),
            date: "15-07-2024".to_string(),
            ..EventUpdateForm::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidDate { .. })
    ));
}

#[test]
fn deleting_event_removes_its_committees() {
    let session = admin_session();
    add_event(&session, 1, "Reunion", "2024-06-01");
    add_event(&session, 2, "Hackathon", "2024-09-01");
    session
        .committees()
        .add(&committee(1, "1", "Venue"))
        .unwrap();

    let declined = session.events().delete("1", &false).unwrap();
    assert!(declined.is_declined());
    assert_eq!(session.committees().view().unwrap().len(), 1);

    let outcome = session.events().delete("1", &true).unwrap();
    let report = outcome.report().expect("confirmed delete");
    assert_eq!(column_text(&report.refreshed, "event_id"), vec!["2"]);
    assert!(session.committees().view().unwrap().is_empty());
    assert_eq!(session.events().lookup().unwrap().len(), 1);
}
