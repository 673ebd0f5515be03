mod common;

use alumni_core::gateway::{GatewayResult, ReadOutcome, WriteOutcome};
use alumni_core::model::department::DepartmentForm;
use alumni_core::model::education::EducationForm;
use alumni_core::model::event::EventForm;
use alumni_core::model::form::Choice;
use alumni_core::model::student::{Student, StudentContactChange, StudentForm, StudentUpdateForm};
use alumni_core::repo::student_repo::StudentRepository;
use alumni_core::service::student_service::StudentService;
use alumni_core::{
    AccessGuard, Operation, OperationKind, PolicyError, Role, RolePolicy, ServiceError,
};
use common::{add_alumni, add_department, add_student, column_text, open_as, store_file};
use uuid::Uuid;

/// Fails the test on any store access.
struct UnreachableStudents;

impl StudentRepository for UnreachableStudents {
    fn insert(&self, _student: &Student) -> GatewayResult<WriteOutcome> {
        panic!("store reached: insert");
    }

    fn list(&self) -> GatewayResult<ReadOutcome> {
        panic!("store reached: list");
    }

    fn update_contact(
        &self,
        _student_id: i64,
        _change: &StudentContactChange,
    ) -> GatewayResult<WriteOutcome> {
        panic!("store reached: update_contact");
    }

    fn delete(&self, _student_id: i64) -> GatewayResult<WriteOutcome> {
        panic!("store reached: delete");
    }

    fn lookup(&self) -> GatewayResult<Vec<Choice>> {
        Ok(Vec::new())
    }
}

fn denied(err: &ServiceError, operation: Operation) -> bool {
    matches!(
        err,
        ServiceError::Denied(PolicyError::OperationDenied { operation: refused, .. })
            if *refused == operation
    )
}

#[test]
fn student_writes_are_denied_before_validation_and_store() {
    let service = StudentService::new(
        AccessGuard::new(Role::Student, Uuid::new_v4()),
        UnreachableStudents,
    );

    // Invalid input still reports the denial, not a validation error.
    let err = service.add(&StudentForm::default()).unwrap_err();
    assert!(denied(&err, Operation::AddStudent), "{err}");
    assert!(err.is_permission_denied());

    let err = service.update(&StudentUpdateForm::default()).unwrap_err();
    assert!(denied(&err, Operation::UpdateStudent));

    let err = service.delete("7", &true).unwrap_err();
    assert!(denied(&err, Operation::DeleteStudent));

    assert!(service.lookup().unwrap().is_empty());
}

#[test]
fn capability_table_matches_role_grants_for_every_operation() {
    for operation in Operation::ALL {
        assert!(RolePolicy::permits(Role::Admin, operation), "{operation}");
        assert_eq!(
            RolePolicy::permits(Role::Student, operation),
            operation.kind() != OperationKind::Write,
            "{operation}"
        );
        let alumni_group = matches!(
            operation.id().split('.').next(),
            Some("alumni" | "education" | "mentorship")
        );
        assert_eq!(
            RolePolicy::permits(Role::Alumni, operation),
            alumni_group || operation.kind() == OperationKind::Lookup,
            "{operation}"
        );
    }
}

#[test]
fn student_session_reads_but_cannot_write() {
    let (_dir, path) = store_file();
    {
        let admin = open_as(Role::Admin, &path);
        add_department(&admin, 1, "CS");
        add_alumni(&admin, 100, "Jane", 1);
    }

    let student = open_as(Role::Student, &path);
    let listing = student.alumni().view().unwrap();
    assert_eq!(column_text(&listing, "name"), vec!["Jane"]);
    assert_eq!(student.departments().lookup().unwrap().len(), 1);

    let err = student
        .departments()
        .add(&DepartmentForm {
            dept_id: "2".to_string(),
            name: "Physics".to_string(),
            hod: "Dr. Bose".to_string(),
        })
        .unwrap_err();
    assert!(denied(&err, Operation::AddDepartment));

    let err = student.alumni().delete("100", &true).unwrap_err();
    assert!(denied(&err, Operation::DeleteAlumni));
    assert_eq!(student.alumni().view().unwrap().len(), 1);
}

#[test]
fn alumni_session_manages_its_groups_only() {
    let (_dir, path) = store_file();
    {
        let admin = open_as(Role::Admin, &path);
        add_department(&admin, 1, "CS");
        add_student(&admin, 7, "Sam", 1);
    }

    let alumni = open_as(Role::Alumni, &path);
    add_alumni(&alumni, 100, "Jane", 1);
    alumni
        .education()
        .add(&EducationForm {
            edu_id: "1".to_string(),
            alumni: "100 - Jane".to_string(),
            college_name: "MIT".to_string(),
            degree: "BSc".to_string(),
            course: "CS".to_string(),
            start_year: "2012".to_string(),
            end_year: "2016".to_string(),
        })
        .unwrap();
    assert_eq!(alumni.students().lookup().unwrap().len(), 1);

    let err = alumni.students().view().unwrap_err();
    assert!(denied(&err, Operation::ViewStudents));
    let err = alumni
        .events()
        .add(&EventForm {
            event_id: "1".to_string(),
            name: "Reunion".to_string(),
            description: String::new(),
            location: "Hall".to_string(),
            date: "2024-06-01".to_string(),
        })
        .unwrap_err();
    assert!(denied(&err, Operation::AddEvent));

    let outcome = alumni.alumni().delete("100", &true).unwrap();
    assert_eq!(outcome.report().map(|report| report.affected_rows), Some(1));
}

#[test]
fn store_grants_back_up_the_policy() {
    let (_dir, path) = store_file();
    {
        let admin = open_as(Role::Admin, &path);
        add_department(&admin, 1, "CS");
    }

    let student = open_as(Role::Student, &path);
    let err = student
        .gateway()
        .write("DELETE FROM Department WHERE dept_id = 1;", &[])
        .unwrap_err();
    assert!(err.is_permission_denied());

    let alumni = open_as(Role::Alumni, &path);
    let err = alumni
        .gateway()
        .write("UPDATE Department SET hod = 'X' WHERE dept_id = 1;", &[])
        .unwrap_err();
    assert!(err.is_permission_denied());
}
