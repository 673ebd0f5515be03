use alumni_core::db::grants::install_store_grants;
use alumni_core::db::open_db_in_memory;
use alumni_core::db::routines::Procedure;
use alumni_core::{CellValue, Execution, GatewayError, Mode, QueryGateway, ReadOutcome, Role};
use rusqlite::types::Value;

fn seed(gateway: &QueryGateway<'_>) {
    gateway
        .write(
            "INSERT INTO Department (dept_id, name, hod) VALUES (?1, ?2, ?3);",
            &[
                Value::Integer(1),
                Value::Text("CS".to_string()),
                Value::Text("Dr. Rao".to_string()),
            ],
        )
        .unwrap();
    gateway
        .write(
            "INSERT INTO Alumni (alumni_id, name, email, graduation_year, dept_id)
             VALUES (100, 'Jane', 'j@x.com', 2020, 1);",
            &[],
        )
        .unwrap();
}

#[test]
fn read_distinguishes_rows_from_empty() {
    let conn = open_db_in_memory().unwrap();
    let gateway = QueryGateway::new(&conn);

    let empty = gateway
        .read("SELECT dept_id, name FROM Department ORDER BY dept_id;", &[])
        .unwrap();
    assert_eq!(
        empty,
        ReadOutcome::Empty {
            columns: vec!["dept_id".to_string(), "name".to_string()],
        }
    );

    seed(&gateway);
    let rows = gateway
        .read("SELECT dept_id, name FROM Department ORDER BY dept_id;", &[])
        .unwrap();
    assert!(!rows.is_empty());
    assert_eq!(
        rows.rows(),
        &[vec![CellValue::Integer(1), CellValue::Text("CS".to_string())]]
    );
}

#[test]
fn write_reports_affected_rows_and_commits() {
    let conn = open_db_in_memory().unwrap();
    let gateway = QueryGateway::new(&conn);
    seed(&gateway);

    let execution = gateway
        .execute(
            "UPDATE Alumni SET company = ?1 WHERE alumni_id = ?2;",
            &[Value::Text("Acme".to_string()), Value::Integer(100)],
            Mode::Write,
        )
        .unwrap();
    match execution {
        Execution::Write(outcome) => assert_eq!(outcome.affected_rows, 1),
        other => panic!("unexpected execution: {other:?}"),
    }

    let company: String = conn
        .query_row("SELECT company FROM Alumni WHERE alumni_id = 100;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(company, "Acme");
}

#[test]
fn failed_write_is_a_generic_store_error_and_leaves_data_untouched() {
    let conn = open_db_in_memory().unwrap();
    let gateway = QueryGateway::new(&conn);
    seed(&gateway);

    let err = gateway
        .write(
            "INSERT INTO Department (dept_id, name, hod) VALUES (1, 'Dup', 'X');",
            &[],
        )
        .unwrap_err();
    assert!(matches!(err, GatewayError::Store(_)));
    assert!(err.to_string().contains("UNIQUE"));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Department;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn store_grants_surface_as_permission_denied() {
    let conn = open_db_in_memory().unwrap();
    seed(&QueryGateway::new(&conn));
    install_store_grants(&conn, Role::Student);
    let gateway = QueryGateway::new(&conn);

    let err = gateway
        .write("DELETE FROM Alumni WHERE alumni_id = 100;", &[])
        .unwrap_err();
    assert!(err.is_permission_denied(), "{err}");

    let still_there = gateway
        .read("SELECT name FROM Alumni WHERE alumni_id = 100;", &[])
        .unwrap();
    assert_eq!(still_there.len(), 1);
}

#[test]
fn procedures_return_first_result_set_or_write_outcome() {
    let conn = open_db_in_memory().unwrap();
    let gateway = QueryGateway::new(&conn);
    seed(&gateway);

    let update = gateway
        .call_procedure(
            Procedure::UpdateAlumniContact,
            &[
                Value::Integer(100),
                Value::Text(String::new()),
                Value::Text("555-0100".to_string()),
            ],
        )
        .unwrap();
    assert_eq!(
        update,
        Execution::Write(alumni_core::WriteOutcome { affected_rows: 1 })
    );

    let (email, phone): (String, String) = conn
        .query_row(
            "SELECT email, phone_number FROM Alumni WHERE alumni_id = 100;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(email, "j@x.com");
    assert_eq!(phone, "555-0100");

    let listing = gateway
        .call_procedure(Procedure::ListMentorshipsByAlumni, &[Value::Integer(100)])
        .unwrap();
    assert!(matches!(listing, Execution::Read(ReadOutcome::Empty { .. })));
}

#[test]
fn procedure_arity_is_checked_before_execution() {
    let conn = open_db_in_memory().unwrap();
    let gateway = QueryGateway::new(&conn);

    let err = gateway
        .call_procedure(Procedure::UpdateAlumniContact, &[Value::Integer(1)])
        .unwrap_err();
    assert!(matches!(err, GatewayError::Store(_)));
}

#[test]
fn typed_procedure_calls_reject_the_other_mode_without_executing() {
    let conn = open_db_in_memory().unwrap();
    let gateway = QueryGateway::new(&conn);
    seed(&gateway);

    let err = gateway
        .call_read_procedure(
            Procedure::UpdateAlumniContact,
            &[
                Value::Integer(100),
                Value::Text("changed@x.com".to_string()),
                Value::Text(String::new()),
            ],
        )
        .unwrap_err();
    assert!(matches!(
        err,
        GatewayError::ProcedureMode {
            expected: Mode::Read,
            ..
        }
    ));
    let email: String = conn
        .query_row("SELECT email FROM Alumni WHERE alumni_id = 100;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(email, "j@x.com");

    let err = gateway
        .call_write_procedure(Procedure::ListMentorshipsByAlumni, &[Value::Integer(100)])
        .unwrap_err();
    assert!(matches!(
        err,
        GatewayError::ProcedureMode {
            expected: Mode::Write,
            ..
        }
    ));

    let roster = gateway
        .call_read_procedure(Procedure::ListMentorshipsByAlumni, &[Value::Integer(100)])
        .unwrap();
    assert!(roster.is_empty());
    assert!(roster.columns().contains(&"student_name".to_string()));
}
