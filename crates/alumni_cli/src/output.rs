//! Table and JSON rendering of operation outcomes.

use crate::dispatch::Outcome;
use crate::OutputFormat;
use alumni_core::{CapabilityTable, Choice, DeleteOutcome, ReadOutcome, WriteReport};
use comfy_table::{presets::UTF8_FULL, Table};
use serde_json::{json, Value};

const NO_RECORDS: &str = "No records found.";
const DECLINED: &str = "Delete cancelled; pass --yes to confirm.";

pub fn render(outcome: &Outcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_text(outcome),
        OutputFormat::Json => pretty(outcome_json(outcome)),
    }
}

pub fn render_capabilities(capabilities: &CapabilityTable, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => {
            let mut table = new_table(["operation", "label", "group", "kind", "enabled"]);
            for (operation, enabled) in capabilities.iter() {
                table.add_row(vec![
                    operation.id().to_string(),
                    operation.label().to_string(),
                    operation.group().label().to_string(),
                    operation.kind().as_str().to_string(),
                    if enabled { "yes" } else { "no" }.to_string(),
                ]);
            }
            format!("role: {}\n{table}", capabilities.role())
        }
        OutputFormat::Json => {
            let operations: Vec<Value> = capabilities
                .iter()
                .map(|(operation, enabled)| {
                    json!({
                        "operation": operation.id(),
                        "label": operation.label(),
                        "group": operation.group().label(),
                        "kind": operation.kind().as_str(),
                        "enabled": enabled,
                    })
                })
                .collect();
            pretty(json!({
                "role": capabilities.role().to_string(),
                "operations": operations,
            }))
        }
    }
}

fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Rows(read) => read_table(read),
        Outcome::Written(report) => write_text(report),
        Outcome::Deleted(DeleteOutcome::Declined) => DECLINED.to_string(),
        Outcome::Deleted(DeleteOutcome::Completed(report)) => write_text(report),
        Outcome::Choices(choices) => choice_table(choices),
    }
}

fn read_table(read: &ReadOutcome) -> String {
    if read.is_empty() {
        return NO_RECORDS.to_string();
    }
    let mut table = new_table(read.columns());
    for row in read.rows() {
        table.add_row(row.iter().map(ToString::to_string).collect::<Vec<_>>());
    }
    table.to_string()
}

fn write_text(report: &WriteReport) -> String {
    format!(
        "{} row(s) affected\n{}",
        report.affected_rows,
        read_table(&report.refreshed)
    )
}

fn choice_table(choices: &[Choice]) -> String {
    if choices.is_empty() {
        return NO_RECORDS.to_string();
    }
    let mut table = new_table(["id", "option"]);
    for choice in choices {
        table.add_row(vec![choice.id.to_string(), choice.to_string()]);
    }
    table.to_string()
}

fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.into_iter().map(|column| column.to_string()).collect::<Vec<_>>());
    table
}

fn outcome_json(outcome: &Outcome) -> Value {
    let encoded = match outcome {
        Outcome::Rows(read) => serde_json::to_value(read),
        Outcome::Written(report) => serde_json::to_value(report),
        Outcome::Deleted(deleted) => serde_json::to_value(deleted),
        Outcome::Choices(choices) => serde_json::to_value(choices),
    };
    encoded.unwrap_or_else(|err| json!({ "status": "error", "message": err.to_string() }))
}

fn pretty(value: Value) -> String {
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{render, render_capabilities, DECLINED, NO_RECORDS};
    use crate::dispatch::Outcome;
    use crate::OutputFormat;
    use alumni_core::{
        CellValue, Choice, DeleteOutcome, ReadOutcome, ResultSet, Role, RolePolicy, WriteReport,
    };

    fn departments() -> ReadOutcome {
        ReadOutcome::Rows(ResultSet {
            columns: vec!["dept_id".to_string(), "name".to_string()],
            rows: vec![vec![CellValue::Integer(1), CellValue::Text("CS".to_string())]],
        })
    }

    #[test]
    fn empty_reads_print_placeholder() {
        let outcome = Outcome::Rows(ReadOutcome::Empty {
            columns: vec!["dept_id".to_string()],
        });
        assert_eq!(render(&outcome, OutputFormat::Table), NO_RECORDS);
    }

    #[test]
    fn writes_print_count_and_refreshed_table() {
        let outcome = Outcome::Written(WriteReport {
            affected_rows: 1,
            refreshed: departments(),
        });
        let text = render(&outcome, OutputFormat::Table);
        assert!(text.starts_with("1 row(s) affected\n"));
        assert!(text.contains("dept_id"));
        assert!(text.contains("CS"));
    }

    #[test]
    fn declined_delete_explains_how_to_confirm() {
        let outcome = Outcome::Deleted(DeleteOutcome::Declined);
        assert_eq!(render(&outcome, OutputFormat::Table), DECLINED);

        let json: serde_json::Value =
            serde_json::from_str(&render(&outcome, OutputFormat::Json)).unwrap();
        assert_eq!(json["status"], "declined");
    }

    #[test]
    fn json_rows_keep_column_order_and_native_types() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&Outcome::Rows(departments()), OutputFormat::Json))
                .unwrap();
        assert_eq!(json["status"], "rows");
        assert_eq!(json["columns"][1], "name");
        assert_eq!(json["rows"][0][0], 1);
        assert_eq!(json["rows"][0][1], "CS");
    }

    #[test]
    fn choices_render_as_labelled_options() {
        let outcome = Outcome::Choices(vec![Choice {
            id: 3,
            name: "Physics".to_string(),
        }]);
        assert!(render(&outcome, OutputFormat::Table).contains("3 - Physics"));
    }

    #[test]
    fn capabilities_list_every_operation() {
        let table = RolePolicy::capabilities(Role::Student);
        let json: serde_json::Value =
            serde_json::from_str(&render_capabilities(&table, OutputFormat::Json)).unwrap();
        let operations = json["operations"].as_array().unwrap();
        assert_eq!(operations.len(), table.iter().count());
        let add = operations
            .iter()
            .find(|entry| entry["operation"] == "alumni.add")
            .unwrap();
        assert_eq!(add["enabled"], false);
    }
}
