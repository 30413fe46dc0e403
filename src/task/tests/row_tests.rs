//! Tests for the external task row model.

use crate::task::adapters::models::{TaskRow, TaskRowError, parse_deadline};
use crate::task::domain::{Difficulty, TaskDescriptor, TaskId, TaskName, TaskStatus};
use chrono::{NaiveDate, NaiveDateTime};
use rstest::rstest;

fn deadline() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 23)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .expect("valid timestamp")
}

#[rstest]
fn descriptor_row_uses_table_field_names() {
    let descriptor = TaskDescriptor::new(
        TaskName::new("math homework").expect("valid name"),
        deadline(),
        Difficulty::Easy,
    );
    let id = TaskId::new();
    let row = TaskRow::from_descriptor(id, &descriptor);
    let json = serde_json::to_value(&row).expect("row serializes");

    assert_eq!(json["Task_name"], "Math homework");
    assert_eq!(json["Deadline"], "2026-10-23T23:59:59");
    assert_eq!(json["difficulty"], "Easy");
    assert_eq!(json["Status"], "To Do");
    assert_eq!(json["id"], id.to_string());
}

#[rstest]
fn row_converts_back_into_task() {
    let id = TaskId::new();
    let row = TaskRow {
        id: id.to_string(),
        task_name: "Math project".to_owned(),
        deadline: "2026-10-23T23:59:59".to_owned(),
        difficulty: "Hard".to_owned(),
        status: "Completed".to_owned(),
    };

    let task = row.to_task().expect("valid row");

    assert_eq!(task.id(), id);
    assert_eq!(task.name().as_str(), "Math project");
    assert_eq!(task.deadline(), deadline());
    assert_eq!(task.difficulty(), Difficulty::Hard);
    assert_eq!(task.status(), TaskStatus::Completed);
}

#[rstest]
fn row_with_malformed_deadline_is_rejected() {
    let row = TaskRow {
        id: TaskId::new().to_string(),
        task_name: "Math project".to_owned(),
        deadline: "next friday".to_owned(),
        difficulty: "Hard".to_owned(),
        status: "To Do".to_owned(),
    };

    assert_eq!(
        row.to_task(),
        Err(TaskRowError::Deadline("next friday".to_owned()))
    );
}

#[rstest]
#[case("2026-10-23T23:59:59")]
#[case("2026-10-23T23:59:59.000")]
#[case("2026-10-23 23:59:59")]
fn deadline_column_accepts_common_iso_forms(#[case] raw: &str) {
    assert_eq!(parse_deadline(raw), Some(deadline()));
}
