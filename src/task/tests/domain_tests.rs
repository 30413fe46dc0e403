//! Domain-focused tests for task values and filters.

use crate::task::domain::{
    Difficulty, Task, TaskDescriptor, TaskDomainError, TaskFilter, TaskId, TaskName, TaskStatus,
};
use chrono::{NaiveDate, NaiveDateTime};
use rstest::{fixture, rstest};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid timestamp")
}

#[fixture]
fn report_task() -> Task {
    let descriptor = TaskDescriptor::new(
        TaskName::new("finish the report").expect("valid name"),
        at(2026, 10, 23, 23, 59, 59),
        Difficulty::Hard,
    );
    Task::from_descriptor(TaskId::new(), descriptor)
}

#[rstest]
fn task_name_capitalizes_first_letter() {
    let name = TaskName::new("  finish the report ").expect("valid name");
    assert_eq!(name.as_str(), "Finish the report");
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_name_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskName::new(raw), Err(TaskDomainError::EmptyTaskName));
}

#[rstest]
#[case(0, Difficulty::Easy)]
#[case(1, Difficulty::Easy)]
#[case(2, Difficulty::Easy)]
#[case(3, Difficulty::Medium)]
#[case(4, Difficulty::Hard)]
#[case(10, Difficulty::Hard)]
fn difficulty_rating_maps_to_level(#[case] rating: u32, #[case] expected: Difficulty) {
    assert_eq!(Difficulty::from_rating(rating), expected);
}

#[rstest]
fn difficulty_defaults_to_medium() {
    assert_eq!(Difficulty::default(), Difficulty::Medium);
}

#[rstest]
#[case("To Do", TaskStatus::ToDo)]
#[case("todo", TaskStatus::ToDo)]
#[case("Completed", TaskStatus::Completed)]
fn task_status_parses_storage_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn task_status_rejects_unknown_value() {
    assert!(TaskStatus::try_from("archived").is_err());
}

#[rstest]
fn new_task_starts_outstanding(report_task: Task) {
    assert_eq!(report_task.status(), TaskStatus::ToDo);
    assert_eq!(report_task.name().as_str(), "Finish the report");
}

#[rstest]
fn mark_completed_changes_status(mut report_task: Task) {
    report_task.mark_completed();
    assert_eq!(report_task.status(), TaskStatus::Completed);
}

#[rstest]
fn task_id_round_trips_through_display() {
    let id = TaskId::new();
    let parsed: TaskId = id.to_string().parse().expect("valid id");
    assert_eq!(parsed, id);
}

#[rstest]
fn task_id_rejects_garbage() {
    let result = "not-an-id".parse::<TaskId>();
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidTaskId("not-an-id".to_owned()))
    );
}

#[rstest]
fn unrestricted_filter_matches_everything(report_task: Task) {
    let filter = TaskFilter::all();
    assert!(filter.is_unrestricted());
    assert!(filter.matches(&report_task));
}

#[rstest]
#[case(at(2026, 10, 23, 0, 0, 0), at(2026, 10, 23, 23, 59, 59), true)]
#[case(at(2026, 10, 24, 0, 0, 0), at(2026, 10, 30, 23, 59, 59), false)]
#[case(at(2026, 10, 1, 0, 0, 0), at(2026, 10, 22, 23, 59, 59), false)]
fn deadline_bounds_are_inclusive(
    report_task: Task,
    #[case] from: NaiveDateTime,
    #[case] to: NaiveDateTime,
    #[case] expected: bool,
) {
    let filter = TaskFilter::all().due_at_or_after(from).due_at_or_before(to);
    assert_eq!(filter.matches(&report_task), expected);
}

#[rstest]
fn status_filter_excludes_completed_tasks(mut report_task: Task) {
    report_task.mark_completed();
    let filter = TaskFilter::all().with_status(TaskStatus::ToDo);
    assert!(!filter.matches(&report_task));
}
