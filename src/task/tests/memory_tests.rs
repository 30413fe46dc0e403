//! Tests for the in-memory task store.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Difficulty, TaskDescriptor, TaskFilter, TaskId, TaskName, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{NaiveDate, NaiveDateTime};
use rstest::{fixture, rstest};

fn on_day(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .expect("valid timestamp")
}

fn descriptor(name: &str, day: u32) -> TaskDescriptor {
    TaskDescriptor::new(
        TaskName::new(name).expect("valid name"),
        on_day(day),
        Difficulty::Medium,
    )
}

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_all_preserves_insertion_order(repo: InMemoryTaskRepository) {
    for (name, day) in [("Math homework", 25), ("Math project", 21), ("Essay", 23)] {
        repo.insert(&descriptor(name, day))
            .await
            .expect("insert should succeed");
    }

    let names: Vec<String> = repo
        .list_all()
        .await
        .expect("list should succeed")
        .iter()
        .map(|task| task.name().as_str().to_owned())
        .collect();

    assert_eq!(names, vec!["Math homework", "Math project", "Essay"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_filter_applies_deadline_bounds(repo: InMemoryTaskRepository) {
    for (name, day) in [("Early", 20), ("Middle", 23), ("Late", 28)] {
        repo.insert(&descriptor(name, day))
            .await
            .expect("insert should succeed");
    }
    let filter = TaskFilter::all()
        .due_at_or_after(on_day(21))
        .due_at_or_before(on_day(25));

    let found = repo
        .find_by_filter(&filter)
        .await
        .expect("filter should succeed");

    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(|task| task.name().as_str()), Some("Middle"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_status_change(repo: InMemoryTaskRepository) {
    let mut task = repo
        .insert(&descriptor("Essay", 23))
        .await
        .expect("insert should succeed");
    task.mark_completed();

    repo.update(&task).await.expect("update should succeed");
    let stored = repo
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");

    assert_eq!(stored.status(), TaskStatus::Completed);
    let rows = repo.rows().expect("rows readable");
    assert_eq!(rows.first().map(|row| row.status.as_str()), Some("Completed"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_only_the_target(repo: InMemoryTaskRepository) {
    let homework = repo
        .insert(&descriptor("Math homework", 25))
        .await
        .expect("insert should succeed");
    let project = repo
        .insert(&descriptor("Math project", 26))
        .await
        .expect("insert should succeed");

    repo.delete(project.id()).await.expect("delete should succeed");
    let remaining = repo.list_all().await.expect("list should succeed");

    assert_eq!(remaining, vec![homework]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_task_reports_not_found(repo: InMemoryTaskRepository) {
    let missing = TaskId::new();
    let result = repo.delete(missing).await;
    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
}
