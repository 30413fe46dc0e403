//! Tests for reply phrasing and task-list formatting.

use super::{descriptor, due, task};
use crate::{
    conversation::{domain::SelectionAction, services::replies},
    task::domain::{Difficulty, Task, TaskId},
};
use chrono::NaiveDate;
use rstest::rstest;

fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 21).expect("valid date")
}

fn rated(name: &str, month: u32, day: u32, difficulty: Difficulty) -> Task {
    Task::from_descriptor(TaskId::new(), descriptor(name, due(month, day), difficulty))
}

#[rstest]
fn phrase_choice_is_deterministic() {
    assert_eq!(replies::greeting("chat-1:hi"), replies::greeting("chat-1:hi"));
    assert_eq!(replies::farewell("chat-1:bye"), replies::farewell("chat-1:bye"));
    assert!(!replies::greeting("chat-1:hi").is_empty());
    assert!(!replies::farewell("chat-1:bye").is_empty());
}

#[rstest]
fn completion_phrase_names_the_task() {
    let finished = task("Math project", due(10, 30));
    let text = replies::completed(&finished).expect("template renders");

    assert!(text.contains("'Math project'"), "{text}");
    assert!(!text.contains("{{"), "{text}");
    assert_eq!(replies::completed(&finished).expect("template renders"), text);
}

#[rstest]
fn added_reply_lists_deadline_and_difficulty() {
    let added = rated("Finish the report", 10, 23, Difficulty::Hard);
    assert_eq!(
        replies::added(&added).expect("template renders"),
        "Task added: Finish the report (due 2026-10-23 23:59, Hard)"
    );
}

#[rstest]
fn names_are_not_html_escaped() {
    let quoted = task("Mom's <birthday> card", due(10, 22));
    assert_eq!(
        replies::deleted(&quoted).expect("template renders"),
        "Task 'Mom's <birthday> card' deleted."
    );
}

#[rstest]
fn empty_list_reads_as_a_clear_schedule() {
    assert_eq!(
        replies::format_task_list(&[], wednesday(), 10),
        "Looks like your schedule is clear!"
    );
}

#[rstest]
fn list_is_sorted_by_deadline_with_urgency_and_effort() {
    let tasks = vec![
        rated("Essay", 10, 30, Difficulty::Easy),
        rated("Report", 10, 21, Difficulty::Hard),
        rated("Slides", 10, 19, Difficulty::Medium),
        rated("Call mom", 10, 22, Difficulty::Easy),
    ];

    let text = replies::format_task_list(&tasks, wednesday(), 10);

    assert_eq!(
        text,
        "Here's what you've got on your plate:\n\n\
         • Slides\n  Due: 2026-10-19 23:59\n  Moderate effort needed\n  Yikes! This is 2 days overdue\n\n\
         • Report\n  Due: 2026-10-21 23:59\n  This one's a bit challenging\n  This is due today!\n\n\
         • Call mom\n  Due: 2026-10-22 23:59\n  Should be pretty straightforward\n  Due tomorrow!\n\n\
         • Essay\n  Due: 2026-10-30 23:59\n  Should be pretty straightforward\n  You've got 9 days to nail this"
    );
}

#[rstest]
fn long_lists_are_truncated_with_a_count() {
    let tasks: Vec<Task> = (22..=26).map(|day| task("Chore", due(10, day))).collect();
    let text = replies::format_task_list(&tasks, wednesday(), 3);

    assert_eq!(text.matches("• Chore").count(), 3);
    assert!(text.ends_with("...and 2 more"), "{text}");
}

#[rstest]
fn disambiguation_prompt_numbers_candidates() {
    let candidates = vec![
        task("Math homework", due(10, 22)),
        task("Math project", due(10, 30)),
    ];
    let (text, options) = replies::disambiguation_prompt(SelectionAction::Complete, &candidates);

    assert_eq!(
        text,
        "I found a few tasks that could match. Which one did you complete?\n\n\
         1. Math homework (due 2026-10-22 23:59)\n\
         2. Math project (due 2026-10-30 23:59)\n\n\
         Just send me the number."
    );
    let ids: Vec<TaskId> = options.iter().map(|option| option.task_id()).collect();
    let expected: Vec<TaskId> = candidates.iter().map(Task::id).collect();
    assert_eq!(ids, expected);
    assert!(options
        .iter()
        .all(|option| option.action() == SelectionAction::Complete));
}

#[rstest]
fn no_match_reply_lists_open_tasks() {
    let tasks = vec![task("Math homework", due(10, 22))];
    let text = replies::no_match("groceries", &tasks, wednesday(), 10).expect("template renders");

    assert!(text.starts_with("No tasks found matching 'groceries'.\n\n"), "{text}");
    assert!(text.contains("• Math homework"), "{text}");
}
