//! Reply prose: fixed phrase tables, templates and task-list formatting.
//!
//! Phrases are chosen deterministically by hashing a seed, so the same
//! conversation turn always produces the same wording.

use crate::{
    conversation::domain::{SelectableOption, SelectionAction},
    task::domain::{Difficulty, Task},
};
use chrono::{NaiveDate, NaiveDateTime};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deadline rendering used in every reply.
const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Text sent when anything downstream fails.
pub const ERROR_TEXT: &str = "Sorry, something went wrong while handling that. Please try again.";

/// Usage instructions for `/start`, `/help` and `help`.
pub const HELP_TEXT: &str = "Hey there! I'm your personal task buddy!\n\n\
I can help you keep track of everything you need to do. Just chat with me naturally like:\n\
• \"Need to finish the project by tomorrow\"\n\
• \"Remind me to study for math test next week\"\n\
• \"I've completed the python assignment\"\n\
• \"Show tasks due this week\"\n\
• \"Delete the dentist appointment\"\n\n\
Just tell me what's on your plate, and I'll help you stay organized!";

const GREETING_REPLIES: &[&str] = &[
    "Hey there! How can I help you with your tasks today?",
    "Hello! Ready to help you stay organized!",
    "Hi! Need help managing your tasks?",
    "Hey! What can I do for you today?",
    "Hello there! Ready to tackle some tasks?",
    "Hi! Let me know what you need help with!",
    "Hey! Looking to add or check your tasks?",
    "Hello! How can I assist you today?",
    "Hi there! Ready to help you stay productive!",
    "Hey! Let's get those tasks organized!",
];

const FAREWELL_REPLIES: &[&str] = &[
    "Catch you later! Don't forget about those tasks!",
    "Take it easy! I'll be here when you need me again!",
    "Alright, catch you on the flip side! Keep crushing those tasks!",
    "See ya! Remember, you've got this!",
    "Later! Don't let those deadlines sneak up on you!",
    "You're doing great! Come back anytime you need help!",
    "Peace out! Keep that productivity flowing!",
    "Take care! Your tasks will be waiting right here!",
    "Until next time! Stay awesome and organized!",
    "Bye for now! Keep up the great work!",
];

const COMPLETION_REPLIES: &[&str] = &[
    "Awesome job finishing '{{ name }}'! One less thing to worry about!",
    "Nice work! '{{ name }}' is done and dusted!",
    "You crushed it! '{{ name }}' is complete!",
    "Great going! '{{ name }}' is checked off your list!",
    "Look at you go! '{{ name }}' is finished!",
];

const TASK_ADDED: &str = "Task added: {{ name }} (due {{ due }}, {{ difficulty }})";
const TASK_DELETED: &str = "Task '{{ name }}' deleted.";
const NO_MATCH: &str = "No tasks found matching '{{ description }}'.";

/// Failure to render a reply template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render reply template: {reason}")]
pub struct ReplyError {
    /// Renderer's explanation.
    pub reason: String,
}

#[derive(Serialize)]
struct TaskContext<'a> {
    name: &'a str,
    due: String,
    difficulty: &'static str,
}

impl<'a> TaskContext<'a> {
    fn of(task: &'a Task) -> Self {
        Self {
            name: task.name().as_str(),
            due: format_deadline(task.deadline()),
            difficulty: task.difficulty().as_str(),
        }
    }
}

/// Picks a greeting for the seed.
#[must_use]
pub fn greeting(seed: &str) -> &'static str {
    pick(GREETING_REPLIES, seed)
}

/// Picks a farewell for the seed.
#[must_use]
pub fn farewell(seed: &str) -> &'static str {
    pick(FAREWELL_REPLIES, seed)
}

/// Congratulates the user on a finished task.
///
/// # Errors
///
/// Returns [`ReplyError`] when the template fails to render.
pub fn completed(task: &Task) -> Result<String, ReplyError> {
    let template = pick(COMPLETION_REPLIES, &task.id().to_string());
    render(template, TaskContext::of(task))
}

/// Confirms a deletion.
///
/// # Errors
///
/// Returns [`ReplyError`] when the template fails to render.
pub fn deleted(task: &Task) -> Result<String, ReplyError> {
    render(TASK_DELETED, TaskContext::of(task))
}

/// Confirms a newly stored task.
///
/// # Errors
///
/// Returns [`ReplyError`] when the template fails to render.
pub fn added(task: &Task) -> Result<String, ReplyError> {
    render(TASK_ADDED, TaskContext::of(task))
}

/// Explains that nothing matched, followed by the open tasks.
///
/// # Errors
///
/// Returns [`ReplyError`] when the template fails to render.
pub fn no_match(
    description: &str,
    tasks: &[Task],
    today: NaiveDate,
    limit: usize,
) -> Result<String, ReplyError> {
    #[derive(Serialize)]
    struct NoMatchContext<'a> {
        description: &'a str,
    }
    let heading = render(NO_MATCH, NoMatchContext { description })?;
    Ok(format!(
        "{heading}\n\n{}",
        format_task_list(tasks, today, limit)
    ))
}

/// Prompt and options for an ambiguous completion or deletion.
#[must_use]
pub fn disambiguation_prompt(
    action: SelectionAction,
    candidates: &[Task],
) -> (String, Vec<SelectableOption>) {
    let verb = action.as_str();
    let options: Vec<SelectableOption> = candidates
        .iter()
        .map(|task| SelectableOption::new(candidate_label(task), action, task.id()))
        .collect();
    let numbered: Vec<String> = options
        .iter()
        .zip(1_usize..)
        .map(|(option, number)| format!("{number}. {}", option.label()))
        .collect();
    let text = format!(
        "I found a few tasks that could match. Which one did you {verb}?\n\n{}\n\nJust send me the number.",
        numbered.join("\n")
    );
    (text, options)
}

/// Retry prompt for a number outside the offered range.
#[must_use]
pub fn invalid_choice(available: usize) -> String {
    format!("Invalid number. Please pick between 1 and {available}.")
}

/// Formats tasks for display, soonest deadline first.
///
/// At most `limit` tasks are shown; the rest are summarised in a final
/// line.
#[must_use]
pub fn format_task_list(tasks: &[Task], today: NaiveDate, limit: usize) -> String {
    if tasks.is_empty() {
        return "Looks like your schedule is clear!".to_owned();
    }
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|task| task.deadline());

    let mut sections = vec!["Here's what you've got on your plate:".to_owned()];
    sections.extend(sorted.iter().take(limit).map(|task| {
        format!(
            "• {}\n  Due: {}\n  {}\n  {}",
            task.name(),
            format_deadline(task.deadline()),
            difficulty_remark(task.difficulty()),
            urgency(task.deadline(), today)
        )
    }));
    let hidden = sorted.len().saturating_sub(limit);
    if hidden > 0 {
        sections.push(format!("...and {hidden} more"));
    }
    sections.join("\n\n")
}

fn candidate_label(task: &Task) -> String {
    format!("{} (due {})", task.name(), format_deadline(task.deadline()))
}

fn format_deadline(deadline: NaiveDateTime) -> String {
    deadline.format(DEADLINE_FORMAT).to_string()
}

const fn difficulty_remark(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Hard => "This one's a bit challenging",
        Difficulty::Medium => "Moderate effort needed",
        Difficulty::Easy => "Should be pretty straightforward",
    }
}

fn urgency(deadline: NaiveDateTime, today: NaiveDate) -> String {
    let days = deadline.date().signed_duration_since(today).num_days();
    match days {
        0 => "This is due today!".to_owned(),
        1 => "Due tomorrow!".to_owned(),
        overdue if overdue < 0 => {
            format!("Yikes! This is {} days overdue", overdue.unsigned_abs())
        }
        ahead => format!("You've got {ahead} days to nail this"),
    }
}

fn render(template: &str, context: impl Serialize) -> Result<String, ReplyError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map_err(|error| ReplyError {
            reason: error.to_string(),
        })
}

fn pick(table: &'static [&'static str], seed: &str) -> &'static str {
    let hash = fnv1a_hash(seed);
    u64::try_from(table.len())
        .ok()
        .and_then(|len| hash.checked_rem(len))
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or_default()
}

fn fnv1a_hash(input: &str) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in input.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
