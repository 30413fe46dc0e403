//! Matching a free-text description against open tasks.

use crate::{nlu::domain::lexicon::MATCH_STOP_WORDS, task::domain::Task};

/// Result of matching a description against a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Nothing matched; carries every task that was searched.
    NoMatch {
        /// The searched tasks, unchanged.
        all_tasks: Vec<Task>,
    },
    /// Exactly one task matched.
    Single(Task),
    /// Several tasks matched, in discovery order.
    Ambiguous(Vec<Task>),
}

/// Strategy for deciding which tasks a description refers to.
pub trait TaskMatcher: Send + Sync {
    /// Matches an already cleaned description against `tasks`.
    fn match_tasks(&self, description: &str, tasks: Vec<Task>) -> MatchOutcome;
}

/// Matches when any description term is a substring of the task name.
///
/// Comparison ignores case. Matches keep the order of the input list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringTaskMatcher;

impl SubstringTaskMatcher {
    /// Creates a matcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskMatcher for SubstringTaskMatcher {
    fn match_tasks(&self, description: &str, tasks: Vec<Task>) -> MatchOutcome {
        let terms: Vec<String> = description
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        if terms.is_empty() {
            return MatchOutcome::NoMatch { all_tasks: tasks };
        }
        let mut matched: Vec<Task> = tasks
            .iter()
            .filter(|task| {
                let name = task.name().as_str().to_lowercase();
                terms.iter().any(|term| name.contains(term.as_str()))
            })
            .cloned()
            .collect();
        match matched.len() {
            0 => MatchOutcome::NoMatch { all_tasks: tasks },
            1 => matched
                .pop()
                .map_or(MatchOutcome::NoMatch { all_tasks: tasks }, MatchOutcome::Single),
            _ => MatchOutcome::Ambiguous(matched),
        }
    }
}

/// Reduces a completion or deletion residual to its content words.
///
/// Punctuation is dropped, the text is lower-cased and words from the
/// stop list are removed.
#[must_use]
pub fn clean_description(residual: &str) -> String {
    residual
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty() && !MATCH_STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
