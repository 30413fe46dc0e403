//! Precedence-ordered intent classification.

use crate::nlu::domain::{
    Intent, ParsedIntent,
    lexicon::{
        COMPLETION_PATTERNS, CREATION_PREFIXES, DELETION_PREFIXES, FAREWELL_PHRASES,
        FAREWELL_TOKEN_PHRASES, FAREWELL_TOKENS, GREETING_PHRASES, TASK_INDICATORS,
        TASK_QUERY_PHRASES,
    },
    patterns::compile_all,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static COMPLETION: LazyLock<Vec<Regex>> = LazyLock::new(|| compile_all(COMPLETION_PATTERNS));

/// Commands that ask for usage instructions.
const HELP_COMMANDS: &[&str] = &["/help", "/start", "help"];

/// Labels a message with one intent.
///
/// Phrase sets overlap ("ok" is an acknowledgment but also appears inside
/// other text), so the checks run in a fixed order and the first hit wins:
/// help, greeting, task query, farewell, pending selection, completion,
/// creation, deletion, then the unrecognized fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    /// Creates a classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classifies one message.
    ///
    /// `has_pending` states whether the conversation is waiting for a
    /// numbered selection; only then is a bare number read as a selection.
    #[must_use]
    pub fn classify(&self, text: &str, has_pending: bool) -> ParsedIntent {
        let trimmed = text.trim();
        let parsed = classify_trimmed(trimmed, has_pending);
        debug!(intent = %parsed.intent, residual = %parsed.residual, "classified message");
        parsed
    }
}

fn classify_trimmed(trimmed: &str, has_pending: bool) -> ParsedIntent {
    let lower = trimmed.to_ascii_lowercase();
    let bare = strip_punctuation(&lower);

    if HELP_COMMANDS.contains(&lower.as_str()) {
        return ParsedIntent::new(Intent::Help, trimmed);
    }
    if is_greeting(&lower, bare) {
        return ParsedIntent::new(Intent::Greeting, trimmed);
    }
    if TASK_QUERY_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return ParsedIntent::new(Intent::TaskQuery, trimmed);
    }
    if is_farewell(&lower, bare) {
        return ParsedIntent::new(Intent::Farewell, trimmed);
    }
    if has_pending && let Some(number) = selection_number(trimmed) {
        return ParsedIntent::new(Intent::Selection(number), trimmed);
    }
    if let Some(residual) = completion_residual(trimmed, &lower) {
        return ParsedIntent::new(Intent::TaskCompletion, residual);
    }
    if TASK_INDICATORS.iter().any(|indicator| lower.contains(indicator))
        || CREATION_PREFIXES
            .iter()
            .any(|prefix| starts_with_word(&lower, prefix))
    {
        return ParsedIntent::new(Intent::TaskCreation, trimmed);
    }
    if let Some(prefix) = DELETION_PREFIXES
        .iter()
        .find(|prefix| starts_with_word(&lower, prefix))
    {
        let residual = trimmed.get(prefix.len()..).unwrap_or_default().trim();
        return ParsedIntent::new(Intent::TaskDeletion, residual);
    }
    ParsedIntent::new(Intent::Unrecognized, trimmed)
}

fn is_greeting(lower: &str, bare: &str) -> bool {
    GREETING_PHRASES
        .iter()
        .any(|phrase| bare == *phrase || starts_with_word(lower, phrase))
}

fn is_farewell(lower: &str, bare: &str) -> bool {
    if FAREWELL_PHRASES.contains(&bare) {
        return true;
    }
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|word| !word.is_empty())
        .collect();
    if words.iter().any(|word| FAREWELL_TOKENS.contains(word)) {
        return true;
    }
    let joined = format!(" {} ", words.join(" "));
    FAREWELL_TOKEN_PHRASES
        .iter()
        .any(|phrase| joined.contains(&format!(" {phrase} ")))
}

/// Reads a numbered reply such as `2`, `#2`, `2.` or `2)`.
fn selection_number(text: &str) -> Option<usize> {
    let digits = text
        .strip_prefix('#')
        .unwrap_or(text)
        .trim_end_matches(['.', ')']);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Removes the first matching completion phrase and returns what remains.
fn completion_residual(trimmed: &str, lower: &str) -> Option<String> {
    let found = COMPLETION.iter().find_map(|pattern| pattern.find(lower))?;
    let before = trimmed.get(..found.start()).unwrap_or_default();
    let after = trimmed.get(found.end()..).unwrap_or_default();
    Some(format!("{} {}", before.trim(), after.trim()).trim().to_owned())
}

/// `true` when `text` starts with `prefix` followed by a word boundary.
pub(crate) fn starts_with_word(text: &str, prefix: &str) -> bool {
    text.strip_prefix(prefix)
        .is_some_and(|rest| rest.chars().next().is_none_or(|c| !c.is_alphanumeric()))
}

fn strip_punctuation(text: &str) -> &str {
    text.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '/')
}
