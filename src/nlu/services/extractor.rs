//! Extraction of a complete task descriptor from a creation message.

use super::{classifier::starts_with_word, temporal::TemporalResolver};
use crate::{
    nlu::{
        domain::{
            Analysis, DependencyRole, EntityLabel,
            lexicon::{
                CREATION_PREFIXES, DEADLINE_PREPOSITIONS, EASY_KEYWORDS, FILLER_WORDS,
                HARD_KEYWORDS, MEDIUM_KEYWORDS, TASK_INDICATORS,
            },
            patterns::compile,
        },
        ports::{CalendarParser, LanguageAnalyzer},
    },
    task::domain::{Difficulty, TaskDescriptor, TaskName},
};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::debug;

static DEADLINE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(?:by|due|until|before)\b"));

static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r",|\bdifficulty\b"));

static DUE_OR_BY: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b(?:due|by)\s+(.+)"));

static DIFFICULTY_SCALE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\bdifficulty(?:\s+level)?(?:\s*:\s*|\s+of\s+|\s+)(\d+)\b")
});

/// Why a creation message could not become a task.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// No task name could be isolated.
    #[error("could not work out the task name")]
    MissingName,

    /// No deadline could be resolved.
    #[error("could not work out the deadline")]
    MissingDeadline,
}

/// Turns task-creation text into a [`TaskDescriptor`].
///
/// The name comes from the text after the first task-intention indicator,
/// cut at the deadline clause; when that is empty the analyzer's direct
/// object (or a non-deadline prepositional object) is used instead. The
/// deadline is the object of a `by`/`due`/`until` preposition, then the
/// text after `due`/`by`, then the first DATE entity.
pub struct TaskDescriptorExtractor<A, P> {
    analyzer: Arc<A>,
    temporal: TemporalResolver<A, P>,
}

impl<A, P> TaskDescriptorExtractor<A, P>
where
    A: LanguageAnalyzer,
    P: CalendarParser,
{
    /// Creates an extractor sharing the analyzer with its temporal resolver.
    #[must_use]
    pub fn new(analyzer: Arc<A>, parser: Arc<P>) -> Self {
        Self {
            temporal: TemporalResolver::new(Arc::clone(&analyzer), parser),
            analyzer,
        }
    }

    /// Extracts a descriptor from `text`, resolving dates against `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError`] when the name or the deadline cannot be
    /// resolved; no partial descriptor is produced.
    pub fn extract(
        &self,
        text: &str,
        now: NaiveDateTime,
    ) -> Result<TaskDescriptor, ExtractionError> {
        let analysis = self.analyzer.analyze(text);
        let raw_name = extract_name(text, &analysis).ok_or(ExtractionError::MissingName)?;
        let name = TaskName::new(raw_name).map_err(|_| ExtractionError::MissingName)?;
        let deadline = self
            .extract_deadline(text, &analysis, now)
            .ok_or(ExtractionError::MissingDeadline)?;
        let difficulty = extract_difficulty(text, &analysis);
        debug!(name = %name, %deadline, %difficulty, "extracted task descriptor");
        Ok(TaskDescriptor::new(name, deadline, difficulty))
    }

    fn extract_deadline(
        &self,
        text: &str,
        analysis: &Analysis,
        now: NaiveDateTime,
    ) -> Option<NaiveDateTime> {
        let from_parse = deadline_object(analysis)
            .and_then(|phrase| self.temporal.resolve(phrase, now));
        if from_parse.is_some() {
            return from_parse;
        }
        let from_keyword = DUE_OR_BY
            .captures(text)
            .and_then(|captures| captures.get(1))
            .and_then(|phrase| self.temporal.resolve(phrase.as_str(), now));
        if from_keyword.is_some() {
            return from_keyword;
        }
        analysis
            .first_entity(EntityLabel::Date)
            .and_then(|entity| self.temporal.resolve(&entity.text, now))
    }
}

/// Isolates the task name, falling back to grammatical roles.
fn extract_name(text: &str, analysis: &Analysis) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    indicator_end(&lower)
        .and_then(|start| {
            let end = clause_end(&lower, start, analysis);
            let segment = text.get(start..end)?.trim();
            let stripped = strip_filler(segment)
                .trim_matches(|c: char| !c.is_alphanumeric() && c != ')' && c != '"');
            (!stripped.is_empty()).then(|| stripped.to_owned())
        })
        .or_else(|| grammatical_name(analysis))
}

/// Byte offset just past the first task-intention indicator.
fn indicator_end(lower: &str) -> Option<usize> {
    let indicated = TASK_INDICATORS
        .iter()
        .find_map(|indicator| lower.find(indicator).map(|at| at + indicator.len()));
    indicated.or_else(|| {
        CREATION_PREFIXES
            .iter()
            .find(|prefix| starts_with_word(lower, prefix))
            .map(|prefix| prefix.len())
    })
}

/// End of the task text: the deadline keyword (or, without one, the first
/// DATE entity), cut further at a comma or a difficulty clause.
fn clause_end(lower: &str, start: usize, analysis: &Analysis) -> usize {
    let tail = lower.get(start..).unwrap_or_default();
    let deadline = DEADLINE_KEYWORD
        .find(tail)
        .map(|found| start + found.start())
        .or_else(|| {
            analysis
                .entities()
                .iter()
                .find(|entity| entity.label == EntityLabel::Date && entity.start >= start)
                .map(|entity| entity.start)
        });
    let clause = CLAUSE_BREAK.find(tail).map(|found| start + found.start());
    [deadline, clause]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(lower.len())
}

fn strip_filler(segment: &str) -> &str {
    let lower = segment.to_ascii_lowercase();
    FILLER_WORDS
        .iter()
        .find(|filler| starts_with_word(&lower, filler))
        .and_then(|filler| segment.get(filler.len()..))
        .map_or(segment, str::trim_start)
}

/// The direct object's subtree, else the first object of a preposition that
/// does not introduce a deadline.
fn grammatical_name(analysis: &Analysis) -> Option<String> {
    let tokens = analysis.tokens();
    let direct = tokens
        .iter()
        .position(|token| token.role == DependencyRole::DirectObject);
    let prepositional = || {
        tokens.iter().position(|token| {
            token.role == DependencyRole::PrepositionalObject
                && token
                    .head
                    .and_then(|head| tokens.get(head))
                    .is_some_and(|governor| {
                        governor.role == DependencyRole::Preposition
                            && !DEADLINE_PREPOSITIONS.contains(&governor.lower.as_str())
                    })
        })
    };
    let index = direct.or_else(prepositional)?;
    analysis
        .subtree_text(index)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

/// Text of the object governed by the first deadline preposition that has
/// one.
fn deadline_object(analysis: &Analysis) -> Option<&str> {
    analysis
        .tokens()
        .iter()
        .enumerate()
        .filter(|(_, token)| {
            token.role == DependencyRole::Preposition
                && DEADLINE_PREPOSITIONS.contains(&token.lower.as_str())
        })
        .find_map(|(index, _)| {
            analysis
                .children(index)
                .find(|child| {
                    analysis
                        .tokens()
                        .get(*child)
                        .is_some_and(|token| token.role == DependencyRole::PrepositionalObject)
                })
                .and_then(|object| analysis.subtree_text(object))
        })
}

/// Reads the difficulty from a numeric scale, then from keywords.
fn extract_difficulty(text: &str, analysis: &Analysis) -> Difficulty {
    let rating = DIFFICULTY_SCALE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok());
    if let Some(value) = rating {
        return Difficulty::from_rating(value);
    }

    if mentions(analysis, EASY_KEYWORDS) {
        Difficulty::Easy
    } else if mentions(analysis, HARD_KEYWORDS) {
        Difficulty::Hard
    } else if mentions(analysis, MEDIUM_KEYWORDS) {
        Difficulty::Medium
    } else {
        Difficulty::default()
    }
}

fn mentions(analysis: &Analysis, keywords: &[&str]) -> bool {
    analysis
        .tokens()
        .iter()
        .any(|token| keywords.contains(&token.lower.as_str()))
}
