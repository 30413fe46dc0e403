//! Query-side resolution of a relation and target date.

use crate::nlu::{
    domain::{
        Relation, RelationQuery,
        lexicon::RELATION_PHRASES,
        relative::{
            end_of_day, end_of_month, end_of_week, has_relative_expression, resolve_relative,
            start_of_day,
        },
    },
    ports::CalendarParser,
};
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::Arc;
use tracing::debug;

/// Turns query text into a [`RelationQuery`].
///
/// The relation comes from the first category whose phrase table has a
/// whole-word hit, checked in the order before, inclusive, after, flexible.
/// Without any hit a bare relative expression ("due this week") reads as
/// "before" with the window starting at the beginning of today.
pub struct RelationResolver<P> {
    parser: Arc<P>,
}

impl<P> RelationResolver<P>
where
    P: CalendarParser,
{
    /// Creates a resolver falling back to `parser` for explicit dates.
    #[must_use]
    pub const fn new(parser: Arc<P>) -> Self {
        Self { parser }
    }

    /// Resolves `text` against `now`.
    ///
    /// Returns `None` when no relation can be established or its target date
    /// cannot be resolved; the caller then lists every task.
    #[must_use]
    pub fn resolve(&self, text: &str, now: NaiveDateTime) -> Option<RelationQuery> {
        let normalized = normalize(text);
        let padded = format!(" {normalized} ");
        let stated = RELATION_PHRASES
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|phrase| contains_words(&padded, phrase)))
            .map(|(relation, _)| *relation);

        let query = match stated {
            Some(Relation::Flexible) => self.resolve_flexible(&normalized, &padded, now),
            Some(relation) => self
                .resolve_target(&normalized, now)
                .map(|target| RelationQuery::new(target, relation)),
            None if has_relative_expression(&normalized) => self
                .resolve_target(&normalized, now)
                .map(|target| {
                    RelationQuery::new(target, Relation::Before)
                        .with_window_start(start_of_day(now.date()))
                }),
            None => None,
        };
        debug!(text, ?query, "resolved query relation");
        query
    }

    fn resolve_flexible(
        &self,
        normalized: &str,
        padded: &str,
        now: NaiveDateTime,
    ) -> Option<RelationQuery> {
        let today = now.date();
        let window_end = if contains_words(padded, "within the week") {
            end_of_week(today, 0)
        } else if contains_words(padded, "within the month") {
            end_of_month(today, 0)
        } else {
            None
        };
        if let Some(end) = window_end {
            return Some(
                RelationQuery::new(start_of_day(today), Relation::Flexible)
                    .with_end(end_of_day(end)),
            );
        }

        if let Some((_, range)) = normalized.split_once("between ") {
            let (from, to) = range.split_once(" and ")?;
            let target = self.resolve_target(from, now)?;
            let query = RelationQuery::new(target, Relation::Flexible);
            return Some(
                self.resolve_target(to, now)
                    .map_or(query, |end| query.with_end(end)),
            );
        }

        self.resolve_target(normalized, now)
            .map(|target| RelationQuery::new(target, Relation::Flexible))
    }

    /// Relative table, then weekday table, then the calendar parser.
    fn resolve_target(&self, text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
        resolve_relative(text, now.date()).or_else(|| {
            self.parser.parse(text, now).ok().map(|moment| {
                if moment.time() == NaiveTime::MIN {
                    end_of_day(moment.date())
                } else {
                    moment
                }
            })
        })
    }
}

/// Lower-cases and reduces punctuation to spaces, keeping the characters
/// used inside dates and times.
fn normalize(text: &str) -> String {
    let spaced: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '\'' | '/' | '-' | ':') {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `true` when `phrase` occurs as a whole-word sequence in space-padded text.
fn contains_words(padded: &str, phrase: &str) -> bool {
    padded.contains(&format!(" {phrase} "))
}
