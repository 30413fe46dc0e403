//! Resolution of an isolated deadline phrase to an absolute timestamp.

use crate::nlu::{
    domain::{EntityLabel, relative::end_of_day},
    ports::{CalendarParser, LanguageAnalyzer},
};
use chrono::{NaiveDateTime, NaiveTime};
use std::sync::Arc;
use tracing::debug;

/// Resolves deadline phrases such as "next friday" or "tomorrow at 5pm".
///
/// A phrase naming today or tonight is the end of the current day. Any
/// other phrase is handed to the calendar parser, preferring the DATE entity
/// the analyzer finds inside it. A parsed time of exactly midnight means no
/// time was given and becomes 23:59:59 of the same date.
pub struct TemporalResolver<A, P> {
    analyzer: Arc<A>,
    parser: Arc<P>,
}

impl<A, P> TemporalResolver<A, P>
where
    A: LanguageAnalyzer,
    P: CalendarParser,
{
    /// Creates a resolver over the given analyzer and calendar parser.
    #[must_use]
    pub const fn new(analyzer: Arc<A>, parser: Arc<P>) -> Self {
        Self { analyzer, parser }
    }

    /// Resolves `phrase` relative to `now`, or `None` when it names no date.
    #[must_use]
    pub fn resolve(&self, phrase: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let lower = phrase.to_lowercase();
        if lower.contains("today") || lower.contains("tonight") {
            return Some(end_of_day(now.date()));
        }

        let analysis = self.analyzer.analyze(phrase);
        let from_entity = analysis
            .first_entity(EntityLabel::Date)
            .and_then(|entity| self.parser.parse(&entity.text, now).ok());
        let parsed = from_entity.or_else(|| self.parser.parse(phrase, now).ok());

        let resolved = parsed.map(|moment| {
            if moment.time() == NaiveTime::MIN {
                end_of_day(moment.date())
            } else {
                moment
            }
        });
        debug!(phrase, ?resolved, "resolved deadline phrase");
        resolved
    }
}
