//! Generic calendar parsing port.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Turns free text into an absolute date-time.
pub trait CalendarParser: Send + Sync {
    /// Parses `text` relative to the reference time `now`.
    ///
    /// A result without an explicit time of day carries 00:00:00.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarParseError`] when no date or time can be read from
    /// the text.
    fn parse(&self, text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, CalendarParseError>;
}

/// Failure to read a date from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarParseError {
    /// No date or time expression was found.
    #[error("no date or time found in '{0}'")]
    NoDate(String),

    /// A date expression was found but names an impossible date.
    #[error("'{0}' is not a valid calendar date")]
    InvalidDate(String),
}
