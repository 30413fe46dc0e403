//! Port contracts for the external language capabilities.
//!
//! The interpretation services depend only on these traits; the rule-based
//! adapters in [`crate::nlu::adapters`] are one implementation.

pub mod analyzer;
pub mod calendar;

pub use analyzer::LanguageAnalyzer;
pub use calendar::{CalendarParseError, CalendarParser};
