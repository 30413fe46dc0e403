//! Deterministic adapters for the language ports.

pub mod pattern_calendar;
pub mod rule_based;

pub use pattern_calendar::PatternCalendarParser;
pub use rule_based::RuleBasedAnalyzer;
