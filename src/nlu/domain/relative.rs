//! Deterministic calendar arithmetic for relative date expressions.
//!
//! Every resolved date lands on 23:59:59, since a deadline without a time
//! means "by the end of that day".

use super::patterns::compile;
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Regex;
use std::sync::LazyLock;

/// Relative expressions understood without the generic calendar parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativePattern {
    /// Sunday of the current Monday-anchored week.
    ThisWeek,
    /// Sunday of the following week.
    NextWeek,
    /// Last day of the current month.
    ThisMonth,
    /// Last day of the following month.
    NextMonth,
    /// The current date.
    Today,
    /// The day after the current date.
    Tomorrow,
    /// Sunday after the next Saturday.
    Weekend,
}

static RELATIVE_TABLE: LazyLock<Vec<(RelativePattern, Regex)>> = LazyLock::new(|| {
    vec![
        (RelativePattern::ThisWeek, compile(r"\bthis week\b")),
        (RelativePattern::NextWeek, compile(r"\bnext week\b")),
        (RelativePattern::ThisMonth, compile(r"\bthis month\b")),
        (RelativePattern::NextMonth, compile(r"\bnext month\b")),
        (RelativePattern::Today, compile(r"\btoday\b")),
        (RelativePattern::Tomorrow, compile(r"\btomorrow\b")),
        (RelativePattern::Weekend, compile(r"\b(?:this |)weekend\b")),
    ]
});

static WEEKDAY_TABLE: LazyLock<Vec<(Weekday, Regex)>> = LazyLock::new(|| {
    vec![
        (Weekday::Sun, compile(r"\b(?:this |next |)sunday\b")),
        (Weekday::Mon, compile(r"\b(?:this |next |)monday\b")),
        (Weekday::Tue, compile(r"\b(?:this |next |)tuesday\b")),
        (Weekday::Wed, compile(r"\b(?:this |next |)wednesday\b")),
        (Weekday::Thu, compile(r"\b(?:this |next |)thursday\b")),
        (Weekday::Fri, compile(r"\b(?:this |next |)friday\b")),
        (Weekday::Sat, compile(r"\b(?:this |next |)saturday\b")),
    ]
});

impl RelativePattern {
    /// Finds the first relative pattern present in lower-cased text.
    #[must_use]
    pub fn find(text: &str) -> Option<Self> {
        RELATIVE_TABLE
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(relative, _)| *relative)
    }

    /// Resolves the pattern against the current date.
    #[must_use]
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDateTime> {
        let date = match self {
            Self::ThisWeek => end_of_week(today, 0),
            Self::NextWeek => end_of_week(today, 1),
            Self::ThisMonth => end_of_month(today, 0),
            Self::NextMonth => end_of_month(today, 1),
            Self::Today => Some(today),
            Self::Tomorrow => today.succ_opt(),
            Self::Weekend => weekend(today),
        }?;
        Some(end_of_day(date))
    }
}

/// Finds the first weekday named in lower-cased text.
#[must_use]
pub fn find_weekday(text: &str) -> Option<Weekday> {
    WEEKDAY_TABLE
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(weekday, _)| *weekday)
}

/// Resolves a relative or weekday expression in lower-cased text.
///
/// The relative table is consulted before the weekday table.
#[must_use]
pub fn resolve_relative(text: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    if let Some(relative) = RelativePattern::find(text) {
        return relative.resolve(today);
    }
    find_weekday(text)
        .and_then(|weekday| next_weekday(today, weekday))
        .map(end_of_day)
}

/// Returns `true` when the text holds any relative or weekday expression.
#[must_use]
pub fn has_relative_expression(text: &str) -> bool {
    RelativePattern::find(text).is_some() || find_weekday(text).is_some()
}

/// Returns the date at 23:59:59.
#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(last_second())
}

/// Returns the date at 00:00:00.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Returns 23:59:59.
#[must_use]
pub fn last_second() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

/// The next date on or after `today` falling on `target`.
///
/// The offset is `(target - today) mod 7`, so today itself is returned when
/// it already falls on `target`.
#[must_use]
pub fn next_weekday(today: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    let offset = (i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(7);
    let days = u64::try_from(offset).ok()?;
    today.checked_add_days(Days::new(days))
}

/// Sunday of the Monday-anchored week, `weeks_ahead` weeks from now.
#[must_use]
pub fn end_of_week(today: NaiveDate, weeks_ahead: u64) -> Option<NaiveDate> {
    let to_sunday = 6 - u64::from(today.weekday().num_days_from_monday());
    today.checked_add_days(Days::new(to_sunday + weeks_ahead * 7))
}

/// Last calendar day of the month `months_ahead` months from now.
#[must_use]
pub fn end_of_month(today: NaiveDate, months_ahead: u32) -> Option<NaiveDate> {
    today
        .with_day(1)?
        .checked_add_months(Months::new(months_ahead + 1))?
        .pred_opt()
}

/// The Sunday immediately following the next Saturday.
#[must_use]
pub fn weekend(today: NaiveDate) -> Option<NaiveDate> {
    next_weekday(today, Weekday::Sat)?.succ_opt()
}
