//! Regex-driven calendar parser.
//!
//! Reads one date expression and one time-of-day expression from free text.
//! Relative words and weekday names go through the shared relative-date
//! arithmetic so this parser agrees with the relation resolver.

use crate::nlu::{
    domain::{
        patterns::compile,
        relative::{end_of_month, end_of_week, resolve_relative},
    },
    ports::{CalendarParseError, CalendarParser},
};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const MONTH: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"));

static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2}|\d{4}))?\b"));

static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b({MONTH})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?(?:,?\s+(\d{{4}}))?\b"
    ))
});

static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTH})\b(?:,?\s+(\d{{4}}))?"
    ))
});

static IN_N_UNITS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\bin\s+(\d+|a|an|one|two|three|four|five|six|seven|eight|nine|ten)\s+(day|week|month)s?\b",
    )
});

static DAY_AFTER_TOMORROW: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(?:the\s+)?day\s+after\s+tomorrow\b"));

static END_OF: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\bend\s+of\s+(?:the\s+|this\s+)?(next\s+)?(week|month|day)\b")
});

static TONIGHT: LazyLock<Regex> = LazyLock::new(|| compile(r"\btonight\b"));

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b"));

static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b([01]?\d|2[0-3]):([0-5]\d)\b"));

static NAMED_TIME: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(noon|midday|midnight)\b"));

/// Calendar parser built from fixed date and time patterns.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternCalendarParser;

impl PatternCalendarParser {
    /// Creates the parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CalendarParser for PatternCalendarParser {
    fn parse(&self, text: &str, now: NaiveDateTime) -> Result<NaiveDateTime, CalendarParseError> {
        let lower = text.to_ascii_lowercase();
        let today = now.date();
        let date = parse_date(&lower, today)?;
        let time = parse_time(&lower);

        match (date, time) {
            (Some(day), Some(clock)) => Ok(day.and_time(clock)),
            (Some(day), None) => Ok(day.and_time(NaiveTime::MIN)),
            (None, Some(clock)) => Ok(today.and_time(clock)),
            (None, None) => Err(CalendarParseError::NoDate(text.to_owned())),
        }
    }
}

/// Reads the first date expression, trying absolute forms before relative
/// ones.
fn parse_date(lower: &str, today: NaiveDate) -> Result<Option<NaiveDate>, CalendarParseError> {
    if let Some(captures) = ISO_DATE.captures(lower) {
        let date = ymd(
            number(&captures, 1),
            number(&captures, 2),
            number(&captures, 3),
        );
        return date.map(Some).ok_or_else(|| invalid(&captures));
    }
    if let Some(captures) = NUMERIC_DATE.captures(lower) {
        let month = number(&captures, 1);
        let day = number(&captures, 2);
        let date = captures.get(3).map_or_else(
            || upcoming(today, month, day),
            |year| ymd(Some(expand_year(year.as_str())), month, day),
        );
        return date.map(Some).ok_or_else(|| invalid(&captures));
    }
    if let Some(captures) = MONTH_DAY.captures(lower) {
        let month = captures.get(1).and_then(|name| month_number(name.as_str()));
        let day = number(&captures, 2);
        return explicit_or_upcoming(&captures, 3, today, month, day);
    }
    if let Some(captures) = DAY_MONTH.captures(lower) {
        let month = captures.get(2).and_then(|name| month_number(name.as_str()));
        let day = number(&captures, 1);
        return explicit_or_upcoming(&captures, 3, today, month, day);
    }
    if let Some(captures) = IN_N_UNITS.captures(lower) {
        return Ok(offset_from(&captures, today));
    }
    if DAY_AFTER_TOMORROW.is_match(lower) {
        return Ok(today.checked_add_days(Days::new(2)));
    }
    if let Some(captures) = END_OF.captures(lower) {
        let ahead = u32::from(captures.get(1).is_some());
        let date = match captures.get(2).map(|unit| unit.as_str()) {
            Some("week") => end_of_week(today, u64::from(ahead)),
            Some("month") => end_of_month(today, ahead),
            _ => today.checked_add_days(Days::new(u64::from(ahead))),
        };
        return Ok(date);
    }
    if TONIGHT.is_match(lower) {
        return Ok(Some(today));
    }
    Ok(resolve_relative(lower, today).map(|resolved| resolved.date()))
}

/// Reads the first time-of-day expression.
fn parse_time(lower: &str) -> Option<NaiveTime> {
    if let Some(captures) = CLOCK_TIME.captures(lower) {
        let hour = number(&captures, 1)?;
        let minute = number(&captures, 2).unwrap_or(0);
        let is_pm = captures.get(3).is_some_and(|meridiem| meridiem.as_str() == "pm");
        let hour_24 = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        return NaiveTime::from_hms_opt(hour_24, minute, 0);
    }
    if let Some(captures) = TWENTY_FOUR_HOUR.captures(lower) {
        return NaiveTime::from_hms_opt(number(&captures, 1)?, number(&captures, 2)?, 0);
    }
    NAMED_TIME.captures(lower).and_then(|captures| {
        match captures.get(1).map(|name| name.as_str()) {
            Some("midnight") => Some(NaiveTime::MIN),
            _ => NaiveTime::from_hms_opt(12, 0, 0),
        }
    })
}

fn explicit_or_upcoming(
    captures: &Captures<'_>,
    year_group: usize,
    today: NaiveDate,
    month: Option<u32>,
    day: Option<u32>,
) -> Result<Option<NaiveDate>, CalendarParseError> {
    let date = captures.get(year_group).map_or_else(
        || upcoming(today, month, day),
        |year| ymd(year.as_str().parse().ok(), month, day),
    );
    date.map(Some).ok_or_else(|| invalid(captures))
}

/// The next occurrence of month/day on or after today.
fn upcoming(today: NaiveDate, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    let this_year = ymd(Some(today.year()), month, day)?;
    if this_year >= today {
        return Some(this_year);
    }
    ymd(Some(today.year() + 1), month, day)
}

fn offset_from(captures: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
    let amount = captures.get(1).and_then(|raw| word_number(raw.as_str()))?;
    match captures.get(2).map(|unit| unit.as_str()) {
        Some("day") => today.checked_add_days(Days::new(u64::from(amount))),
        Some("week") => today.checked_add_days(Days::new(u64::from(amount) * 7)),
        Some("month") => today.checked_add_months(Months::new(amount)),
        _ => None,
    }
}

fn ymd(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year?, month?, day?)
}

fn number<T: std::str::FromStr>(captures: &Captures<'_>, group: usize) -> Option<T> {
    captures.get(group)?.as_str().parse().ok()
}

fn expand_year(raw: &str) -> i32 {
    let value: i32 = raw.parse().unwrap_or_default();
    if raw.len() == 2 { 2000 + value } else { value }
}

fn invalid(captures: &Captures<'_>) -> CalendarParseError {
    let matched = captures.get(0).map(|whole| whole.as_str()).unwrap_or_default();
    CalendarParseError::InvalidDate(matched.to_owned())
}

fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?;
    let month = match prefix {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn word_number(raw: &str) -> Option<u32> {
    let value = match raw {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        digits => return digits.parse().ok(),
    };
    Some(value)
}
