//! Unit tests for message interpretation.

use chrono::{NaiveDate, NaiveDateTime};


/// Wednesday 2026-10-21, mid-morning.
const WEDNESDAY: (i32, u32, u32) = (2026, 10, 21);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, second)
        .expect("valid timestamp")
}

fn end_of(year: i32, month: u32, day: u32) -> NaiveDateTime {
    at(year, month, day, 23, 59, 59)
}

fn wednesday_morning() -> NaiveDateTime {
    let (year, month, day) = WEDNESDAY;
    at(year, month, day, 9, 30, 0)
}
