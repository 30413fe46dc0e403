//! Unit tests for the conversation bounded context.

mod disambiguation_tests;
mod replies_tests;

use crate::task::domain::{Difficulty, Task, TaskDescriptor, TaskId, TaskName};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Wednesday 2026-10-21 09:30 UTC.
pub(super) fn wednesday_utc() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 21, 9, 30, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn due(month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, month, day)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .expect("valid timestamp")
}

pub(super) fn descriptor(name: &str, deadline: NaiveDateTime, difficulty: Difficulty) -> TaskDescriptor {
    TaskDescriptor::new(TaskName::new(name).expect("valid name"), deadline, difficulty)
}

pub(super) fn task(name: &str, deadline: NaiveDateTime) -> Task {
    Task::from_descriptor(TaskId::new(), descriptor(name, deadline, Difficulty::Medium))
}

/// Clock frozen at a settable instant.
#[derive(Debug)]
pub(super) struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub(super) const fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub(super) fn advance(&self, by: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
