//! Weekly shift calendar
//!
//! Buckets a flat list of shifts into the seven days of a displayed week.
//! Day membership is decided in the branch's timezone: a shift starting at
//! 23:30 UTC belongs to the next calendar day in Lisbon summer time, and the
//! grouping must agree with what staff see on the wall clock.
//!
//! ```text
//! shifts (any order, any range)
//!       │ start_time → branch tz → NaiveDate
//!       ▼
//! WeekSchedule
//!   ├── 2024-01-07: []
//!   ├── 2024-01-08: [..]
//!   ├── ...            (always 7 keys, ascending)
//!   └── 2024-01-13: [..] (each sorted by start_time)
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// Number of days shown by the calendar
pub const DAYS_PER_WEEK: usize = 7;

/// A displayed week, anchored on its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekRange {
    start: NaiveDate,
}

impl WeekRange {
    /// Week beginning on `start` (no weekday alignment applied)
    pub fn starting(start: NaiveDate) -> Self {
        Self { start }
    }

    /// Week containing `date`, with weeks beginning on `first_day`
    pub fn containing(date: NaiveDate, first_day: Weekday) -> Self {
        let back = (7 + date.weekday().num_days_from_monday()
            - first_day.num_days_from_monday())
            % 7;
        Self {
            start: date - Duration::days(back as i64),
        }
    }

    /// Week containing today in `tz`
    pub fn current(tz: Tz, first_day: Weekday) -> Self {
        let today = Utc::now().with_timezone(&tz).date_naive();
        Self::containing(today, first_day)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last displayed day (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_PER_WEEK as i64 - 1)
    }

    /// The seven dates of the week in ascending order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start;
        (0..DAYS_PER_WEEK as i64).map(move |offset| start + Duration::days(offset))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// Week navigation: seven days back
    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Duration::days(DAYS_PER_WEEK as i64),
        }
    }

    /// Week navigation: seven days forward
    pub fn next(&self) -> Self {
        Self {
            start: self.start + Duration::days(DAYS_PER_WEEK as i64),
        }
    }

    /// Half-open UTC interval `[first local midnight, midnight after last day)`
    ///
    /// Used as the query range when refetching shifts for this week.
    pub fn utc_bounds(&self, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            local_midnight_utc(self.start, tz),
            local_midnight_utc(self.end() + Duration::days(1), tz),
        )
    }
}

/// Local 00:00 of `date` in `tz`, as UTC
///
/// DST gap fallback: when midnight does not exist locally, the naive time is
/// read as UTC.
fn local_midnight_utc(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

/// Calendar date of an instant in `tz`
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Shifts of one week grouped per day
///
/// Always holds exactly seven keys, one per day of the week, each mapped to
/// its shifts ordered by `start_time`. Serializes as a JSON object keyed by
/// ISO date (`"2024-01-09"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: BTreeMap<NaiveDate, Vec<Shift>>,
}

impl WeekSchedule {
    /// Shifts starting on `date`; `None` when the date is outside the week
    pub fn get(&self, date: NaiveDate) -> Option<&[Shift]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Days in ascending order with their shifts
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<Shift>)> {
        self.days.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.keys()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no day has a shift (the seven keys are still present)
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    pub fn total_shifts(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Scheduled hours per employee across the week
    pub fn hours_by_employee(&self) -> BTreeMap<i64, f64> {
        let mut hours = BTreeMap::new();
        for shift in self.days.values().flatten() {
            *hours.entry(shift.employee_id).or_insert(0.0) += shift.hours();
        }
        hours
    }
}

/// Group `shifts` into the seven days of `week`, deciding days in `tz`
///
/// Shifts whose local start date falls outside the week are dropped; they
/// are typically stale rows from the previously displayed range. Ties on
/// `start_time` keep their input order.
pub fn group_shifts_by_day(shifts: &[Shift], week: WeekRange, tz: Tz) -> WeekSchedule {
    let mut days: BTreeMap<NaiveDate, Vec<Shift>> =
        week.days().map(|date| (date, Vec::new())).collect();

    let mut dropped = 0usize;
    for shift in shifts {
        let date = local_date(shift.start_time, tz);
        match days.get_mut(&date) {
            Some(bucket) => bucket.push(shift.clone()),
            None => dropped += 1,
        }
    }

    for bucket in days.values_mut() {
        bucket.sort_by_key(|s| s.start_time);
    }

    if dropped > 0 {
        tracing::debug!(
            week_start = %week.start(),
            dropped,
            "Shifts outside the displayed week ignored"
        );
    }

    WeekSchedule { days }
}
