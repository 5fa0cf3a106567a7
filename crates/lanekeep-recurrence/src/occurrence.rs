//! Occurrence computation.
//!
//! Weekly patterns search forward from the day after the reference, so an
//! occurrence later on the reference day itself is never returned. Monthly
//! patterns always start from the month after the reference's month.
//!
//! Both searches step one day at a time and give up after a week, returning
//! [`RecurrenceError::NoMatchingWeekday`] rather than looping.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};

use crate::{
    config::{FifthWeekPolicy, RecurrenceConfig},
    error::RecurrenceError,
    pattern::{RecurringPattern, weekday_from_sunday},
    validator::{Cadence, MAX_WEEK_OF_MONTH, Schedule},
};

const DAYS_PER_WEEK: u32 = 7;

/// Months [`FifthWeekPolicy::SkipMonth`] looks ahead before giving up.
///
/// Every weekday has a fifth occurrence within a few months of any start, so
/// this is never reached for a valid pattern.
const SKIP_MONTH_LIMIT: u32 = 12;

/// Most occurrences [`upcoming`] computes in one call.
pub const MAX_UPCOMING: usize = 1_000;

/// First occurrence of `pattern` strictly after `reference`.
///
/// The pattern is validated first; an invalid pattern returns
/// [`RecurrenceError::InvalidPattern`].
pub fn next_occurrence(
    pattern: &RecurringPattern,
    reference: NaiveDateTime,
    config: &RecurrenceConfig,
) -> Result<NaiveDateTime, RecurrenceError> {
    let schedule = Schedule::parse(pattern)?;
    next_after(&schedule, reference, config)
}

/// The next `count` occurrences, each strictly after the one before.
///
/// `count` is capped at [`MAX_UPCOMING`]; larger requests return
/// [`RecurrenceError::TooManyOccurrences`] once the pattern has validated.
pub fn upcoming(
    pattern: &RecurringPattern,
    reference: NaiveDateTime,
    count: usize,
    config: &RecurrenceConfig,
) -> Result<Vec<NaiveDateTime>, RecurrenceError> {
    let schedule = Schedule::parse(pattern)?;
    if count > MAX_UPCOMING {
        return Err(RecurrenceError::TooManyOccurrences { requested: count, max: MAX_UPCOMING });
    }

    let mut occurrences = Vec::with_capacity(count);
    let mut cursor = reference;
    for _ in 0..count {
        cursor = next_after(&schedule, cursor, config)?;
        occurrences.push(cursor);
    }
    Ok(occurrences)
}

/// Date of the `week_of_month`-th `day_of_week` (0 = Sunday) in a month.
///
/// `None` when the month has no such week, such as a fifth Wednesday in
/// February 2025, or when any argument is out of range.
pub fn date_in_month(year: i32, month: u32, week_of_month: u8, day_of_week: u8) -> Option<NaiveDate> {
    if !(1..=MAX_WEEK_OF_MONTH).contains(&week_of_month) {
        return None;
    }
    let weekday = weekday_from_sunday(day_of_week)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    nth_weekday(first, week_of_month, weekday).ok().filter(|date| date.month() == month)
}

fn next_after(
    schedule: &Schedule,
    reference: NaiveDateTime,
    config: &RecurrenceConfig,
) -> Result<NaiveDateTime, RecurrenceError> {
    let date = match schedule.cadence {
        Cadence::Weekly => {
            let tomorrow = reference.date().succ_opt().ok_or(RecurrenceError::DateOutOfRange)?;
            first_matching(tomorrow, schedule.weekday)?
        },
        Cadence::Monthly { week } => {
            next_monthly(reference.date(), week, schedule.weekday, config.fifth_week)?
        },
    };

    let occurrence = date.and_time(schedule.time);
    tracing::debug!(%reference, %occurrence, "computed next occurrence");
    Ok(occurrence)
}

fn next_monthly(
    reference: NaiveDate,
    week: u8,
    weekday: Weekday,
    policy: FifthWeekPolicy,
) -> Result<NaiveDate, RecurrenceError> {
    let month = first_of_next_month(reference)?;
    let date = nth_weekday(month, week, weekday)?;
    if date.month() == month.month() {
        return Ok(date);
    }

    match policy {
        FifthWeekPolicy::Rollover => {
            tracing::warn!(%month, %date, "fifth week rolled into the following month");
            Ok(date)
        },
        FifthWeekPolicy::ClampToLast => {
            let last = date
                .checked_sub_days(Days::new(u64::from(DAYS_PER_WEEK)))
                .ok_or(RecurrenceError::DateOutOfRange)?;
            tracing::warn!(%month, %last, "fifth week clamped to last occurrence");
            Ok(last)
        },
        FifthWeekPolicy::SkipMonth => {
            let mut candidate = month;
            for _ in 0..SKIP_MONTH_LIMIT {
                candidate = first_of_next_month(candidate)?;
                let date = nth_weekday(candidate, week, weekday)?;
                if date.month() == candidate.month() {
                    tracing::warn!(skipped = %month, %date, "no fifth week, skipped ahead");
                    return Ok(date);
                }
            }
            Err(RecurrenceError::NoFifthWeek { from: month, months: SKIP_MONTH_LIMIT })
        },
    }
}

/// First `weekday` in the month starting at `first`, plus `week - 1` weeks.
///
/// May land in the following month for week 5.
fn nth_weekday(first: NaiveDate, week: u8, weekday: Weekday) -> Result<NaiveDate, RecurrenceError> {
    let offset = u64::from(week.saturating_sub(1)) * u64::from(DAYS_PER_WEEK);
    first_matching(first, weekday)?
        .checked_add_days(Days::new(offset))
        .ok_or(RecurrenceError::DateOutOfRange)
}

/// First day on or after `from` that falls on `weekday`.
fn first_matching(from: NaiveDate, weekday: Weekday) -> Result<NaiveDate, RecurrenceError> {
    let mut day = from;
    for _ in 0..DAYS_PER_WEEK {
        if day.weekday() == weekday {
            return Ok(day);
        }
        day = day.succ_opt().ok_or(RecurrenceError::DateOutOfRange)?;
    }
    Err(RecurrenceError::NoMatchingWeekday { from, steps: DAYS_PER_WEEK })
}

fn first_of_next_month(date: NaiveDate) -> Result<NaiveDate, RecurrenceError> {
    date.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .ok_or(RecurrenceError::DateOutOfRange)
}
