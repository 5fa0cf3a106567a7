//! Pattern validation.
//!
//! Checks run in a fixed order (frequency, weekday, week of month, time) and
//! the first failure is reported, so a form shows one reason at a time.
//! A pattern that passes is turned into a [`Schedule`], the typed form the
//! occurrence search works from.

use std::sync::LazyLock;

use chrono::{NaiveTime, Weekday};
use regex::Regex;

use crate::{
    error::PatternError,
    pattern::{Frequency, RecurringPattern, weekday_from_sunday},
};

/// Strict 24-hour `HH:mm`: exactly two ASCII digits either side.
static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    let Ok(re) = Regex::new(r"^([0-9]{2}):([0-9]{2})$") else {
        unreachable!("time-of-day expression is a valid regex")
    };
    re
});

/// Highest accepted week of month.
pub(crate) const MAX_WEEK_OF_MONTH: u8 = 5;

/// Result of validating a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternValidation {
    /// Pattern can be used to compute occurrences
    Accept,

    /// Pattern is incomplete or out of range
    Reject {
        /// Why the pattern was rejected
        error: PatternError,
    },
}

impl PatternValidation {
    /// Whether the pattern was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Rejection reason, if any.
    pub fn error(&self) -> Option<&PatternError> {
        match self {
            Self::Accept => None,
            Self::Reject { error } => Some(error),
        }
    }
}

impl<T> From<Result<T, PatternError>> for PatternValidation {
    fn from(result: Result<T, PatternError>) -> Self {
        match result {
            Ok(_) => Self::Accept,
            Err(error) => Self::Reject { error },
        }
    }
}

/// Check a pattern before it is stored or used.
///
/// Never fails; the outcome is the returned value.
pub fn validate_pattern(pattern: &RecurringPattern) -> PatternValidation {
    let validation = PatternValidation::from(Schedule::parse(pattern));
    if let PatternValidation::Reject { error } = &validation {
        tracing::debug!(frequency = %pattern.frequency, %error, "pattern rejected");
    }
    validation
}

/// Which occurrence within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cadence {
    Weekly,
    Monthly { week: u8 },
}

/// A validated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Schedule {
    pub(crate) cadence: Cadence,
    pub(crate) weekday: Weekday,
    pub(crate) time: NaiveTime,
}

impl Schedule {
    pub(crate) fn parse(pattern: &RecurringPattern) -> Result<Self, PatternError> {
        let monthly = match pattern.frequency.normalized() {
            Frequency::Weekly => false,
            Frequency::Monthly => true,
            Frequency::Unknown(raw) => return Err(PatternError::UnknownFrequency(raw)),
        };

        let weekday = weekday_from_sunday(pattern.day_of_week)
            .ok_or(PatternError::DayOfWeek(pattern.day_of_week))?;

        let cadence = if monthly {
            match pattern.week_of_month {
                None => return Err(PatternError::MissingWeekOfMonth),
                Some(week) if (1..=MAX_WEEK_OF_MONTH).contains(&week) => Cadence::Monthly { week },
                Some(week) => return Err(PatternError::WeekOfMonth(week)),
            }
        } else {
            Cadence::Weekly
        };

        let time = parse_time(&pattern.time)?;

        Ok(Self { cadence, weekday, time })
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, PatternError> {
    let format_error = || PatternError::TimeFormat(raw.to_string());

    let captures = TIME_OF_DAY.captures(raw).ok_or_else(format_error)?;
    let (Some(hour), Some(minute)) = (captures.get(1), captures.get(2)) else {
        return Err(format_error());
    };
    let hour: u32 = hour.as_str().parse().map_err(|_| format_error())?;
    let minute: u32 = minute.as_str().parse().map_err(|_| format_error())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| PatternError::TimeRange(raw.to_string()))
}
