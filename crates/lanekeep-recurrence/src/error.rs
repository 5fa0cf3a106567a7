//! Error types for the recurrence engine.
//!
//! [`PatternError`] is the reason carried by a rejected
//! [`crate::PatternValidation`]. [`RecurrenceError`] is returned when an
//! occurrence cannot be computed.

use chrono::NaiveDate;
use thiserror::Error;

/// Why a pattern is not usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Frequency is neither weekly nor monthly
    #[error("frequency must be weekly or monthly, got {0:?}")]
    UnknownFrequency(String),

    /// Day of week outside 0..=6
    #[error("day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    DayOfWeek(u8),

    /// Monthly pattern without a week of month
    #[error("monthly patterns need a week of month")]
    MissingWeekOfMonth,

    /// Week of month outside 1..=5
    #[error("week of month must be between 1 and 5, got {0}")]
    WeekOfMonth(u8),

    /// Time is not two digits, a colon, two digits
    #[error("time must be in HH:mm form, got {0:?}")]
    TimeFormat(String),

    /// Hour above 23 or minute above 59
    #[error("time must be between 00:00 and 23:59, got {0:?}")]
    TimeRange(String),
}

/// Errors from occurrence computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    /// Pattern failed validation
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    /// Day-by-day search ran past its bound without meeting the weekday
    #[error("no matching weekday within {steps} days of {from}")]
    NoMatchingWeekday {
        /// First day searched
        from: NaiveDate,
        /// Days stepped before giving up
        steps: u32,
    },

    /// No month with a fifth occurrence was found while skipping ahead
    #[error("no month with a fifth occurrence within {months} months of {from}")]
    NoFifthWeek {
        /// First month searched
        from: NaiveDate,
        /// Months searched
        months: u32,
    },

    /// Date arithmetic left chrono's supported range
    #[error("occurrence falls outside the supported calendar range")]
    DateOutOfRange,

    /// More occurrences were requested than one call will compute
    #[error("requested {requested} occurrences, at most {max} are computed at once")]
    TooManyOccurrences {
        /// Occurrences asked for
        requested: usize,
        /// Per-call limit
        max: usize,
    },
}
