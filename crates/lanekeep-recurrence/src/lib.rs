//! Lanekeep Recurrence Engine
//!
//! Weekly and "Nth weekday of the month" schedules for league nights and
//! recurring tournaments. A [`RecurringPattern`] is plain data as a form or
//! storage layer hands it over; the engine validates it, computes concrete
//! occurrences, and renders it as text.
//!
//! # Reference Time
//!
//! Every occurrence is computed from an explicit reference timestamp. The
//! engine never reads the clock, so results depend only on their inputs.
//!
//! ```text
//! weekly   reference ──► +1 day, midnight ──► step to weekday ──► set time
//! monthly  reference ──► 1st of next month ──► step to weekday ──► +7 × (week-1)
//! ```
//!
//! # Fifth Week
//!
//! Not every month has a fifth Wednesday. [`FifthWeekPolicy`] in
//! [`RecurrenceConfig`] decides what a fifth-week pattern means in those
//! months; the default skips ahead to the next month that has one.
//!
//! # Validation
//!
//! [`validate_pattern`] returns a [`PatternValidation`] value and never
//! fails. Occurrence functions run the same checks first and return
//! [`RecurrenceError::InvalidPattern`] instead of searching with bad input.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod format;
mod occurrence;
mod pattern;
mod validator;

pub use config::{FifthWeekPolicy, RecurrenceConfig};
pub use error::{PatternError, RecurrenceError};
pub use format::{Locale, format_pattern};
pub use occurrence::{MAX_UPCOMING, date_in_month, next_occurrence, upcoming};
pub use pattern::{Frequency, RecurringPattern};
pub use validator::{PatternValidation, validate_pattern};
