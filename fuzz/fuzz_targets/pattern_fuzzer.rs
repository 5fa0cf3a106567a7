//! Fuzz target for recurrence patterns
//!
//! # Strategy
//!
//! - Frequency: weekly, monthly, or an arbitrary string
//! - Day of week and week of month: full `u8` range
//! - Time: arbitrary string
//! - Reference: any day in a wide range of years
//!
//! # Invariants
//!
//! - Validation and formatting NEVER panic
//! - Occurrences are computed exactly when validation accepts
//! - An occurrence is always strictly after its reference
//! - An occurrence always falls on the requested weekday

#![no_main]

use arbitrary::Arbitrary;
use chrono::{Datelike, Days, NaiveDate};
use lanekeep_recurrence::{
    FifthWeekPolicy, Frequency, Locale, RecurrenceConfig, RecurringPattern, format_pattern,
    next_occurrence, validate_pattern,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FrequencyChoice {
    Weekly,
    Monthly,
    Other(String),
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum PolicyChoice {
    Rollover,
    ClampToLast,
    SkipMonth,
}

#[derive(Debug, Clone, Arbitrary)]
struct PatternInput {
    frequency: FrequencyChoice,
    day_of_week: u8,
    week_of_month: Option<u8>,
    time: String,
    reference_days: u32,
    reference_minutes: u16,
    policy: PolicyChoice,
}

fuzz_target!(|input: PatternInput| {
    let frequency = match input.frequency {
        FrequencyChoice::Weekly => Frequency::Weekly,
        FrequencyChoice::Monthly => Frequency::Monthly,
        FrequencyChoice::Other(raw) => Frequency::from(raw),
    };
    let pattern = RecurringPattern {
        frequency,
        day_of_week: input.day_of_week,
        week_of_month: input.week_of_month,
        time: input.time,
    };
    let policy = match input.policy {
        PolicyChoice::Rollover => FifthWeekPolicy::Rollover,
        PolicyChoice::ClampToLast => FifthWeekPolicy::ClampToLast,
        PolicyChoice::SkipMonth => FifthWeekPolicy::SkipMonth,
    };

    let _ = format_pattern(&pattern, Locale::English);
    let _ = format_pattern(&pattern, Locale::Japanese);

    let Some(reference) = NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|d| d.checked_add_days(Days::new(u64::from(input.reference_days % 73_000))))
        .and_then(|d| {
            let minutes = u32::from(input.reference_minutes % 1_440);
            d.and_hms_opt(minutes / 60, minutes % 60, 0)
        })
    else {
        return;
    };

    let valid = validate_pattern(&pattern).is_valid();
    let result = next_occurrence(&pattern, reference, &RecurrenceConfig::with_fifth_week(policy));

    assert_eq!(valid, result.is_ok(), "validator and occurrence disagree: {result:?}");
    if let Ok(next) = result {
        assert!(next > reference, "occurrence {next} not after {reference}");
        assert_eq!(next.weekday().num_days_from_sunday(), u32::from(pattern.day_of_week));
    }
});
