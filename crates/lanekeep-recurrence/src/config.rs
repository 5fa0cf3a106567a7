//! Occurrence computation settings.

use serde::{Deserialize, Serialize};

/// What a fifth-week monthly pattern means in a month with only four of
/// that weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FifthWeekPolicy {
    /// Add four weeks to the first occurrence regardless. The date lands in
    /// the following month.
    Rollover,
    /// Use the last occurrence of the weekday in the target month.
    ClampToLast,
    /// Move on to the next month that has a fifth occurrence.
    #[default]
    SkipMonth,
}

/// Settings for [`crate::next_occurrence`] and [`crate::upcoming`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurrenceConfig {
    /// Fifth-week handling for monthly patterns
    pub fifth_week: FifthWeekPolicy,
}

impl RecurrenceConfig {
    /// Config with the given fifth-week policy.
    pub fn with_fifth_week(fifth_week: FifthWeekPolicy) -> Self {
        Self { fifth_week }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_skipping_short_months() {
        assert_eq!(RecurrenceConfig::default().fifth_week, FifthWeekPolicy::SkipMonth);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: RecurrenceConfig = serde_json::from_str("{}").expect("empty config parses");
        assert_eq!(config, RecurrenceConfig::default());

        let config: RecurrenceConfig =
            serde_json::from_str(r#"{"fifthWeek":"clampToLast"}"#).expect("config parses");
        assert_eq!(config.fifth_week, FifthWeekPolicy::ClampToLast);
    }
}
