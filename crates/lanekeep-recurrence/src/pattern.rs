//! Recurring pattern descriptor.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// How often a pattern repeats.
///
/// Stored as a lowercase string. Values the engine does not recognise are
/// kept verbatim in [`Frequency::Unknown`] so they survive a round trip and
/// can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    /// Every week on one weekday
    Weekly,
    /// Once a month on the Nth given weekday
    Monthly,
    /// Anything else
    ///
    /// Built by hand this can hold `"weekly"` or `"monthly"`, which is stored
    /// as that name and read back as the known variant. Validation and
    /// formatting see such a value through [`Frequency::normalized`].
    Unknown(String),
}

impl Frequency {
    /// Stored form of the frequency.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Unknown(raw) => raw,
        }
    }

    /// The value this frequency reads back as after being stored.
    ///
    /// `Unknown("weekly")` becomes `Weekly`; every other value is unchanged.
    pub fn normalized(&self) -> Self {
        Self::from(self.as_str())
    }
}

impl From<String> for Frequency {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<&str> for Frequency {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A repeating weekly or monthly schedule.
///
/// Field names follow the storage layer (`dayOfWeek`, `weekOfMonth`). Values
/// are not checked on construction; see [`crate::validate_pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringPattern {
    /// Weekly or monthly
    pub frequency: Frequency,
    /// 0 = Sunday through 6 = Saturday
    pub day_of_week: u8,
    /// 1..=5, required for monthly patterns and ignored for weekly ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<u8>,
    /// Time of day as `HH:mm`, 24-hour
    pub time: String,
}

impl RecurringPattern {
    /// Weekly pattern.
    pub fn weekly(day_of_week: u8, time: impl Into<String>) -> Self {
        Self { frequency: Frequency::Weekly, day_of_week, week_of_month: None, time: time.into() }
    }

    /// Monthly pattern on the `week_of_month`-th `day_of_week`.
    pub fn monthly(day_of_week: u8, week_of_month: u8, time: impl Into<String>) -> Self {
        Self {
            frequency: Frequency::Monthly,
            day_of_week,
            week_of_month: Some(week_of_month),
            time: time.into(),
        }
    }
}

/// Weekday for a Sunday-based day number, `None` outside 0..=6.
pub(crate) fn weekday_from_sunday(day_of_week: u8) -> Option<Weekday> {
    match day_of_week {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_is_day_zero() {
        for day in 0..=6u8 {
            let weekday = weekday_from_sunday(day).expect("day in range");
            assert_eq!(weekday.num_days_from_sunday(), u32::from(day));
        }
        assert_eq!(weekday_from_sunday(7), None);
    }

    #[test]
    fn unknown_frequency_survives_round_trip() {
        let json = r#"{"frequency":"yearly","dayOfWeek":3,"time":"19:00"}"#;

        let pattern: RecurringPattern = serde_json::from_str(json).expect("pattern parses");

        assert_eq!(pattern.frequency, Frequency::Unknown("yearly".to_string()));
        assert_eq!(pattern.week_of_month, None);
        assert_eq!(serde_json::to_string(&pattern).expect("pattern serializes"), json);
    }

    #[test]
    fn monthly_pattern_uses_stored_field_names() {
        let pattern = RecurringPattern::monthly(3, 3, "19:00");

        let json = serde_json::to_string(&pattern).expect("pattern serializes");

        assert_eq!(json, r#"{"frequency":"monthly","dayOfWeek":3,"weekOfMonth":3,"time":"19:00"}"#);
    }

    #[test]
    fn hand_built_known_name_reads_back_as_known() {
        let frequency = Frequency::Unknown("weekly".to_string());

        let json = serde_json::to_string(&frequency).expect("frequency serializes");
        let read: Frequency = serde_json::from_str(&json).expect("frequency parses");

        assert_eq!(read, Frequency::Weekly);
        assert_eq!(frequency.normalized(), read);
        assert_eq!(Frequency::from("daily").normalized(), Frequency::from("daily"));
    }
}
