//! Human-readable pattern descriptions.
//!
//! Display only: formatting never validates and never fails. A pattern the
//! formatter cannot describe renders as the locale's unknown-pattern text.

use serde::{Deserialize, Serialize};

use crate::{
    error::PatternError,
    pattern::{Frequency, RecurringPattern},
    validator::MAX_WEEK_OF_MONTH,
};

const ENGLISH_WEEKDAYS: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

const ENGLISH_ORDINALS: [&str; MAX_WEEK_OF_MONTH as usize] =
    ["first", "second", "third", "fourth", "fifth"];

const JAPANESE_WEEKDAYS: [&str; 7] =
    ["日曜日", "月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日"];

/// Display language for pattern text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// `every Wednesday 19:00`
    #[default]
    English,
    /// `毎週水曜日 19:00`
    Japanese,
}

impl Locale {
    /// Text shown for patterns that cannot be described.
    pub fn unknown_pattern(self) -> &'static str {
        match self {
            Self::English => "unknown pattern",
            Self::Japanese => "不明なパターン",
        }
    }

    /// Short form-field prompt for a validation failure.
    ///
    /// English reuses the error's own message, which names the bad value.
    pub fn reason(self, error: &PatternError) -> String {
        match self {
            Self::English => error.to_string(),
            Self::Japanese => match error {
                PatternError::UnknownFrequency(_) => "頻度を選択してください",
                PatternError::DayOfWeek(_) => "曜日を選択してください",
                PatternError::MissingWeekOfMonth | PatternError::WeekOfMonth(_) => {
                    "週を選択してください（第1〜5週）"
                },
                PatternError::TimeFormat(_) => "時刻を正しい形式で入力してください（例: 19:00）",
                PatternError::TimeRange(_) => "時刻は00:00〜23:59の範囲で入力してください",
            }
            .to_string(),
        }
    }

    fn weekday(self, day_of_week: u8) -> Option<&'static str> {
        let names = match self {
            Self::English => &ENGLISH_WEEKDAYS,
            Self::Japanese => &JAPANESE_WEEKDAYS,
        };
        names.get(usize::from(day_of_week)).copied()
    }
}

/// Describe a pattern in the given locale.
///
/// The time string is shown as stored.
pub fn format_pattern(pattern: &RecurringPattern, locale: Locale) -> String {
    describe(pattern, locale).unwrap_or_else(|| locale.unknown_pattern().to_string())
}

fn describe(pattern: &RecurringPattern, locale: Locale) -> Option<String> {
    let day = locale.weekday(pattern.day_of_week)?;
    let time = &pattern.time;

    match (pattern.frequency.normalized(), locale) {
        (Frequency::Weekly, Locale::English) => Some(format!("every {day} {time}")),
        (Frequency::Weekly, Locale::Japanese) => Some(format!("毎週{day} {time}")),
        (Frequency::Monthly, _) => {
            let week = pattern.week_of_month.filter(|w| (1..=MAX_WEEK_OF_MONTH).contains(w))?;
            Some(match locale {
                Locale::English => {
                    let ordinal = ENGLISH_ORDINALS[usize::from(week) - 1];
                    format!("{ordinal} {day} of every month, {time}")
                },
                Locale::Japanese => format!("毎月第{week}週{day} {time}"),
            })
        },
        (Frequency::Unknown(_), _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_in_both_locales() {
        let pattern = RecurringPattern::weekly(3, "19:00");

        assert_eq!(format_pattern(&pattern, Locale::English), "every Wednesday 19:00");
        assert_eq!(format_pattern(&pattern, Locale::Japanese), "毎週水曜日 19:00");
    }

    #[test]
    fn monthly_in_both_locales() {
        let pattern = RecurringPattern::monthly(3, 3, "19:00");

        assert_eq!(
            format_pattern(&pattern, Locale::English),
            "third Wednesday of every month, 19:00"
        );
        assert_eq!(format_pattern(&pattern, Locale::Japanese), "毎月第3週水曜日 19:00");
    }

    #[test]
    fn hand_built_known_name_formats_as_known() {
        let mut pattern = RecurringPattern::monthly(3, 3, "19:00");
        pattern.frequency = Frequency::Unknown("monthly".to_string());

        assert_eq!(format_pattern(&pattern, Locale::Japanese), "毎月第3週水曜日 19:00");
    }

    #[test]
    fn undescribable_patterns_use_fixed_text() {
        let mut no_week = RecurringPattern::monthly(3, 3, "19:00");
        no_week.week_of_month = None;
        let unknown = RecurringPattern {
            frequency: Frequency::from("daily"),
            ..RecurringPattern::weekly(1, "10:00")
        };

        for pattern in [no_week, unknown, RecurringPattern::weekly(7, "10:00")] {
            assert_eq!(format_pattern(&pattern, Locale::English), "unknown pattern");
            assert_eq!(format_pattern(&pattern, Locale::Japanese), "不明なパターン");
        }
    }

    #[test]
    fn formatting_does_not_validate_time() {
        let pattern = RecurringPattern::weekly(0, "9:00");

        assert_eq!(format_pattern(&pattern, Locale::English), "every Sunday 9:00");
    }

    #[test]
    fn reasons_per_locale() {
        let error = PatternError::MissingWeekOfMonth;

        assert_eq!(Locale::English.reason(&error), "monthly patterns need a week of month");
        assert_eq!(Locale::Japanese.reason(&error), "週を選択してください（第1〜5週）");
    }
}
