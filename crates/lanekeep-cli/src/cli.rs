//! Command-line arguments.

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lanekeep_recurrence::{
    FifthWeekPolicy, Frequency, Locale, MAX_UPCOMING, RecurrenceConfig, RecurringPattern,
};

/// Bowling score and league schedule tool
#[derive(Parser, Debug)]
#[command(name = "lanekeep")]
#[command(about = "Score bowling games and compute league night dates")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// `lanekeep` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lay throws into frames in bowling order and print the scoreboard
    Score {
        /// Pins knocked down per delivery, in order
        throws: Vec<u8>,

        /// Print the scored frames as JSON instead of a scoreboard
        #[arg(long)]
        json: bool,
    },

    /// Summarise a player's finished game totals
    Stats {
        /// One total per game
        #[arg(required = true)]
        totals: Vec<u16>,
    },

    /// Print the next occurrences of a recurring pattern
    Next {
        /// Pattern fields
        #[command(flatten)]
        pattern: PatternArgs,

        /// Reference time (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or with seconds);
        /// defaults to now
        #[arg(long, value_parser = parse_reference)]
        from: Option<NaiveDateTime>,

        /// Number of occurrences, at most 1000
        #[arg(
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u16).range(1..=MAX_UPCOMING as i64),
        )]
        count: u16,

        /// Meaning of week 5 in months with only four of the weekday
        #[arg(long, value_enum, default_value_t = FifthWeekArg::Skip)]
        fifth_week: FifthWeekArg,
    },

    /// Describe a recurring pattern in words
    Format {
        /// Pattern fields
        #[command(flatten)]
        pattern: PatternArgs,

        /// Display language
        #[arg(long, value_enum, default_value_t = LocaleArg::En)]
        labels: LocaleArg,
    },
}

/// Recurring pattern fields as flags.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PatternArgs {
    /// `weekly` or `monthly`
    #[arg(long)]
    pub frequency: String,

    /// Day of week, 0 = Sunday through 6 = Saturday
    #[arg(long)]
    pub day: u8,

    /// Week of month, 1-5 (monthly only)
    #[arg(long)]
    pub week: Option<u8>,

    /// Time of day, `HH:mm`
    #[arg(long)]
    pub time: String,
}

impl PatternArgs {
    /// Pattern as the engine sees it.
    pub fn to_pattern(&self) -> RecurringPattern {
        RecurringPattern {
            frequency: Frequency::from(self.frequency.as_str()),
            day_of_week: self.day,
            week_of_month: self.week,
            time: self.time.clone(),
        }
    }
}

/// `--fifth-week` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FifthWeekArg {
    /// Let the date run into the following month
    Rollover,
    /// Use the month's last occurrence instead
    Clamp,
    /// Move on to the next month with a fifth occurrence
    Skip,
}

impl From<FifthWeekArg> for RecurrenceConfig {
    fn from(arg: FifthWeekArg) -> Self {
        let policy = match arg {
            FifthWeekArg::Rollover => FifthWeekPolicy::Rollover,
            FifthWeekArg::Clamp => FifthWeekPolicy::ClampToLast,
            FifthWeekArg::Skip => FifthWeekPolicy::SkipMonth,
        };
        Self::with_fifth_week(policy)
    }
}

/// `--labels` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleArg {
    /// English
    En,
    /// Japanese
    Ja,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Self::English,
            LocaleArg::Ja => Self::Japanese,
        }
    }
}

fn parse_reference(raw: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_next_with_defaults() {
        let cli = Cli::try_parse_from([
            "lanekeep", "next", "--frequency", "monthly", "--day", "3", "--week", "3", "--time",
            "19:00", "--from", "2025-01-01T12:00",
        ])
        .expect("arguments parse");

        let Command::Next { pattern, from, count, fifth_week } = cli.command else {
            panic!("expected next, got {:?}", cli.command);
        };
        assert_eq!(pattern.to_pattern(), RecurringPattern::monthly(3, 3, "19:00"));
        assert_eq!(from, Some(parse_reference("2025-01-01T12:00:00").expect("timestamp")));
        assert_eq!(count, 1);
        assert_eq!(fifth_week, FifthWeekArg::Skip);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn count_is_bounded() {
        let parse = |count: &str| {
            Cli::try_parse_from([
                "lanekeep", "next", "--frequency", "weekly", "--day", "1", "--time", "09:00",
                "--count", count,
            ])
        };

        assert!(parse("1000").is_ok());
        assert!(parse("1001").is_err());
        assert!(parse("0").is_err());
        assert!(parse("18446744073709551615").is_err());
    }

    #[test]
    fn reference_formats() {
        let midnight = parse_reference("2025-01-15").expect("date only");
        let minutes = parse_reference("2025-01-15T00:00").expect("minutes");

        assert_eq!(midnight, minutes);
        assert!(parse_reference("15/01/2025").is_err());
    }

    #[test]
    fn score_rejects_negative_pins() {
        assert!(Cli::try_parse_from(["lanekeep", "score", "3", "-1"]).is_err());
    }
}
