//! Lanekeep command-line driver.
//!
//! Thin glue between command-line input and the two engines. Parsing lives in
//! [`Cli`]; [`run`] executes a [`Command`] against any writer so commands can
//! be tested without a terminal. The binary installs the log subscriber and
//! supplies the current local time when `--from` is omitted.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cli;
mod error;

use std::io::Write;

use chrono::NaiveDateTime;
pub use cli::{Cli, Command, FifthWeekArg, LocaleArg, PatternArgs};
pub use error::CliError;
use lanekeep_recurrence::{
    Locale, PatternValidation, RecurrenceConfig, format_pattern, upcoming, validate_pattern,
};
use lanekeep_score::{PlayerStats, Scorecard, ThrowError, scoreboard_lines};

/// Execute one command, writing its output to `out`.
///
/// `now` is the reference for `next` when no `--from` was given.
pub fn run(command: &Command, now: NaiveDateTime, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Score { throws, json } => score(throws, *json, out),
        Command::Stats { totals } => {
            let stats = PlayerStats::from_totals(totals);
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            Ok(())
        },
        Command::Next { pattern, from, count, fifth_week } => {
            let reference = from.unwrap_or(now);
            let config = RecurrenceConfig::from(*fifth_week);
            let count = usize::from(*count);
            let occurrences = upcoming(&pattern.to_pattern(), reference, count, &config)?;
            for occurrence in occurrences {
                writeln!(out, "{}", occurrence.format("%Y-%m-%d %H:%M (%A)"))?;
            }
            Ok(())
        },
        Command::Format { pattern, labels } => {
            let pattern = pattern.to_pattern();
            let locale = Locale::from(*labels);
            writeln!(out, "{}", format_pattern(&pattern, locale))?;

            // The text is still printed so the fallback label is visible.
            match validate_pattern(&pattern) {
                PatternValidation::Accept => Ok(()),
                PatternValidation::Reject { error } => {
                    tracing::warn!(reason = %locale.reason(&error), "formatted an invalid pattern");
                    Err(CliError::Pattern(error))
                },
            }
        },
    }
}

fn score(throws: &[u8], json: bool, out: &mut impl Write) -> Result<(), CliError> {
    let card = Scorecard::from_throws(throws)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(card.frames())?)?;
    } else {
        let (marks, totals) = scoreboard_lines(&card);
        writeln!(out, "{marks}")?;
        writeln!(out, "{totals}")?;
        let state = if card.is_complete() { "complete" } else { "in progress" };
        writeln!(out, "total: {} ({state})", card.total())?;
    }

    // Missing throws only mean the game is unfinished.
    let illegal: Vec<_> = card
        .issues()
        .into_iter()
        .filter(|issue| !matches!(issue.error, ThrowError::Missing { .. }))
        .collect();
    for issue in &illegal {
        tracing::error!(%issue, "illegal throw");
    }
    if illegal.is_empty() { Ok(()) } else { Err(CliError::IllegalThrows { count: illegal.len() }) }
}
