//! CLI error types.

use std::io;

use lanekeep_recurrence::{PatternError, RecurrenceError};
use lanekeep_score::ScoreError;
use thiserror::Error;

/// Errors that end a `lanekeep` command with a non-zero exit status.
#[derive(Error, Debug)]
pub enum CliError {
    /// Throws could not be laid into a game
    #[error("score error: {0}")]
    Score(#[from] ScoreError),

    /// Throws fit a game but some are illegal
    #[error("{count} frame(s) hold illegal throws")]
    IllegalThrows {
        /// Frames rejected for something other than a missing throw
        count: usize,
    },

    /// Pattern failed validation
    #[error("invalid pattern: {0}")]
    Pattern(PatternError),

    /// Occurrence could not be computed
    #[error("recurrence error: {0}")]
    Recurrence(#[from] RecurrenceError),

    /// JSON encoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}
