//! Invariant checking for scored games.
//!
//! Invariants are properties that must hold for any scored frame list, no
//! matter which throws were entered or in what order they were edited.
//! Example-based tests pin down individual games; invariants cover every game
//! a generator or fuzzer can reach.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let card = GameGenerator::new(seed).legal_game();
//! registry.check_all(card.frames())?;
//! ```

mod checks;

use std::fmt;

pub use checks::{
    CumulativeMonotonicity, DerivedFlagsMatchThrows, FinalFrameIsTotal, FrameNumbering,
    ScoreBounds,
};
use lanekeep_score::{FRAME_COUNT, Frame};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Which invariant a [`Violation`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// See [`CumulativeMonotonicity`].
    CumulativeMonotonicity,
    /// See [`FinalFrameIsTotal`].
    FinalFrameIsTotal,
    /// See [`FrameNumbering`].
    FrameNumbering,
    /// See [`DerivedFlagsMatchThrows`].
    DerivedFlagsMatchThrows,
    /// See [`ScoreBounds`].
    ScoreBounds,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CumulativeMonotonicity => "cumulative_monotonicity",
            Self::FinalFrameIsTotal => "final_frame_is_total",
            Self::FrameNumbering => "frame_numbering",
            Self::DerivedFlagsMatchThrows => "derived_flags_match_throws",
            Self::ScoreBounds => "score_bounds",
        };
        f.write_str(name)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Which invariant failed.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A property checked against a scored frame list.
pub trait Invariant: Send + Sync {
    /// Invariant identity for error reporting.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against scored frames.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing the first frame where it does not.
    fn check(&self, frames: &[Frame; FRAME_COUNT]) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Invariants every scored frame list satisfies, complete or not.
    ///
    /// Includes:
    /// - [`FrameNumbering`]: frames are numbered 1..=10 in order
    /// - [`DerivedFlagsMatchThrows`]: strike/spare flags follow the raw throws
    /// - [`CumulativeMonotonicity`]: running totals add each frame score
    /// - [`FinalFrameIsTotal`]: frame 10 carries the sum of all frame scores
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(FrameNumbering);
        registry.add(DerivedFlagsMatchThrows);
        registry.add(CumulativeMonotonicity);
        registry.add(FinalFrameIsTotal);
        registry
    }

    /// [`Self::standard`] plus [`ScoreBounds`], which only holds for legal,
    /// finished games.
    pub fn complete_game() -> Self {
        let mut registry = Self::standard();
        registry.add(ScoreBounds);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given frames.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, frames: &[Frame; FRAME_COUNT]) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(frames).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation found.
    #[allow(clippy::panic, reason = "assertion helper for tests and fuzz targets")]
    pub fn assert_all(&self, frames: &[Frame; FRAME_COUNT], context: &str) {
        if let Err(violations) = self.check_all(frames) {
            let messages: Vec<_> = violations.iter().map(|v| v.to_string()).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
