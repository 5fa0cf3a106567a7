//! Deterministic test harness for the lanekeep frame scorer.
//!
//! # Game Generation
//!
//! [`GameGenerator`] produces legal games from a seed. The same seed always
//! produces the same sequence of games, so failures found in a long run can
//! be replayed exactly.
//!
//! # Edit Scripts
//!
//! [`EditScript`] is a list of throw edits that fuzzers and property tests
//! replay against a [`lanekeep_score::Scorecard`]. The result is compared
//! with scoring the final raw throws from scratch.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks behavioral properties of scored frames.
//! Use [`InvariantRegistry::standard()`] for the properties every scored game
//! must satisfy, and [`InvariantRegistry::complete_game()`] to add the bounds
//! that only hold once a game is finished.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generator;
pub mod invariants;
pub mod script;

pub use generator::GameGenerator;
pub use invariants::{
    CumulativeMonotonicity, DerivedFlagsMatchThrows, FinalFrameIsTotal, FrameNumbering,
    Invariant, InvariantKind, InvariantRegistry, InvariantResult, ScoreBounds, Violation,
};
pub use script::{EditScript, ThrowEdit};
