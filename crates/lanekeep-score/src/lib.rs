//! Lanekeep Frame Scorer
//!
//! Pure, deterministic scoring for a ten-frame bowling game. Callers hand in
//! raw throw values; the scorer derives strike/spare flags, per-frame scores
//! with bonuses, and the running total. Nothing here performs I/O.
//!
//! # Scoring Order
//!
//! Bonuses are taken from the next deliveries in bowling order, not from the
//! next frame's boxes. A strike followed by a strike borrows from the frame
//! after next. Frame 10 never looks ahead.
//!
//! ```text
//! frame:    1     2     3         10
//! throws:  [X]  [X]  [7 2]  ...  [X X X]
//!           │    │    │
//!           └─10─┴──7─┘   frame 1 = 10 + 10 + 7 = 27
//!                └─10─┴─7─┴─2     frame 2 = 10 + 7 + 2 = 19
//! ```
//!
//! # Entry Flow
//!
//! Throw entry is a pure reducer: [`apply_throw`] returns a new [`Frame`]
//! with later throws cleared, then [`score_sequence`] recomputes every
//! derived field. [`Scorecard::with_throw`] composes the two.
//!
//! # Validation
//!
//! Legality checks never fail the caller. [`validate_frame`] returns a
//! [`FrameValidation`] carrying a typed [`ThrowError`] whose `Display` is the
//! human-readable reason.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod entry;
mod error;
mod frame;
mod marks;
mod scorecard;
mod scorer;
mod stats;
mod validator;

pub use entry::{apply_throw, max_pins, slot_open};
pub use error::{ScoreError, ThrowError};
pub use frame::{FRAME_COUNT, Frame, LAST_FRAME, PERFECT_SCORE, PIN_COUNT, ThrowSlot};
pub use marks::{Mark, frame_marks, scoreboard_lines, throw_mark};
pub use scorecard::Scorecard;
pub use scorer::{frame_base_score, is_spare, is_strike, score_sequence};
pub use stats::PlayerStats;
pub use validator::{FrameIssue, FrameValidation, is_game_complete, validate_all, validate_frame};
