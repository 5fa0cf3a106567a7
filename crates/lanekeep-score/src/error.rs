//! Error types for the frame scorer.
//!
//! [`ThrowError`] is the reason carried by a rejected
//! [`crate::FrameValidation`]; it is a value, never raised. [`ScoreError`] is
//! returned by the few operations that can refuse their input outright, such
//! as building a [`crate::Scorecard`] from the wrong number of frames.

use thiserror::Error;

use crate::frame::ThrowSlot;

/// Why a frame's throws are not a legal, complete frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowError {
    /// Frame number is not in 1..=10
    #[error("frame number must be between 1 and 10, got {0}")]
    InvalidFrameNumber(u8),

    /// A throw the rules require has not been entered
    #[error("enter the {slot} throw")]
    Missing {
        /// Slot that is empty
        slot: ThrowSlot,
    },

    /// A throw exceeds the pins left standing
    #[error("{slot} throw must be between 0 and {max}, got {value}")]
    OutOfRange {
        /// Slot holding the bad value
        slot: ThrowSlot,
        /// Value entered
        value: u8,
        /// Largest legal value for the slot
        max: u8,
    },

    /// Second throw entered after a strike in frames 1-9
    #[error("no second throw is allowed after a strike")]
    SecondThrowAfterStrike,

    /// Third throw entered outside frame 10
    #[error("a third throw is only allowed in frame 10")]
    ThirdThrowOutsideLastFrame,

    /// Third throw entered on an open tenth frame
    #[error("a third throw is only allowed after a strike or spare in frame 10")]
    ThirdThrowOnOpenFrame,
}

impl ThrowError {
    /// Slot the caller should highlight, if the error points at one.
    pub fn slot(&self) -> Option<ThrowSlot> {
        match self {
            Self::Missing { slot } | Self::OutOfRange { slot, .. } => Some(*slot),
            Self::SecondThrowAfterStrike => Some(ThrowSlot::Second),
            Self::ThirdThrowOutsideLastFrame | Self::ThirdThrowOnOpenFrame => {
                Some(ThrowSlot::Third)
            },
            Self::InvalidFrameNumber(_) => None,
        }
    }
}

/// Errors from scorecard construction and lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Wrong number of frames supplied
    #[error("a game has exactly {expected} frames, got {actual}")]
    FrameCount {
        /// Frames required
        expected: usize,
        /// Frames supplied
        actual: usize,
    },

    /// Frames are not numbered 1..=10 in order
    #[error("frame at position {position} has number {frame_number}")]
    FrameOrder {
        /// Zero-based position in the supplied list
        position: usize,
        /// Frame number found there
        frame_number: u8,
    },

    /// Frame number outside 1..=10
    #[error("no frame numbered {0}")]
    NoSuchFrame(u8),

    /// More throws than a game can hold
    #[error("{extra} throws left over after frame 10")]
    TooManyThrows {
        /// Throws that did not fit
        extra: usize,
    },
}
