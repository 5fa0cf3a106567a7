//! Throw legality checks.
//!
//! Frames 1-9 and frame 10 follow different rule sets. Validation failures
//! are returned as [`FrameValidation::Reject`], never as errors, so a form
//! can show the reason next to the offending box.

use std::fmt;

use crate::{
    error::ThrowError,
    frame::{FRAME_COUNT, Frame, LAST_FRAME, PIN_COUNT, ThrowSlot},
};

/// Result of validating one frame's throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameValidation {
    /// Every throw the rules require is present and legal
    Accept,

    /// Frame is incomplete or illegal
    Reject {
        /// Why the frame was rejected
        error: ThrowError,
    },
}

impl FrameValidation {
    /// Whether the frame was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Rejection reason, if any.
    pub fn error(&self) -> Option<ThrowError> {
        match self {
            Self::Accept => None,
            Self::Reject { error } => Some(*error),
        }
    }
}

impl From<Result<(), ThrowError>> for FrameValidation {
    fn from(result: Result<(), ThrowError>) -> Self {
        match result {
            Ok(()) => Self::Accept,
            Err(error) => Self::Reject { error },
        }
    }
}

/// A rejected frame within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameIssue {
    /// Frame the reason applies to
    pub frame_number: u8,
    /// Why it was rejected
    pub error: ThrowError,
}

impl fmt::Display for FrameIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {}: {}", self.frame_number, self.error)
    }
}

/// Validate one frame's throws against the rules for its position.
///
/// Frames 1-9: the first throw is required. A strike forbids a second throw;
/// otherwise the second throw is required and cannot exceed the pins left.
/// A third throw is never allowed.
///
/// Frame 10: first and second throws are required. A third throw is required
/// after a strike or spare and forbidden on an open frame. Pins are reset
/// after each strike and after the spare.
pub fn validate_frame(
    frame_number: u8,
    first_throw: Option<u8>,
    second_throw: Option<u8>,
    third_throw: Option<u8>,
) -> FrameValidation {
    let result = match frame_number {
        LAST_FRAME => check_last_frame(first_throw, second_throw, third_throw),
        1..LAST_FRAME => check_open_frame(first_throw, second_throw, third_throw),
        _ => Err(ThrowError::InvalidFrameNumber(frame_number)),
    };

    if let Err(error) = &result {
        tracing::debug!(frame = frame_number, %error, "frame rejected");
    }

    result.into()
}

/// Whether every frame passes its own validation with all required throws.
pub fn is_game_complete(frames: &[Frame; FRAME_COUNT]) -> bool {
    frames.iter().all(|frame| validate(frame).is_valid())
}

/// Rejection reasons for every frame that does not validate, in frame order.
pub fn validate_all(frames: &[Frame; FRAME_COUNT]) -> Vec<FrameIssue> {
    frames
        .iter()
        .filter_map(|frame| {
            validate(frame)
                .error()
                .map(|error| FrameIssue { frame_number: frame.frame_number, error })
        })
        .collect()
}

fn validate(frame: &Frame) -> FrameValidation {
    validate_frame(frame.frame_number, frame.first_throw, frame.second_throw, frame.third_throw)
}

fn check_open_frame(
    first_throw: Option<u8>,
    second_throw: Option<u8>,
    third_throw: Option<u8>,
) -> Result<(), ThrowError> {
    let first = required(ThrowSlot::First, first_throw, PIN_COUNT)?;

    if first == PIN_COUNT {
        if second_throw.is_some() {
            return Err(ThrowError::SecondThrowAfterStrike);
        }
    } else {
        required(ThrowSlot::Second, second_throw, PIN_COUNT - first)?;
    }

    if third_throw.is_some() {
        return Err(ThrowError::ThirdThrowOutsideLastFrame);
    }

    Ok(())
}

fn check_last_frame(
    first_throw: Option<u8>,
    second_throw: Option<u8>,
    third_throw: Option<u8>,
) -> Result<(), ThrowError> {
    let first = required(ThrowSlot::First, first_throw, PIN_COUNT)?;

    if first == PIN_COUNT {
        let second = required(ThrowSlot::Second, second_throw, PIN_COUNT)?;
        let third_max = if second == PIN_COUNT { PIN_COUNT } else { PIN_COUNT - second };
        required(ThrowSlot::Third, third_throw, third_max)?;
        return Ok(());
    }

    let second = required(ThrowSlot::Second, second_throw, PIN_COUNT - first)?;

    if first + second == PIN_COUNT {
        required(ThrowSlot::Third, third_throw, PIN_COUNT)?;
    } else if third_throw.is_some() {
        return Err(ThrowError::ThirdThrowOnOpenFrame);
    }

    Ok(())
}

/// A throw that must be present and at most `max`.
fn required(slot: ThrowSlot, value: Option<u8>, max: u8) -> Result<u8, ThrowError> {
    let value = value.ok_or(ThrowError::Missing { slot })?;
    if value > max {
        return Err(ThrowError::OutOfRange { slot, value, max });
    }
    Ok(value)
}
