//! A complete ten-frame game.
//!
//! [`Scorecard`] owns exactly ten frames numbered 1 through 10 and keeps
//! their derived fields in sync with the raw throws. Every edit returns a new
//! scorecard; nothing is changed in place.

use serde::{Deserialize, Serialize};

use crate::{
    entry::apply_throw,
    error::ScoreError,
    frame::{FRAME_COUNT, Frame, LAST_FRAME, PERFECT_SCORE, PIN_COUNT, ThrowSlot},
    scorer::{is_spare, is_strike, score_sequence},
    validator::{FrameIssue, is_game_complete, validate_all},
};

/// Ten scored frames in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Frame>", into = "Vec<Frame>")]
pub struct Scorecard {
    frames: [Frame; FRAME_COUNT],
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorecard {
    /// A fresh game: no throws, zero scores, no flags.
    pub fn new() -> Self {
        Self { frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)) }
    }

    /// Build a scorecard from frames supplied by a collaborator.
    ///
    /// The list must hold exactly ten frames numbered 1..=10 in order. Derived
    /// fields on the input are discarded and recomputed.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self, ScoreError> {
        if let Some((position, frame)) =
            frames.iter().enumerate().find(|(i, frame)| usize::from(frame.frame_number) != i + 1)
        {
            return Err(ScoreError::FrameOrder { position, frame_number: frame.frame_number });
        }

        let actual = frames.len();
        let frames: [Frame; FRAME_COUNT] = frames
            .try_into()
            .map_err(|_| ScoreError::FrameCount { expected: FRAME_COUNT, actual })?;

        Ok(Self { frames: score_sequence(&frames) })
    }

    /// Lay a flat list of pin counts into frames in delivery order.
    ///
    /// A strike in frames 1-9 closes the frame after one throw. Frame 10 takes
    /// a third throw only after a strike or spare. Legality of the values is
    /// not checked here; use [`Self::issues`] for that.
    pub fn from_throws(throws: &[u8]) -> Result<Self, ScoreError> {
        let mut frames: [Frame; FRAME_COUNT] = std::array::from_fn(|i| Frame::new(i as u8 + 1));
        let mut rest = throws.iter().copied();

        for frame in frames.iter_mut().take(FRAME_COUNT - 1) {
            let Some(first) = rest.next() else { break };
            frame.first_throw = Some(first);
            if first != PIN_COUNT {
                frame.second_throw = rest.next();
            }
        }

        let last = &mut frames[FRAME_COUNT - 1];
        last.first_throw = rest.next();
        last.second_throw = last.first_throw.and_then(|_| rest.next());
        let bonus_earned = last.second_throw.is_some()
            && (is_strike(last.first_throw) || is_spare(last.first_throw, last.second_throw));
        if bonus_earned {
            last.third_throw = rest.next();
        }

        let extra = rest.count();
        if extra > 0 {
            return Err(ScoreError::TooManyThrows { extra });
        }

        Ok(Self { frames: score_sequence(&frames) })
    }

    /// All ten frames with derived fields filled.
    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Frame by its 1-based number.
    pub fn frame(&self, frame_number: u8) -> Result<&Frame, ScoreError> {
        Self::index_of(frame_number).map(|index| &self.frames[index])
    }

    /// New scorecard with one throw changed and the whole game re-scored.
    ///
    /// Later throws in the same frame are cleared, see [`apply_throw`].
    pub fn with_throw(
        &self,
        frame_number: u8,
        slot: ThrowSlot,
        value: Option<u8>,
    ) -> Result<Self, ScoreError> {
        let index = Self::index_of(frame_number)?;
        let mut frames = self.frames.clone();
        frames[index] = apply_throw(&frames[index], slot, value);
        Ok(Self { frames: score_sequence(&frames) })
    }

    /// Running total through frame 10.
    pub fn total(&self) -> u16 {
        self.frames[FRAME_COUNT - 1].cumulative_score
    }

    /// Whether every frame holds all the throws its rules require.
    pub fn is_complete(&self) -> bool {
        is_game_complete(&self.frames)
    }

    /// A complete game scoring 300.
    pub fn is_perfect(&self) -> bool {
        self.is_complete() && self.total() == PERFECT_SCORE
    }

    /// Every frame that does not validate, with its reason.
    pub fn issues(&self) -> Vec<FrameIssue> {
        validate_all(&self.frames)
    }

    fn index_of(frame_number: u8) -> Result<usize, ScoreError> {
        if (1..=LAST_FRAME).contains(&frame_number) {
            Ok(usize::from(frame_number) - 1)
        } else {
            Err(ScoreError::NoSuchFrame(frame_number))
        }
    }
}

impl TryFrom<Vec<Frame>> for Scorecard {
    type Error = ScoreError;

    fn try_from(frames: Vec<Frame>) -> Result<Self, Self::Error> {
        Self::from_frames(frames)
    }
}

impl From<Scorecard> for Vec<Frame> {
    fn from(card: Scorecard) -> Self {
        card.frames.into()
    }
}
