//! Frame data model.
//!
//! A [`Frame`] holds the raw throws entered by a player plus the fields the
//! scorer derives from them. Field names serialize in camelCase so frames map
//! directly onto the documents the storage layer keeps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Frame number of the final frame.
pub const LAST_FRAME: u8 = 10;

/// Pins standing at the start of a frame.
pub const PIN_COUNT: u8 = 10;

/// Score of twelve consecutive strikes.
pub const PERFECT_SCORE: u16 = 300;

/// One of the three input boxes of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrowSlot {
    /// First delivery of the frame.
    First,
    /// Second delivery of the frame.
    Second,
    /// Bonus delivery, only meaningful in frame 10.
    Third,
}

impl ThrowSlot {
    /// All slots in delivery order.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];
}

impl fmt::Display for ThrowSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        };
        f.write_str(name)
    }
}

/// One of the ten positions in a game.
///
/// Throws are `None` until entered. `Some(0)` is a thrown gutter ball, which
/// is different from a throw that has not happened yet. Values above
/// [`PIN_COUNT`] are representable so that bad input can be reported by
/// [`crate::validate_frame`] instead of being silently clamped.
///
/// The derived fields (`is_strike`, `is_spare`, `frame_score`,
/// `cumulative_score`) are only ever written by [`crate::score_sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Position in the game, 1 through 10.
    pub frame_number: u8,
    /// Pins felled by the first delivery.
    pub first_throw: Option<u8>,
    /// Pins felled by the second delivery.
    pub second_throw: Option<u8>,
    /// Pins felled by the bonus delivery of frame 10.
    pub third_throw: Option<u8>,
    /// Derived: all pins down on the first delivery.
    #[serde(default)]
    pub is_strike: bool,
    /// Derived: all pins down using both deliveries.
    #[serde(default)]
    pub is_spare: bool,
    /// Derived: score of this frame including bonuses.
    #[serde(default)]
    pub frame_score: u16,
    /// Derived: running total through this frame.
    #[serde(default)]
    pub cumulative_score: u16,
}

impl Frame {
    /// Create an empty frame with no throws entered.
    pub fn new(frame_number: u8) -> Self {
        Self {
            frame_number,
            first_throw: None,
            second_throw: None,
            third_throw: None,
            is_strike: false,
            is_spare: false,
            frame_score: 0,
            cumulative_score: 0,
        }
    }

    /// Create a frame with the given raw throws and zeroed derived fields.
    pub fn with_throws(
        frame_number: u8,
        first_throw: Option<u8>,
        second_throw: Option<u8>,
        third_throw: Option<u8>,
    ) -> Self {
        Self { first_throw, second_throw, third_throw, ..Self::new(frame_number) }
    }

    /// Whether this is the tenth frame.
    pub fn is_last(&self) -> bool {
        self.frame_number == LAST_FRAME
    }

    /// Value entered in the given slot.
    pub fn throw(&self, slot: ThrowSlot) -> Option<u8> {
        match slot {
            ThrowSlot::First => self.first_throw,
            ThrowSlot::Second => self.second_throw,
            ThrowSlot::Third => self.third_throw,
        }
    }

    /// Copy of this frame with only the raw throws kept.
    ///
    /// Used to compare frames by input regardless of what was derived from
    /// them.
    pub fn raw(&self) -> Self {
        Self::with_throws(self.frame_number, self.first_throw, self.second_throw, self.third_throw)
    }
}
