//! Throw entry reducer.
//!
//! Editing a throw invalidates every later throw in the same frame: the pins
//! left for them depend on what came before. [`apply_throw`] performs that
//! cascade and nothing else. Re-scoring is a separate step.

use crate::{
    frame::{Frame, PIN_COUNT, ThrowSlot},
    scorer::{is_spare, is_strike},
};

/// Set one throw of a frame, clearing the throws after it.
///
/// - First throw: clears the second and third.
/// - Second throw: clears the third.
/// - Third throw: nothing else changes.
///
/// Derived fields are copied through unchanged; pass the updated game to
/// [`crate::score_sequence`] to refresh them.
pub fn apply_throw(frame: &Frame, slot: ThrowSlot, value: Option<u8>) -> Frame {
    let mut next = frame.clone();
    match slot {
        ThrowSlot::First => {
            next.first_throw = value;
            next.second_throw = None;
            next.third_throw = None;
        },
        ThrowSlot::Second => {
            next.second_throw = value;
            next.third_throw = None;
        },
        ThrowSlot::Third => next.third_throw = value,
    }
    next
}

/// Largest value a slot can legally take given the throws before it.
///
/// Unset earlier throws count as zero pins down. Returns 0 for slots that
/// cannot be used at all, such as the second box after a strike in frames
/// 1-9.
pub fn max_pins(frame: &Frame, slot: ThrowSlot) -> u8 {
    let first = frame.first_throw;
    let second = frame.second_throw;

    match slot {
        ThrowSlot::First => PIN_COUNT,
        ThrowSlot::Second if is_strike(first) => {
            if frame.is_last() {
                PIN_COUNT
            } else {
                0
            }
        },
        ThrowSlot::Second => pins_left(first),
        ThrowSlot::Third if !frame.is_last() => 0,
        ThrowSlot::Third if is_strike(first) => {
            if is_strike(second) {
                PIN_COUNT
            } else {
                pins_left(second)
            }
        },
        ThrowSlot::Third if is_spare(first, second) => PIN_COUNT,
        ThrowSlot::Third => 0,
    }
}

/// Whether a slot currently accepts input.
///
/// The second box opens once the first throw is entered, unless that throw
/// was a strike before frame 10. The third box opens only in frame 10, after
/// a strike or a spare.
pub fn slot_open(frame: &Frame, slot: ThrowSlot) -> bool {
    match slot {
        ThrowSlot::First => true,
        ThrowSlot::Second => {
            frame.first_throw.is_some() && (frame.is_last() || !is_strike(frame.first_throw))
        },
        ThrowSlot::Third => {
            frame.is_last()
                && frame.second_throw.is_some()
                && (is_strike(frame.first_throw)
                    || is_spare(frame.first_throw, frame.second_throw))
        },
    }
}

fn pins_left(throw: Option<u8>) -> u8 {
    PIN_COUNT.saturating_sub(throw.unwrap_or(0))
}
