//! Strike/spare detection and full-game scoring.
//!
//! Scoring is a pure function of the raw throws. Derived fields present on
//! the input are ignored and rebuilt from scratch every call, so re-scoring
//! already scored frames is a no-op.

use crate::frame::{FRAME_COUNT, Frame, PIN_COUNT, ThrowSlot};

/// Index of frame 10 within a game.
const LAST_INDEX: usize = FRAME_COUNT - 1;

/// True iff the first throw felled every pin.
///
/// Applies to frames 1-9. Frame 10 uses the same test for its flag but never
/// gets a lookahead bonus.
pub fn is_strike(first_throw: Option<u8>) -> bool {
    first_throw == Some(PIN_COUNT)
}

/// True iff both throws are entered and together fell every pin.
pub fn is_spare(first_throw: Option<u8>, second_throw: Option<u8>) -> bool {
    match (first_throw, second_throw) {
        (Some(first), Some(second)) => u16::from(first) + u16::from(second) == u16::from(PIN_COUNT),
        _ => false,
    }
}

/// Sum of the throws entered in a frame, unset throws counting zero.
///
/// This is the whole score of frame 10, which has nothing after it to borrow
/// from.
pub fn frame_base_score(frame: &Frame) -> u16 {
    ThrowSlot::ALL.iter().filter_map(|slot| frame.throw(*slot)).map(u16::from).sum()
}

/// Score a full game.
///
/// Returns a new set of frames with `is_strike`, `is_spare`, `frame_score`
/// and `cumulative_score` recomputed. Bonus throws that have not been entered
/// yet count zero, so a partially entered game scores what is known so far.
pub fn score_sequence(frames: &[Frame; FRAME_COUNT]) -> [Frame; FRAME_COUNT] {
    let mut scored = frames.clone();
    let mut cumulative: u16 = 0;

    for index in 0..FRAME_COUNT {
        let frame = &frames[index];

        let (strike, spare, frame_score) = if index == LAST_INDEX {
            let strike = is_strike(frame.first_throw);
            let spare = !strike && is_spare(frame.first_throw, frame.second_throw);
            (strike, spare, frame_base_score(frame))
        } else if is_strike(frame.first_throw) {
            let (bonus1, bonus2) = strike_bonus(frames, index);
            (true, false, u16::from(PIN_COUNT) + bonus1 + bonus2)
        } else if is_spare(frame.first_throw, frame.second_throw) {
            let bonus = throw_value(frames, index + 1, ThrowSlot::First);
            (false, true, u16::from(PIN_COUNT) + bonus)
        } else {
            let open = throw_value(frames, index, ThrowSlot::First)
                + throw_value(frames, index, ThrowSlot::Second);
            (false, false, open)
        };

        cumulative += frame_score;

        let out = &mut scored[index];
        out.is_strike = strike;
        out.is_spare = spare;
        out.frame_score = frame_score;
        out.cumulative_score = cumulative;

        tracing::trace!(
            frame = out.frame_number,
            strike,
            spare,
            frame_score,
            cumulative,
            "scored frame"
        );
    }

    scored
}

/// The next two deliveries after a strike at `index` (frames 1-9 only).
///
/// Frame 10 holds up to three deliveries in one frame, so a strike in frame 9
/// takes frame 10's first and second throws even when frame 10 opens with a
/// strike. Otherwise a following strike has no second throw of its own and
/// the second bonus comes from the frame after it.
fn strike_bonus(frames: &[Frame; FRAME_COUNT], index: usize) -> (u16, u16) {
    debug_assert!(index < LAST_INDEX);

    let next = index + 1;
    let bonus1 = throw_value(frames, next, ThrowSlot::First);
    let bonus2 = if next == LAST_INDEX {
        throw_value(frames, next, ThrowSlot::Second)
    } else if is_strike(frames[next].first_throw) {
        throw_value(frames, next + 1, ThrowSlot::First)
    } else {
        throw_value(frames, next, ThrowSlot::Second)
    };

    (bonus1, bonus2)
}

fn throw_value(frames: &[Frame; FRAME_COUNT], index: usize, slot: ThrowSlot) -> u16 {
    frames.get(index).and_then(|frame| frame.throw(slot)).map_or(0, u16::from)
}
