//! Throw edit scripts for model-based testing.
//!
//! A script is a list of single-throw edits as a score-keeper would enter
//! them, including corrections and clears. Scripts are generated by
//! `arbitrary` from fuzzer bytes or by proptest, then replayed two ways:
//!
//! - through [`Scorecard::with_throw`], re-scoring after every edit
//! - against a plain table of raw throws, scored once at the end
//!
//! Both must agree.

use arbitrary::Arbitrary;
use lanekeep_score::{FRAME_COUNT, Frame, LAST_FRAME, Scorecard, ThrowSlot, score_sequence};

/// Throw values are drawn from `0..VALUE_SPAN`, past the pin count, so that
/// illegal entries get exercised too.
const VALUE_SPAN: u8 = 16;

/// One throw edit.
///
/// Fields are raw fuzzer bytes; the accessors map them onto valid frames and
/// slots so that every edit lands somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct ThrowEdit {
    /// Frame selector, reduced modulo 10.
    pub frame: u8,
    /// Slot selector, reduced modulo 3.
    pub slot: u8,
    /// Value to enter, `None` clears the box.
    pub value: Option<u8>,
}

impl ThrowEdit {
    /// Target frame number, 1..=10.
    pub fn frame_number(&self) -> u8 {
        self.frame % LAST_FRAME + 1
    }

    /// Target slot.
    pub fn slot(&self) -> ThrowSlot {
        ThrowSlot::ALL[usize::from(self.slot) % ThrowSlot::ALL.len()]
    }

    /// Value entered, possibly more pins than are standing.
    pub fn value(&self) -> Option<u8> {
        self.value.map(|v| v % VALUE_SPAN)
    }
}

/// Ordered edits applied to a fresh game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Arbitrary)]
pub struct EditScript {
    /// Edits in entry order.
    pub edits: Vec<ThrowEdit>,
}

impl EditScript {
    /// Apply every edit through [`Scorecard::with_throw`].
    pub fn replay(&self) -> Scorecard {
        self.edits.iter().fold(Scorecard::new(), |card, edit| {
            let Ok(next) = card.with_throw(edit.frame_number(), edit.slot(), edit.value()) else {
                unreachable!("edit frame numbers are always 1..=10")
            };
            next
        })
    }

    /// Reference result: track raw throws in a table and score once.
    pub fn model(&self) -> [Frame; FRAME_COUNT] {
        let mut table = [[None::<u8>; 3]; FRAME_COUNT];

        for edit in &self.edits {
            let row = &mut table[usize::from(edit.frame_number()) - 1];
            let from = slot_index(edit.slot());
            row[from] = edit.value();
            for later in &mut row[from + 1..] {
                *later = None;
            }
        }

        let frames: [Frame; FRAME_COUNT] = std::array::from_fn(|i| {
            let [first, second, third] = table[i];
            Frame::with_throws(i as u8 + 1, first, second, third)
        });
        score_sequence(&frames)
    }
}

fn slot_index(slot: ThrowSlot) -> usize {
    match slot {
        ThrowSlot::First => 0,
        ThrowSlot::Second => 1,
        ThrowSlot::Third => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(frame: u8, slot: u8, value: Option<u8>) -> ThrowEdit {
        ThrowEdit { frame, slot, value }
    }

    #[test]
    fn selectors_wrap_onto_valid_targets() {
        let e = edit(19, 5, Some(33));

        assert_eq!(e.frame_number(), 10);
        assert_eq!(e.slot(), ThrowSlot::Third);
        assert_eq!(e.value(), Some(1));
    }

    #[test]
    fn correcting_a_first_throw_clears_the_rest() {
        let script = EditScript {
            edits: vec![edit(0, 0, Some(3)), edit(0, 1, Some(4)), edit(0, 0, Some(10))],
        };

        let card = script.replay();
        let first = card.frame(1).expect("frame 1");

        assert_eq!(first.first_throw, Some(10));
        assert_eq!(first.second_throw, None);
        assert_eq!(card.frames(), &script.model());
    }

    #[test]
    fn empty_script_is_a_fresh_game() {
        assert_eq!(EditScript::default().replay(), Scorecard::new());
    }
}
