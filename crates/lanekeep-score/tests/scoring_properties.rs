//! Property-based tests for the frame scorer.
//!
//! Legal games are generated frame by frame so that every second throw fits
//! the pins left and frame 10 gets its bonus throw exactly when earned.

use lanekeep_score::{
    FRAME_COUNT, Frame, PERFECT_SCORE, Scorecard, ThrowSlot, apply_throw, is_game_complete,
    max_pins, score_sequence, validate_frame,
};
use proptest::prelude::*;

type Throws = (Option<u8>, Option<u8>, Option<u8>);

/// Strategy for one of frames 1-9.
fn open_frame() -> impl Strategy<Value = Throws> {
    (0u8..=10).prop_flat_map(|first| {
        if first == 10 {
            Just((Some(10), None, None)).boxed()
        } else {
            (0u8..=10 - first).prop_map(move |second| (Some(first), Some(second), None)).boxed()
        }
    })
}

/// Strategy for frame 10.
fn last_frame() -> impl Strategy<Value = Throws> {
    (0u8..=10).prop_flat_map(|first| {
        if first == 10 {
            (0u8..=10)
                .prop_flat_map(|second| {
                    let third_max = if second == 10 { 10 } else { 10 - second };
                    (0u8..=third_max).prop_map(move |third| (Some(10), Some(second), Some(third)))
                })
                .boxed()
        } else {
            (0u8..=10 - first)
                .prop_flat_map(move |second| {
                    if first + second == 10 {
                        (0u8..=10)
                            .prop_map(move |third| (Some(first), Some(second), Some(third)))
                            .boxed()
                    } else {
                        Just((Some(first), Some(second), None)).boxed()
                    }
                })
                .boxed()
        }
    })
}

/// Strategy for a complete, legal game.
fn legal_game() -> impl Strategy<Value = [Frame; FRAME_COUNT]> {
    (prop::collection::vec(open_frame(), FRAME_COUNT - 1), last_frame()).prop_map(|(opens, last)| {
        std::array::from_fn(|i| {
            let (first, second, third) = if i < FRAME_COUNT - 1 { opens[i] } else { last };
            Frame::with_throws(i as u8 + 1, first, second, third)
        })
    })
}

/// Strategy for a throw that may be unset or more than the pins standing.
fn any_throw() -> impl Strategy<Value = Option<u8>> {
    prop::option::of(0u8..=15)
}

/// Strategy for arbitrary, possibly illegal or partial throws.
fn any_game() -> impl Strategy<Value = [Frame; FRAME_COUNT]> {
    let frame = (any_throw(), any_throw(), any_throw());
    prop::collection::vec(frame, FRAME_COUNT).prop_map(|throws| {
        std::array::from_fn(|i| {
            let (first, second, third) = throws[i];
            Frame::with_throws(i as u8 + 1, first, second, third)
        })
    })
}

fn flatten(frames: &[Frame; FRAME_COUNT]) -> Vec<u8> {
    frames
        .iter()
        .flat_map(|f| ThrowSlot::ALL.iter().filter_map(move |slot| f.throw(*slot)))
        .collect()
}

proptest! {
    #[test]
    fn prop_scoring_is_idempotent(frames in any_game()) {
        let once = score_sequence(&frames);
        let twice = score_sequence(&once);

        // PROPERTY: derived fields depend on raw throws only
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_cumulative_never_decreases(frames in any_game()) {
        let scored = score_sequence(&frames);

        for pair in scored.windows(2) {
            prop_assert!(pair[1].cumulative_score >= pair[0].cumulative_score);
            prop_assert_eq!(
                pair[1].cumulative_score,
                pair[0].cumulative_score + pair[1].frame_score
            );
        }
    }

    #[test]
    fn prop_legal_games_are_complete_and_bounded(frames in legal_game()) {
        let scored = score_sequence(&frames);

        prop_assert!(is_game_complete(&scored));
        prop_assert!(scored.iter().all(|f| f.frame_score <= 30));
        prop_assert!(scored[FRAME_COUNT - 1].cumulative_score <= PERFECT_SCORE);
        prop_assert_eq!(
            scored[FRAME_COUNT - 1].cumulative_score,
            scored.iter().map(|f| f.frame_score).sum::<u16>()
        );
    }

    #[test]
    fn prop_legal_frames_validate(frames in legal_game()) {
        for frame in &frames {
            let result = validate_frame(
                frame.frame_number,
                frame.first_throw,
                frame.second_throw,
                frame.third_throw,
            );
            prop_assert!(result.is_valid(), "frame {:?} rejected: {:?}", frame, result);
        }
    }

    #[test]
    fn prop_flat_throws_rebuild_the_same_game(frames in legal_game()) {
        let card = Scorecard::from_throws(&flatten(&frames)).expect("legal game fits");

        prop_assert_eq!(card.frames(), &score_sequence(&frames));
    }

    #[test]
    fn prop_editing_a_frame_leaves_other_frames_raw_throws(
        frames in legal_game(),
        target in 0usize..FRAME_COUNT,
        value in 0u8..=10,
    ) {
        let mut edited = frames.clone();
        edited[target] = apply_throw(&frames[target], ThrowSlot::First, Some(value));
        let scored = score_sequence(&edited);

        for (i, frame) in scored.iter().enumerate() {
            if i != target {
                prop_assert_eq!(frame.raw(), frames[i].raw());
            }
        }
        prop_assert_eq!(scored[target].second_throw, None);
    }

    #[test]
    fn prop_max_pins_accepts_exactly_legal_second_throws(first in 0u8..10, second in 0u8..=10) {
        let frame = Frame::with_throws(4, Some(first), None, None);
        let legal = validate_frame(4, Some(first), Some(second), None).is_valid();

        prop_assert_eq!(legal, second <= max_pins(&frame, ThrowSlot::Second));
    }
}

#[test]
fn perfect_game_every_frame_scores_thirty() {
    let card = Scorecard::from_throws(&[10; 12]).expect("twelve strikes");

    assert!(card.frames().iter().all(|f| f.frame_score == 30));
    assert_eq!(card.total(), 300);
    assert!(card.is_perfect());
}

#[test]
fn all_gutter_game_scores_zero() {
    let card = Scorecard::from_throws(&[0; 20]).expect("twenty gutters");

    assert!(card.is_complete());
    assert_eq!(card.total(), 0);
    assert!(!card.is_perfect());
}

#[test]
fn spare_chain_scores_one_fifty() {
    let card = Scorecard::from_throws(&[5; 21]).expect("spare every frame");

    assert!(card.frames().iter().all(|f| f.frame_score == 15));
    assert_eq!(card.total(), 150);
}

#[test]
fn tenth_frame_examples() {
    let cases = [
        ((Some(10), Some(10), Some(10)), true, 30),
        ((Some(5), Some(5), Some(8)), true, 18),
        ((Some(4), Some(4), None), true, 8),
        ((Some(4), Some(4), Some(3)), false, 11),
    ];

    for ((first, second, third), valid, score) in cases {
        let mut frames: [Frame; FRAME_COUNT] =
            std::array::from_fn(|i| Frame::with_throws(i as u8 + 1, Some(0), Some(0), None));
        frames[FRAME_COUNT - 1] = Frame::with_throws(10, first, second, third);

        let scored = score_sequence(&frames);

        assert_eq!(validate_frame(10, first, second, third).is_valid(), valid);
        assert_eq!(scored[FRAME_COUNT - 1].frame_score, score);
        assert_eq!(scored[FRAME_COUNT - 2].frame_score, 0, "no lookahead out of frame 10");
    }
}
