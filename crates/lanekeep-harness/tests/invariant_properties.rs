//! Invariant and model-based tests over generated games and edit scripts.

use lanekeep_harness::{EditScript, GameGenerator, InvariantRegistry, ThrowEdit};
use lanekeep_score::{FRAME_COUNT, Scorecard};
use proptest::prelude::*;

fn throw_edit() -> impl Strategy<Value = ThrowEdit> {
    (any::<u8>(), any::<u8>(), any::<Option<u8>>())
        .prop_map(|(frame, slot, value)| ThrowEdit { frame, slot, value })
}

fn edit_script() -> impl Strategy<Value = EditScript> {
    prop::collection::vec(throw_edit(), 0..64).prop_map(|edits| EditScript { edits })
}

proptest! {
    #[test]
    fn prop_generated_games_hold_every_invariant(seed in any::<u64>()) {
        let card = GameGenerator::new(seed).legal_game();

        prop_assert!(InvariantRegistry::complete_game().check_all(card.frames()).is_ok());
    }

    #[test]
    fn prop_partial_games_hold_standard_invariants(seed in any::<u64>()) {
        let card = GameGenerator::new(seed).partial_game();

        prop_assert!(InvariantRegistry::standard().check_all(card.frames()).is_ok());
    }

    #[test]
    fn prop_incremental_edits_match_scoring_from_scratch(script in edit_script()) {
        let card = script.replay();

        prop_assert_eq!(card.frames(), &script.model());
        prop_assert!(InvariantRegistry::standard().check_all(card.frames()).is_ok());
    }
}

#[test]
fn long_seeded_run_holds_invariants() {
    let registry = InvariantRegistry::complete_game();
    let mut generator = GameGenerator::new(0x1a2e);

    for game in 0..1_000 {
        let card = generator.legal_game();
        registry.assert_all(card.frames(), &format!("in game {game}"));
    }
}

#[test]
fn tampered_total_is_reported_by_two_invariants() {
    let card = Scorecard::from_throws(&[10; 12]).expect("twelve strikes");
    let mut frames = card.frames().clone();
    frames[FRAME_COUNT - 1].cumulative_score = 299;

    let violations =
        InvariantRegistry::standard().check_all(&frames).expect_err("tampered total");

    assert_eq!(violations.len(), 2);
}
