//! Fuzz target for throw-by-throw entry
//!
//! Replays arbitrary edit scripts, including corrections, clears and values
//! above ten, through `Scorecard::with_throw`.
//!
//! # Invariants
//!
//! - Incremental re-scoring matches scoring the final raw throws once
//! - Standard invariants hold after every script

#![no_main]

use lanekeep_harness::{EditScript, InvariantRegistry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|script: EditScript| {
    let card = script.replay();

    assert_eq!(card.frames(), &script.model(), "incremental scoring diverged");
    InvariantRegistry::standard().assert_all(card.frames(), "after replaying an edit script");
});
