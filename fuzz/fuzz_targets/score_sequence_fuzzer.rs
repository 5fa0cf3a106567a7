//! Fuzz target for scoring arbitrary throw tables
//!
//! Throw values cover the whole `u8` range, including values no lane can
//! produce.
//!
//! # Invariants
//!
//! - Scoring and validation NEVER panic
//! - Re-scoring scored output changes nothing
//! - Standard invariants hold for any input
//! - Frames that validate keep every frame score within bounds

#![no_main]

use arbitrary::Arbitrary;
use lanekeep_harness::InvariantRegistry;
use lanekeep_score::{FRAME_COUNT, Frame, score_sequence, validate_all, validate_frame};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct ThrowTable {
    frames: [(Option<u8>, Option<u8>, Option<u8>); FRAME_COUNT],
}

fuzz_target!(|table: ThrowTable| {
    let frames: [Frame; FRAME_COUNT] = std::array::from_fn(|i| {
        let (first, second, third) = table.frames[i];
        Frame::with_throws(i as u8 + 1, first, second, third)
    });

    let scored = score_sequence(&frames);
    assert_eq!(score_sequence(&scored), scored, "scoring is not idempotent");

    InvariantRegistry::standard().assert_all(&scored, "after scoring fuzzed throws");

    for frame in &scored {
        let _ = validate_frame(frame.frame_number, frame.first_throw, frame.second_throw, frame.third_throw);
    }

    if validate_all(&scored).is_empty() {
        InvariantRegistry::complete_game().assert_all(&scored, "for a legal fuzzed game");
    }
});
