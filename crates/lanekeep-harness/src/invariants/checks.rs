//! Standard invariant checks.
//!
//! Each check looks at derived fields only through the raw throws they were
//! computed from, so a frame list that was tampered with after scoring fails
//! at least one of them.

use lanekeep_score::{FRAME_COUNT, Frame, PERFECT_SCORE, is_spare, is_strike};

use super::{Invariant, InvariantKind, InvariantResult, Violation};

/// Highest score a single legal frame can earn.
const MAX_FRAME_SCORE: u16 = 30;

/// Frames are numbered 1 through 10 in position order.
pub struct FrameNumbering;

impl Invariant for FrameNumbering {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FrameNumbering
    }

    fn check(&self, frames: &[Frame; FRAME_COUNT]) -> InvariantResult {
        for (i, frame) in frames.iter().enumerate() {
            if usize::from(frame.frame_number) != i + 1 {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("position {i} holds frame {}", frame.frame_number),
                });
            }
        }
        Ok(())
    }
}

/// Strike and spare flags agree with the first two throws.
///
/// A strike takes precedence, so a frame is never flagged as both.
pub struct DerivedFlagsMatchThrows;

impl Invariant for DerivedFlagsMatchThrows {
    fn kind(&self) -> InvariantKind {
        InvariantKind::DerivedFlagsMatchThrows
    }

    fn check(&self, frames: &[Frame; FRAME_COUNT]) -> InvariantResult {
        for frame in frames {
            let strike = is_strike(frame.first_throw);
            let spare = !strike && is_spare(frame.first_throw, frame.second_throw);

            if frame.is_strike != strike || frame.is_spare != spare {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "frame {}: flags strike={} spare={}, throws say strike={strike} spare={spare}",
                        frame.frame_number, frame.is_strike, frame.is_spare
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Each running total is the previous one plus this frame's score.
///
/// Frame scores are never negative, so totals never decrease.
pub struct CumulativeMonotonicity;

impl Invariant for CumulativeMonotonicity {
    fn kind(&self) -> InvariantKind {
        InvariantKind::CumulativeMonotonicity
    }

    fn check(&self, frames: &[Frame; FRAME_COUNT]) -> InvariantResult {
        let mut running = 0u16;
        for frame in frames {
            running = running.saturating_add(frame.frame_score);
            if frame.cumulative_score != running {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!(
                        "frame {}: cumulative {} but running sum is {running}",
                        frame.frame_number, frame.cumulative_score
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Frame 10's running total equals the sum of all frame scores.
pub struct FinalFrameIsTotal;

impl Invariant for FinalFrameIsTotal {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FinalFrameIsTotal
    }

    fn check(&self, frames: &[Frame; FRAME_COUNT]) -> InvariantResult {
        let sum: u32 = frames.iter().map(|f| u32::from(f.frame_score)).sum();
        let last = &frames[FRAME_COUNT - 1];

        if u32::from(last.cumulative_score) != sum {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "frame 10 cumulative {} but frame scores sum to {sum}",
                    last.cumulative_score
                ),
            });
        }
        Ok(())
    }
}

/// No frame scores more than 30 and no game more than 300.
///
/// Only holds when every throw is legal; illegal pin counts can push a frame
/// past the bound.
pub struct ScoreBounds;

impl Invariant for ScoreBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ScoreBounds
    }

    fn check(&self, frames: &[Frame; FRAME_COUNT]) -> InvariantResult {
        if let Some(frame) = frames.iter().find(|f| f.frame_score > MAX_FRAME_SCORE) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("frame {} scores {}", frame.frame_number, frame.frame_score),
            });
        }

        let total = frames[FRAME_COUNT - 1].cumulative_score;
        if total > PERFECT_SCORE {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("game total {total} exceeds {PERFECT_SCORE}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lanekeep_score::Scorecard;

    use super::*;

    fn perfect() -> [Frame; FRAME_COUNT] {
        Scorecard::from_throws(&[10; 12]).expect("twelve strikes").frames().clone()
    }

    #[test]
    fn perfect_game_satisfies_every_check() {
        let frames = perfect();

        assert!(FrameNumbering.check(&frames).is_ok());
        assert!(DerivedFlagsMatchThrows.check(&frames).is_ok());
        assert!(CumulativeMonotonicity.check(&frames).is_ok());
        assert!(FinalFrameIsTotal.check(&frames).is_ok());
        assert!(ScoreBounds.check(&frames).is_ok());
    }

    #[test]
    fn swapped_frames_break_numbering() {
        let mut frames = perfect();
        frames.swap(0, 1);

        let violation = FrameNumbering.check(&frames).expect_err("out of order");
        assert_eq!(violation.message, "position 0 holds frame 2");
    }

    #[test]
    fn stale_flag_is_caught() {
        let mut frames = perfect();
        frames[4].is_spare = true;

        assert!(DerivedFlagsMatchThrows.check(&frames).is_err());
    }

    #[test]
    fn edited_cumulative_is_caught() {
        let mut frames = perfect();
        frames[5].cumulative_score += 1;

        assert!(CumulativeMonotonicity.check(&frames).is_err());
        assert!(FinalFrameIsTotal.check(&frames).is_ok());
    }

    #[test]
    fn inflated_frame_score_is_caught() {
        let mut frames = perfect();
        frames[9].frame_score = 31;

        let violation = ScoreBounds.check(&frames).expect_err("frame over thirty");
        assert_eq!(violation.message, "frame 10 scores 31");
        assert!(FinalFrameIsTotal.check(&frames).is_err());
    }
}
