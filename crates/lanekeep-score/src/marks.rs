//! Scoreboard marks.
//!
//! Conventional notation for a printed scoreboard: `X` for a strike, `/` for
//! a spare, `-` for an empty box, digits otherwise.

use std::fmt;

use crate::{
    frame::{Frame, PIN_COUNT},
    scorecard::Scorecard,
};

/// What to draw in one scoreboard box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// No throw entered.
    Empty,
    /// All ten pins.
    Strike,
    /// Remaining pins on the second delivery.
    Spare,
    /// Plain pin count.
    Pins(u8),
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("-"),
            Self::Strike => f.write_str("X"),
            Self::Spare => f.write_str("/"),
            Self::Pins(pins) => write!(f, "{pins}"),
        }
    }
}

/// Mark for a single raw throw, without spare context.
pub fn throw_mark(value: Option<u8>) -> Mark {
    match value {
        None => Mark::Empty,
        Some(PIN_COUNT) => Mark::Strike,
        Some(pins) => Mark::Pins(pins),
    }
}

/// Boxes to draw for a scored frame.
///
/// Frames 1-9 draw a lone `X` for a strike and `/` in the second box of a
/// spare. Frame 10 always draws its three raw throws.
pub fn frame_marks(frame: &Frame) -> Vec<Mark> {
    if frame.is_last() {
        return vec![
            throw_mark(frame.first_throw),
            throw_mark(frame.second_throw),
            throw_mark(frame.third_throw),
        ];
    }

    if frame.is_strike {
        return vec![Mark::Strike];
    }

    let second = if frame.is_spare { Mark::Spare } else { throw_mark(frame.second_throw) };
    vec![throw_mark(frame.first_throw), second]
}

/// Two text lines: marks per frame, then running totals.
///
/// Frames with a zero running total show `-`, matching an untouched board.
pub fn scoreboard_lines(card: &Scorecard) -> (String, String) {
    let mut marks = Vec::new();
    let mut totals = Vec::new();

    for frame in card.frames() {
        let boxes: Vec<String> = frame_marks(frame).iter().map(ToString::to_string).collect();
        let cell = boxes.join(" ");
        let total = if frame.cumulative_score > 0 {
            frame.cumulative_score.to_string()
        } else {
            Mark::Empty.to_string()
        };

        let width = cell.len().max(total.len());
        marks.push(format!("{cell:^width$}"));
        totals.push(format!("{total:^width$}"));
    }

    (format!("|{}|", marks.join("|")), format!("|{}|", totals.join("|")))
}
