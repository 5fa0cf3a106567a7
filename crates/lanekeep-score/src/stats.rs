//! Per-player summary over finished games.

use serde::{Deserialize, Serialize};

/// Aggregate of a player's game totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Number of games counted.
    pub total_games: usize,
    /// Mean total, rounded to the nearest pin (halves round up).
    pub average_score: u16,
    /// Best total.
    pub high_score: u16,
    /// Worst total.
    pub low_score: u16,
}

impl PlayerStats {
    /// Summarise a list of game totals. No games yields all zeros.
    pub fn from_totals(totals: &[u16]) -> Self {
        let (Some(&high_score), Some(&low_score)) = (totals.iter().max(), totals.iter().min())
        else {
            return Self::default();
        };

        let games = totals.len() as u64;
        let sum: u64 = totals.iter().copied().map(u64::from).sum();
        // Totals are u16, so the mean fits as well.
        let average_score = ((2 * sum + games) / (2 * games)) as u16;

        Self { total_games: totals.len(), average_score, high_score, low_score }
    }
}
