//! Match model — one completed match between two players.

use serde::{Deserialize, Serialize};

/// A completed match. There are no draws: every match has exactly one
/// winner and one loser. Records are immutable once reported and only
/// removed by a bulk reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier (database rowid)
    pub id: i64,

    /// Winning player's id
    pub winner_id: i64,

    /// Losing player's id
    pub loser_id: i64,
}

impl MatchRecord {
    pub fn new(id: i64, winner_id: i64, loser_id: i64) -> Self {
        Self {
            id,
            winner_id,
            loser_id,
        }
    }

    /// Whether the given player took part in this match.
    pub fn involves(&self, player_id: i64) -> bool {
        self.winner_id == player_id || self.loser_id == player_id
    }
}
