//! Pairing model — two players matched for the next round.

use serde::{Deserialize, Serialize};

use super::StandingEntry;

/// A next-round pairing of two players drawn from adjacent standings
/// positions. The higher-ranked player is always `player1`. Derived per
/// round; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Higher-ranked player's id
    pub player1_id: i64,

    /// Higher-ranked player's name
    pub player1_name: String,

    /// Lower-ranked player's id
    pub player2_id: i64,

    /// Lower-ranked player's name
    pub player2_name: String,
}

impl Pairing {
    /// Build a pairing from two adjacent standings entries, first entry
    /// ranked higher.
    pub fn from_entries(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            player1_id: first.player_id,
            player1_name: first.name.clone(),
            player2_id: second.player_id,
            player2_name: second.name.clone(),
        }
    }
}
