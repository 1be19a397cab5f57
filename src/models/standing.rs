//! Standings model — a player's derived win record.

use serde::{Deserialize, Serialize};

/// One row of the standings table. Derived from the stored players and
/// matches on every computation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    /// The player this entry describes
    pub player_id: i64,

    /// Player name as registered
    pub name: String,

    /// Matches won
    pub wins: u32,

    /// Matches played (wins + losses)
    pub matches_played: u32,
}

impl StandingEntry {
    pub fn new(player_id: i64, name: impl Into<String>, wins: u32, matches_played: u32) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins,
            matches_played,
        }
    }

    /// Matches lost.
    pub fn losses(&self) -> u32 {
        self.matches_played - self.wins
    }

    /// Win rate as a fraction (0.0 to 1.0).
    pub fn win_rate(&self) -> f64 {
        if self.matches_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.matches_played as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_losses() {
        let entry = StandingEntry::new(1, "Alice", 2, 5);
        assert_eq!(entry.losses(), 3);
    }

    #[test]
    fn test_standing_win_rate() {
        let entry = StandingEntry::new(1, "Alice", 3, 4);
        assert!((entry.win_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_standing_win_rate_no_matches() {
        let entry = StandingEntry::new(1, "Alice", 0, 0);
        assert_eq!(entry.win_rate(), 0.0);
    }

    #[test]
    fn test_standing_serialization() {
        let entry = StandingEntry::new(4, "Dana", 1, 2);

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: StandingEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
