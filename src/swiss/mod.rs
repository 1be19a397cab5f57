//! Swiss-system standings and pairing engine.
//!
//! Computes derived results from a snapshot of stored data:
//! - Standings: per-player win records sorted into rank order
//! - Pairings: adjacent standings positions matched for the next round
//!
//! Both operations are pure functions over the snapshot handed in by the
//! storage layer; they hold no state and perform no I/O.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{MatchRecord, Pairing, Player, StandingEntry};

/// Errors from pairing generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairingError {
    /// The standings hold an odd number of players, so adjacent pairing
    /// cannot cover everyone. No bye is synthesized.
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
}

/// Compute the standings table from a snapshot of players and matches.
///
/// Every registered player appears exactly once, including players with
/// no recorded matches. Sorted by wins descending; ties are broken by
/// player id ascending, which is registration order.
pub fn compute_standings(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingEntry> {
    let mut wins: HashMap<i64, u32> = HashMap::new();
    let mut losses: HashMap<i64, u32> = HashMap::new();
    for m in matches {
        *wins.entry(m.winner_id).or_default() += 1;
        *losses.entry(m.loser_id).or_default() += 1;
    }

    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|p| {
            let won = wins.get(&p.id).copied().unwrap_or(0);
            let lost = losses.get(&p.id).copied().unwrap_or(0);
            StandingEntry::new(p.id, p.name.clone(), won, won + lost)
        })
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.player_id.cmp(&b.player_id)));
    standings
}

/// Generate next-round pairings by adjacent grouping over the sorted
/// standings: positions (0,1), (2,3), ... each form one pairing with the
/// higher-ranked player listed first.
///
/// Returns [`PairingError::OddPlayerCount`] for odd-length standings
/// rather than dropping a player or inventing a bye.
pub fn generate_pairings(standings: &[StandingEntry]) -> Result<Vec<Pairing>, PairingError> {
    if standings.len() % 2 != 0 {
        return Err(PairingError::OddPlayerCount(standings.len()));
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::from_entries(&pair[0], &pair[1]))
        .collect())
}
