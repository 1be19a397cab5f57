//! SQLite database operations.
//!
//! Every statement is parameterized. Multi-step operations run inside a
//! scoped transaction on the owned connection, so readers never observe
//! a half-applied write and `snapshot` always sees one consistent view.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::models::{MatchRecord, Player};

use super::StorageError;

/// A consistent view of all stored players and matches, read within a
/// single transaction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
}

/// Handle to the tournament database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if needed) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path.as_ref())?;
        let db = Self::init(conn)?;
        info!("Opened tournament database at {:?}", path.as_ref());
        Ok(db)
    }

    /// Open an in-memory database. Used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let mut db = Self { conn };
        db.create_schema()?;
        Ok(db)
    }

    /// Create the players and matches tables if they do not exist yet.
    fn create_schema(&mut self) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT    NOT NULL
            )",
            [],
        )?;

        tx.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                winner_id INTEGER NOT NULL REFERENCES players (id),
                loser_id  INTEGER NOT NULL REFERENCES players (id),
                CHECK (winner_id <> loser_id)
            )",
            [],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Register a new player and return the assigned id.
    pub fn register_player(&self, name: &str) -> Result<Player, StorageError> {
        self.conn
            .execute("INSERT INTO players (name) VALUES (?1)", params![name])?;
        let id = self.conn.last_insert_rowid();
        debug!("Registered player {} ({})", id, name);
        Ok(Player::new(id, name))
    }

    /// Record the outcome of a single match between two players.
    ///
    /// Fails with a constraint violation if either id is unregistered or
    /// the winner and loser are the same player.
    pub fn report_match(&self, winner_id: i64, loser_id: i64) -> Result<MatchRecord, StorageError> {
        self.conn.execute(
            "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2)",
            params![winner_id, loser_id],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Recorded match {}: {} beat {}", id, winner_id, loser_id);
        Ok(MatchRecord::new(id, winner_id, loser_id))
    }

    /// Number of registered players.
    pub fn count_players(&self) -> Result<u32, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as u32)
    }

    /// Number of recorded matches.
    pub fn count_matches(&self) -> Result<u32, StorageError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))?;
        Ok(count as u32)
    }

    /// All registered players, in registration order.
    pub fn players(&self) -> Result<Vec<Player>, StorageError> {
        query_players(&self.conn)
    }

    /// All recorded matches, in reporting order.
    pub fn matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        query_matches(&self.conn)
    }

    /// Read players and matches within one transaction.
    pub fn snapshot(&mut self) -> Result<Snapshot, StorageError> {
        let tx = self.conn.transaction()?;
        let players = query_players(&tx)?;
        let matches = query_matches(&tx)?;
        tx.commit()?;
        Ok(Snapshot { players, matches })
    }

    /// Remove all match records.
    pub fn delete_matches(&self) -> Result<u32, StorageError> {
        let deleted = self.conn.execute("DELETE FROM matches", [])?;
        info!("Deleted {} matches", deleted);
        Ok(deleted as u32)
    }

    /// Remove all player records. Fails while matches still reference
    /// them; use [`Database::reset`] to clear both.
    pub fn delete_players(&self) -> Result<u32, StorageError> {
        let deleted = self.conn.execute("DELETE FROM players", [])?;
        info!("Deleted {} players", deleted);
        Ok(deleted as u32)
    }

    /// Clear the whole tournament: matches first, then players, in one
    /// transaction.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM matches", [])?;
        tx.execute("DELETE FROM players", [])?;
        tx.commit()?;
        info!("Reset tournament database");
        Ok(())
    }
}

fn query_players(conn: &Connection) -> Result<Vec<Player>, StorageError> {
    let mut stmt = conn.prepare("SELECT id, name FROM players ORDER BY id")?;
    let players = stmt
        .query_map([], |row| {
            Ok(Player {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(players)
}

fn query_matches(conn: &Connection) -> Result<Vec<MatchRecord>, StorageError> {
    let mut stmt = conn.prepare("SELECT id, winner_id, loser_id FROM matches ORDER BY id")?;
    let matches = stmt
        .query_map([], |row| {
            Ok(MatchRecord {
                id: row.get(0)?,
                winner_id: row.get(1)?,
                loser_id: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(matches)
}
