//! SQLite-backed tournament storage.
//!
//! Owns all persistent state:
//! - Player registration rows
//! - Reported match outcomes
//! - Bulk reset operations
//!
//! The standings/pairing engine never touches the database directly; it
//! consumes the in-memory snapshot produced here.

use thiserror::Error;

mod sqlite;

pub use sqlite::*;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl StorageError {
    /// Whether this error is a schema constraint violation — an unknown
    /// player id behind a foreign key, or a self-match rejected by the
    /// CHECK constraint. Boundaries surface these as caller errors
    /// instead of internal failures.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            StorageError::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => {
                err.code == rusqlite::ErrorCode::ConstraintViolation
            }
            _ => false,
        }
    }
}
