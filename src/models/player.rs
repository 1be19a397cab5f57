//! Player model — a registered tournament participant.

use serde::{Deserialize, Serialize};

/// A registered player. The id is assigned by the database on
/// registration and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (database rowid)
    pub id: i64,

    /// Full name as registered (need not be unique)
    pub name: String,
}

impl Player {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
