//! # Swiss Tracker
//!
//! A Swiss-system tournament tracker backed by SQLite.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, standings, pairings)
//! - **swiss**: Standings computation and next-round pairing engine
//! - **storage**: SQLite persistence for players and match results
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod models;
pub mod storage;
pub mod swiss;

pub use models::*;
