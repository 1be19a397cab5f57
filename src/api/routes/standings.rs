use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Pairing, StandingEntry};
use crate::swiss::{compute_standings, generate_pairings};

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingEntry>,
    pub total_players: u32,
    pub total_matches: u32,
}

#[derive(Debug, Serialize)]
pub struct PairingsResponse {
    pub pairings: Vec<Pairing>,
    pub total_players: u32,
}

pub async fn standings(
    State(state): State<AppState>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let mut db = state.db.lock().await;
    let snapshot = db.snapshot()?;

    let standings = compute_standings(&snapshot.players, &snapshot.matches);
    Ok(Json(StandingsResponse {
        total_players: snapshot.players.len() as u32,
        total_matches: snapshot.matches.len() as u32,
        standings,
    }))
}

pub async fn pairings(State(state): State<AppState>) -> Result<Json<PairingsResponse>, ApiError> {
    let mut db = state.db.lock().await;
    let snapshot = db.snapshot()?;

    let standings = compute_standings(&snapshot.players, &snapshot.matches);
    let pairings =
        generate_pairings(&standings).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    Ok(Json(PairingsResponse {
        total_players: snapshot.players.len() as u32,
        pairings,
    }))
}
