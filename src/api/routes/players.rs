use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Player;

#[derive(Debug, Deserialize)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
    pub total: u32,
}

#[derive(Debug, Serialize)]
pub struct PlayerCountResponse {
    pub count: u32,
}

pub async fn register_player(
    State(state): State<AppState>,
    Json(req): Json<RegisterPlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest(
            "Player name must not be empty".to_string(),
        ));
    }

    let db = state.db.lock().await;
    let player = db.register_player(name)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let db = state.db.lock().await;
    let players = db.players()?;
    let total = players.len() as u32;

    Ok(Json(PlayersResponse { players, total }))
}

pub async fn player_count(
    State(state): State<AppState>,
) -> Result<Json<PlayerCountResponse>, ApiError> {
    let db = state.db.lock().await;
    let count = db.count_players()?;

    Ok(Json(PlayerCountResponse { count }))
}

pub async fn clear_players(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let db = state.db.lock().await;
    if db.count_matches()? > 0 {
        return Err(ApiError::BadRequest(
            "Cannot delete players while matches exist; delete matches first".to_string(),
        ));
    }
    db.delete_players()?;

    Ok(StatusCode::NO_CONTENT)
}
