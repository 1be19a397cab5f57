use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::MatchRecord;

#[derive(Debug, Deserialize)]
pub struct ReportMatchRequest {
    pub winner_id: i64,
    pub loser_id: i64,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchRecord>,
    pub total: u32,
}

pub async fn report_match(
    State(state): State<AppState>,
    Json(req): Json<ReportMatchRequest>,
) -> Result<(StatusCode, Json<MatchRecord>), ApiError> {
    if req.winner_id == req.loser_id {
        return Err(ApiError::BadRequest(
            "A player cannot play against themselves".to_string(),
        ));
    }

    let db = state.db.lock().await;
    let record = db.report_match(req.winner_id, req.loser_id)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let db = state.db.lock().await;
    let matches = db.matches()?;
    let total = matches.len() as u32;

    Ok(Json(MatchesResponse { matches, total }))
}

pub async fn clear_matches(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let db = state.db.lock().await;
    db.delete_matches()?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::storage::Database;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Database::open_in_memory().unwrap())
    }

    async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_report_match() {
        let state = test_state();
        {
            let db = state.db.lock().await;
            db.register_player("Alice").unwrap();
            db.register_player("Bob").unwrap();
        }
        let app = build_router(state);

        let (status, json) =
            post_json(app, "/api/matches", r#"{"winner_id":1,"loser_id":2}"#).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["winner_id"], 1);
        assert_eq!(json["loser_id"], 2);
    }

    #[tokio::test]
    async fn test_report_match_self_play_rejected() {
        let state = test_state();
        {
            let db = state.db.lock().await;
            db.register_player("Alice").unwrap();
        }
        let app = build_router(state);

        let (status, json) =
            post_json(app, "/api/matches", r#"{"winner_id":1,"loser_id":1}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_report_match_unknown_player() {
        let state = test_state();
        let app = build_router(state);

        let (status, json) =
            post_json(app, "/api/matches", r#"{"winner_id":1,"loser_id":2}"#).await;

        // Foreign key violation surfaces as a bad request, not a 500
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_list_matches() {
        let state = test_state();
        {
            let db = state.db.lock().await;
            let alice = db.register_player("Alice").unwrap();
            let bob = db.register_player("Bob").unwrap();
            db.report_match(alice.id, bob.id).unwrap();
        }
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/matches").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["matches"][0]["winner_id"], 1);
    }

    #[tokio::test]
    async fn test_clear_matches() {
        let state = test_state();
        {
            let db = state.db.lock().await;
            let alice = db.register_player("Alice").unwrap();
            let bob = db.register_player("Bob").unwrap();
            db.report_match(alice.id, bob.id).unwrap();
        }
        let app = build_router(state.clone());

        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/matches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let db = state.db.lock().await;
        assert_eq!(db.count_matches().unwrap(), 0);
        assert_eq!(db.count_players().unwrap(), 2);
    }
}
