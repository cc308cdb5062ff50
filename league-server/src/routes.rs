//! HTTP route handlers for the league API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use league::core::league::League;
use tracing::{error, info};

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/league", get(get_league))
        .route("/players/{name}", get(get_player_score).post(post_win))
}

async fn health() -> &'static str {
    "ok"
}

/// GET /league - standings as a JSON array, most wins first.
async fn get_league(State(state): State<AppState>) -> Result<Json<League>, StatusCode> {
    let league = state.store.league().map_err(internal_error)?;
    Ok(Json(league))
}

/// GET /players/{name} - win count as plain text, 404 for unknown players.
async fn get_player_score(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<String, StatusCode> {
    match state.store.find_player(&name).map_err(internal_error)? {
        Some(player) => Ok(player.wins.to_string()),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /players/{name} - record one win.
async fn post_win(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state.store.record_win(&name).map_err(internal_error)?;
    info!(player = %name, "win recorded");
    Ok(StatusCode::ACCEPTED)
}

fn internal_error(err: anyhow::Error) -> StatusCode {
    error!(error = %format!("{err:#}"), "league store failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, Response, header};
    use league::core::league::Player;
    use league::io::player_store::FileSystemPlayerStore;
    use league::test_support::StubPlayerStore;
    use tower::ServiceExt;

    use super::*;

    fn app(state: AppState) -> Router {
        api_router().with_state(state)
    }

    async fn send(state: &AppState, method: Method, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        app(state.clone()).oneshot(request).await.expect("response")
    }

    async fn body_string(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8")
    }

    fn league_from_body(body: &str) -> Vec<Player> {
        serde_json::from_str(body).expect("league json")
    }

    #[tokio::test]
    async fn returns_player_scores() {
        let state = AppState::new(StubPlayerStore::with_scores(&[
            ("Pepper", 20),
            ("Floyd", 10),
        ]));

        let response = send(&state, Method::GET, "/players/Pepper").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "20");

        let response = send(&state, Method::GET, "/players/Floyd").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "10");
    }

    /// Ensures an unknown player maps to 404, not a zero score.
    #[tokio::test]
    async fn returns_404_on_missing_players() {
        let state = AppState::new(StubPlayerStore::with_scores(&[("Pepper", 20)]));

        let response = send(&state, Method::GET, "/players/Apollo").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn records_wins_on_post() {
        let store = std::sync::Arc::new(StubPlayerStore::default());
        let state = AppState {
            store: store.clone(),
        };

        let response = send(&state, Method::POST, "/players/Pepper").await;

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(store.win_calls(), vec!["Pepper".to_string()]);
    }

    /// Verifies `/league` serves the store's table as JSON with a JSON content type.
    #[tokio::test]
    async fn returns_league_table_as_json() {
        let wanted = vec![
            Player::new("Cleo", 32),
            Player::new("Chris", 20),
            Player::new("Tiest", 14),
        ];
        let state = AppState::new(StubPlayerStore::with_league(League::new(wanted.clone())));

        let response = send(&state, Method::GET, "/league").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(league_from_body(&body_string(response).await), wanted);
    }

    /// Verifies POST → GET against a real file-backed store.
    ///
    /// Three wins for Pepper must show up in both the score and the league.
    #[tokio::test]
    async fn recording_wins_and_retrieving_them() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("game.db.json");
        std::fs::write(&path, "[]").expect("write database");
        let state = AppState::new(FileSystemPlayerStore::open(&path).expect("open store"));

        for _ in 0..3 {
            let response = send(&state, Method::POST, "/players/Pepper").await;
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }

        let response = send(&state, Method::GET, "/players/Pepper").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "3");

        let response = send(&state, Method::GET, "/league").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            league_from_body(&body_string(response).await),
            vec![Player::new("Pepper", 3)]
        );
    }

    /// Verifies a storage failure surfaces as 500 and records nothing.
    #[tokio::test]
    async fn failed_write_maps_to_500() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("game.db.json");
        let state = AppState::new(FileSystemPlayerStore::open(&path).expect("open store"));
        std::fs::create_dir_all(temp.path().join("game.db.json.tmp")).expect("block temp path");

        let response = send(&state, Method::POST, "/players/Pepper").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = send(&state, Method::GET, "/players/Pepper").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
