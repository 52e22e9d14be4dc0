//! The one HTTP route: `GET /api/grid`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use std::sync::Arc;
use sudoku_session::PuzzleSource;

/// Shared handle on the puzzle source backing the endpoint.
pub type SharedSource = Arc<dyn PuzzleSource + Send + Sync>;

pub fn router(source: SharedSource) -> Router {
    Router::new()
        .route("/api/grid", get(fetch_grid))
        .with_state(source)
}

/// Hand the client one random puzzle record.
///
/// Any failure collapses to the same bare 500 body; the client learns only
/// that the load failed, never what the store looks like inside. The detail
/// goes to the log instead.
async fn fetch_grid(State(source): State<SharedSource>) -> Response {
    match source.fetch_one() {
        Ok(Some(record)) => Json(record).into_response(),
        Ok(None) => {
            tracing::error!("puzzle store has no records");
            load_failed()
        }
        Err(err) => {
            tracing::error!(error = %err, "puzzle fetch failed");
            load_failed()
        }
    }
}

fn load_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to load puzzle" })),
    )
        .into_response()
}
