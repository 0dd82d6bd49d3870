use axum::routing::post;
use axum::Router;

use super::handlers::{ingest_cost, ingest_forecast};
use super::state::AppState;

/// The whole of the hub's HTTP surface: two routes, no others.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/metrics/cost", post(ingest_cost))
        .route("/api/v1/metrics/forecast", post(ingest_forecast))
        .with_state(state)
}
