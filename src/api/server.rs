use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use super::state::AppState;

/// Listen address is fixed — the hub has no other ingress and nothing
/// configures it at runtime.
pub const LISTEN_PORT: u16 = 8008;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Assemble the router with timeout, CORS, and request tracing layered
/// over the route table.
pub fn build_router(state: AppState) -> Router {
    routes::router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
    )
}

pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{LISTEN_PORT}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "metric hub listening");

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
