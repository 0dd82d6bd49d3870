use axum::extract::State;
use axum::http::StatusCode;

use super::error::ApiError;
use super::extractor::ValidatedJson;
use super::state::AppState;
use crate::domain::{CostPayload, ForecastPayload};
use crate::metrics::IngestionMetrics;

/// `POST /api/v1/metrics/cost`.
pub async fn ingest_cost(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CostPayload>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.aggregator.on_cost(payload).await?;
    IngestionMetrics::record_cost_accepted();
    Ok((StatusCode::CREATED, "Cost payload accepted"))
}

/// `POST /api/v1/metrics/forecast`.
pub async fn ingest_forecast(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ForecastPayload>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.aggregator.on_forecast(payload).await?;
    IngestionMetrics::record_forecast_accepted();
    Ok((StatusCode::CREATED, "Forecast payload accepted"))
}
