use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::HubError;
use crate::metrics::IngestionMetrics;

/// HTTP-facing error wrapper. Translates the domain taxonomy into the
/// exact status codes and response bodies the wire contract names —
/// nothing about a background evaluation failure is ever surfaced
/// here, since evaluation runs after the response is sent.
pub struct ApiError(HubError);

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            HubError::Decode(_) => (StatusCode::BAD_REQUEST, "Invalid JSON format"),
            HubError::Validation(_) => (StatusCode::BAD_REQUEST, "Bad request"),
            HubError::SnapshotAbsent => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save"),
            HubError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save"),
        };

        let kind = match &self.0 {
            HubError::Decode(_) => "decode",
            HubError::Validation(_) => "validation",
            HubError::SnapshotAbsent => "snapshot_absent",
            HubError::Store(_) => "store",
        };
        IngestionMetrics::record_rejected(kind);

        tracing::warn!(error = %self.0, status = %status, "request rejected");
        (status, body).into_response()
    }
}
