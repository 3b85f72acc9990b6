pub mod api;
pub mod upstream;

pub use api::ApiError;
pub use upstream::UpstreamError;

use avmon_api::models::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every failure is reported as a 500; the body carries the distinction.
        let body = match &self {
            ApiError::UpstreamError(e) => {
                tracing::error!(status = ?e.status(), "Upstream error: {}", e);
                ErrorResponse::new(e.to_string(), e.details().cloned())
            }
            ApiError::InvalidRoomId(_) => {
                tracing::warn!("Rejected request: {}", self);
                ErrorResponse::new(self.to_string(), None)
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                ErrorResponse::new(format!("Internal server error ({error_id})"), None)
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
