use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Body returned when a charge id does not exist
pub const CHARGE_NOT_FOUND_MESSAGE: &str = "Cobrança não encontrada";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Not-found and malformed ids get a JSON `{"error": ...}` body. Everything
/// else is `Unhandled`: a 500 whose body is the raw error text.
#[derive(Debug)]
pub enum ApiError {
    /// Path id is not an integer
    InvalidChargeId(String),
    /// No charge with this id, including integers outside the `SERIAL` range
    ChargeNotFound(String),
    /// Missing or ill-typed input field, or a store failure
    Unhandled(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidChargeId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid charge id: expected an integer, got '{}'", id),
            ),
            ApiError::ChargeNotFound(id) => {
                tracing::info!("Charge not found with id: {}", id);
                (StatusCode::NOT_FOUND, CHARGE_NOT_FOUND_MESSAGE.to_string())
            }
            ApiError::Unhandled(err) => {
                tracing::error!(error = ?err, "Unhandled error");
                return (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err)).into_response();
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Unhandled(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Unhandled(err.into())
    }
}
