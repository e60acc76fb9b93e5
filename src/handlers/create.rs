use crate::error::ApiError;
use crate::models::{CreateChargeRequest, StatusResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /api/cobrancas handler - Create a charge
///
/// There is no validation layer: a missing or ill-typed field is reported as
/// a plain-text 500, the same as a database failure.
#[utoipa::path(
    post,
    path = routes::CHARGES,
    request_body = CreateChargeRequest,
    responses(
        (status = 201, description = "Charge created", body = StatusResponse),
        (status = 500, description = "Missing field or database error", body = String, content_type = "text/plain")
    ),
    tag = "cobrancas"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let request: CreateChargeRequest = serde_json::from_value(payload)?;

    let id = state.store.insert(request.into()).await?;

    tracing::info!("Successfully created charge with id: {}", id);
    Ok((StatusCode::CREATED, Json(StatusResponse::success())))
}
