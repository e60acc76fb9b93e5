use crate::error::{ApiError, ErrorResponse};
use crate::models::MarkPaidResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use std::num::IntErrorKind;

/// PUT /api/cobrancas/{id}/pagar handler - Mark one installment as paid
///
/// The count is incremented in a single statement, so concurrent calls on the
/// same charge are all counted. It is not capped at `total_parcelas`.
#[utoipa::path(
    put,
    path = routes::CHARGE_PAY,
    params(
        ("id" = i64, Path, description = "Charge id")
    ),
    responses(
        (status = 200, description = "Installment marked as paid", body = MarkPaidResponse),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "Charge not found, or id out of range", body = ErrorResponse),
        (status = 500, description = "Database error", body = String, content_type = "text/plain")
    ),
    tag = "cobrancas"
)]
pub async fn pay_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MarkPaidResponse>), ApiError> {
    // Ids are SERIAL, so an integer outside i32 can never match a row
    let id = match id_str.parse::<i32>() {
        Ok(id) => id,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(ApiError::ChargeNotFound(id_str));
        }
        Err(_) => return Err(ApiError::InvalidChargeId(id_str)),
    };

    match state.store.mark_installment_paid(id).await? {
        Some(paid) => {
            tracing::info!("Charge {} now has {} paid installments", id, paid);
            Ok((
                StatusCode::OK,
                Json(MarkPaidResponse {
                    status: "success".to_string(),
                    novas_parcelas_pagas: paid,
                }),
            ))
        }
        None => Err(ApiError::ChargeNotFound(id.to_string())),
    }
}
