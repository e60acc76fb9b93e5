use crate::error::ApiError;
use crate::models::ChargeResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/cobrancas handler - List all charges
///
/// Charges come back ordered by `data_inicio` compared as plain strings, so
/// `"2024-10-01"` sorts before `"2024-2-01"`. Dates are never parsed.
#[utoipa::path(
    get,
    path = routes::CHARGES,
    responses(
        (status = 200, description = "All charges ordered by start date", body = Vec<ChargeResponse>),
        (status = 500, description = "Database error", body = String, content_type = "text/plain")
    ),
    tag = "cobrancas"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ChargeResponse>>), ApiError> {
    let charges = state.store.list_by_start_date().await?;

    let data: Vec<ChargeResponse> = charges.into_iter().map(ChargeResponse::from).collect();

    tracing::info!("Listed {} charges", data.len());
    Ok((StatusCode::OK, Json(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{ana, send, setup_test_app};

    #[tokio::test]
    async fn test_list_endpoint_empty() {
        let (app, _store) = setup_test_app();

        let (status, body) = send(&app, "GET", "/api/cobrancas", None).await;

        assert_eq!(status, StatusCode::OK);
        let response_json: Vec<ChargeResponse> = serde_json::from_slice(&body).unwrap();
        assert!(response_json.is_empty());
    }

    #[tokio::test]
    async fn test_list_endpoint_after_create() {
        let (app, _store) = setup_test_app();

        let (status, _) = send(&app, "POST", "/api/cobrancas", Some(ana())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "GET", "/api/cobrancas", None).await;
        assert_eq!(status, StatusCode::OK);

        let response_json: Vec<ChargeResponse> = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            response_json,
            vec![ChargeResponse {
                id: 1,
                nome_cliente: "Ana".to_string(),
                telefone: Some("123".to_string()),
                descricao: Some("x".to_string()),
                valor: 100.0,
                total_parcelas: 4,
                parcelas_pagas: 0,
                frequencia: "monthly".to_string(),
                data_inicio: "2024-01-01".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_endpoint_orders_by_start_date_string() {
        let (app, _store) = setup_test_app();

        for date in ["2024-2-1", "2024-10-1", "2024-02-01", "2024-01-15"] {
            let mut charge = ana();
            charge["dataInicio"] = serde_json::json!(date);
            let (status, _) = send(&app, "POST", "/api/cobrancas", Some(charge)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (_, body) = send(&app, "GET", "/api/cobrancas", None).await;
        let dates: Vec<String> = serde_json::from_slice::<Vec<ChargeResponse>>(&body)
            .unwrap()
            .into_iter()
            .map(|c| c.data_inicio)
            .collect();

        // String order, not calendar order: October "2024-10-1" lands before February "2024-2-1"
        assert_eq!(dates, vec!["2024-01-15", "2024-02-01", "2024-10-1", "2024-2-1"]);
    }
}
