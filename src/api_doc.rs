use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{ChargeResponse, CreateChargeRequest, MarkPaidResponse, StatusResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-postgres-cobrancas API",
        version = "1.0.0",
        description = "Installment billing tracker backed by PostgreSQL"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::pay::pay_handler
    ),
    components(
        schemas(
            CreateChargeRequest,
            ChargeResponse,
            StatusResponse,
            MarkPaidResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "cobrancas", description = "Charge and installment operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{send, setup_test_app};
    use axum::http::StatusCode;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/health"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/cobrancas"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/cobrancas/{id}/pagar"));
        assert!(!paths.iter().any(|p| p.contains("init-db")));
    }

    #[tokio::test]
    async fn test_openapi_json_is_served() {
        let (app, _store) = setup_test_app();

        let (status, body) = send(&app, "GET", crate::routes::OPENAPI_JSON, None).await;

        assert_eq!(status, StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"]["/api/cobrancas"].is_object());
    }
}
