use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::sparql::QueryTemplate;

/// Health data returned by `GET /health`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub triplestore: TriplestoreStatus,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct TriplestoreStatus {
    pub status: String,
    pub endpoint: String,
}

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthData> {
    let probe = match QueryTemplate::new("ASK {}").render() {
        Ok(query) => state.triplestore.ask(&query).await,
        Err(e) => Err(e),
    };

    let triplestore_status = match probe {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Triplestore health probe failed");
            "error"
        }
    };

    Json(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        triplestore: TriplestoreStatus {
            status: triplestore_status.to_string(),
            endpoint: state.config.triplestore.url.clone(),
        },
    })
}
