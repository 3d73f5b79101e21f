use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Preservation Tracker API",
        version = "1.0.0",
        description = "Resolves identifiers to preservation-repository resources and reports their provenance.",
    ),
    paths(handlers::health::health_check, handlers::items::find_item,),
    components(schemas(
        models::ResourceSummary,
        models::EventRecord,
        models::GraphNode,
        models::GraphEdge,
        handlers::health::HealthData,
        handlers::health::TriplestoreStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "items", description = "Identifier resolution and provenance summaries"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
