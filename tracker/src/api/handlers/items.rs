//! Item lookup.
//!
//! `GET /item/{id}` resolves an opaque identifier (a repository path such as
//! `a1/b2/c3` or a catalogue identifier such as `MSS 1234`) and returns a
//! provenance summary for every resource it names.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::AppState;
use crate::error::Result;
use crate::models::ResourceSummary;

/// `GET /item/{id}`
///
/// Always a JSON array; an identifier that matches nothing yields `[]`.
#[utoipa::path(
    get,
    path = "/item/{id}",
    tag = "items",
    operation_id = "items.find",
    params(
        ("id" = String, Path, description = "Repository path or dc:identifier value; may contain '/'"),
    ),
    responses(
        (status = 200, description = "Summaries of every matching resource", body = Vec<ResourceSummary>),
        (status = 400, description = "Identifier cannot be used in a query"),
        (status = 502, description = "Triplestore unreachable or returned an invalid response"),
    )
)]
pub async fn find_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ResourceSummary>>> {
    let summaries = state.summaries.lookup(&id).await?;
    Ok(Json(summaries))
}
