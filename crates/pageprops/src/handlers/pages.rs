use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use pageprops_core::content::PageProps;

use crate::{handlers::AppError, resolver::PageRequest, state::AppState};

/// Query parameters for page requests.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub preview: bool,
}

/// Splits a catch-all path into slug segments, skipping empty ones.
fn slug_segments(slug: &str) -> Vec<String> {
    slug.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Props for the root page (GET /api/pages).
pub async fn root_page_props(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageProps>, AppError> {
    let request = PageRequest {
        slug: None,
        preview: query.preview,
    };
    Ok(Json(state.resolver.resolve(&request).await?))
}

/// Props for a page by slug (GET /api/pages/{*slug}).
pub async fn page_props(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageProps>, AppError> {
    let request = PageRequest {
        slug: Some(slug_segments(&slug)),
        preview: query.preview,
    };

    tracing::debug!(slug = %slug, preview = query.preview, "Resolving page props");

    Ok(Json(state.resolver.resolve(&request).await?))
}
