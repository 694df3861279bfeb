use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::state::AppState;

/// Header (or query parameter) carrying the preview key.
pub const PREVIEW_KEY_HEADER: &str = "agilitypreviewkey";

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub agilitypreviewkey: Option<String>,
}

/// Checks a preview request (GET /api/preview?slug=...).
///
/// The key is read from the `agilitypreviewkey` header, falling back to the
/// query string. Responds 200 or 401 with `{ error, message }`.
pub async fn validate_preview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PreviewQuery>,
) -> impl IntoResponse {
    let key = headers
        .get(PREVIEW_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or(query.agilitypreviewkey);
    let slug = query.slug.unwrap_or_else(|| "/".to_string());

    let validation = state.preview.validate(key.as_deref(), &slug).await;
    let status = if validation.error {
        StatusCode::UNAUTHORIZED
    } else {
        StatusCode::OK
    };

    (status, Json(validation))
}
