use axum::{extract::State, Json};

use crate::{handlers::AppError, state::AppState};

/// Every sitemap path, for static generation (GET /api/paths).
pub async fn list_paths(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let paths = state.paths.paths().await?;
    tracing::info!(count = paths.len(), "Listed static paths");
    Ok(Json(paths))
}
