use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        pages::{page_props, root_page_props},
        paths::list_paths,
        preview::{validate_preview, PREVIEW_KEY_HEADER},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Read-only API consumed by the front-end build and preview mode
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(PREVIEW_KEY_HEADER),
        ]);

    let api_routes = Router::new()
        .route("/pages", get(root_page_props))
        .route("/pages/{*slug}", get(page_props))
        .route("/paths", get(list_paths))
        .route("/preview", get(validate_preview))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
