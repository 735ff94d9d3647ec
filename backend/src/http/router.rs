//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{category, detail, overview, session};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The dashboard front end may be served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Introduction tab
        .route(overview::LIST_DATASETS, get(handlers::list_datasets))
        .route(overview::GET_OVERVIEW, get(handlers::get_overview))
        // Category tabs
        .route(
            category::GET_CATEGORY_OVERVIEW,
            get(handlers::get_category_overview),
        )
        .route(category::GET_FILTER_BOUNDS, get(handlers::get_filter_bounds))
        // Sessions and panels
        .route(session::CREATE_SESSION, post(handlers::create_session))
        .route(session::GET_SESSION, get(handlers::get_session))
        .route(session::DELETE_SESSION, delete(handlers::delete_session))
        .route(session::ACTIVATE_PANEL, post(handlers::activate_panel))
        .route(session::RESET_PANELS, delete(handlers::reset_panels))
        .route(detail::GET_VIEW, get(handlers::get_view));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatasetRepository, LocalRepository};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn DatasetRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
    }
}
