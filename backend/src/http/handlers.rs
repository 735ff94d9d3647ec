//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Render passes run on the blocking pool since they scan
//! whole tables.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CategoryOverview, DatasetListResponse, DatasetOverview, FilterBounds, HealthResponse,
    OverviewResponse, SessionInfo, TopNQuery, ViewModel, ViewQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::SessionId;
use crate::models::Category;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_category(raw: &str) -> Result<Category, AppError> {
    raw.parse().map_err(AppError::BadRequest)
}

fn parse_session_id(raw: &str) -> Result<SessionId, AppError> {
    raw.parse()
        .map_err(|e| AppError::BadRequest(format!("Invalid session id '{}': {}", raw, e)))
}

fn unknown_session(session_id: SessionId) -> AppError {
    AppError::NotFound(format!("Session {} not found", session_id))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether all three category datasets are loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let status = if state.repository.health_check() {
        "ok"
    } else {
        "degraded"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        datasets_loaded: state.repository.list_datasets().len(),
    }))
}

// =============================================================================
// Datasets
// =============================================================================

/// GET /v1/datasets
///
/// Row count, source and checksum of every loaded dataset.
pub async fn list_datasets(State(state): State<AppState>) -> HandlerResult<DatasetListResponse> {
    let datasets = state.repository.list_datasets();
    let total = datasets.len();
    Ok(Json(DatasetListResponse { datasets, total }))
}

/// GET /v1/overview
///
/// Introduction tab: description statistics and preview for each category.
pub async fn get_overview(State(state): State<AppState>) -> HandlerResult<OverviewResponse> {
    let mut tables = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        tables.push((category, state.repository.table(category)?));
    }
    let preview_rows = state.preview_rows;

    let datasets: Vec<DatasetOverview> = tokio::task::spawn_blocking(move || {
        tables
            .iter()
            .map(|(category, table)| services::dataset_overview(*category, table, preview_rows))
            .collect()
    })
    .await?;

    Ok(Json(OverviewResponse { datasets }))
}

// =============================================================================
// Category tabs
// =============================================================================

/// GET /v1/categories/{category}
///
/// Always-visible section of a category tab over the unfiltered table.
pub async fn get_category_overview(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<TopNQuery>,
) -> HandlerResult<CategoryOverview> {
    let category = parse_category(&category)?;
    let table = state.repository.table(category)?;
    let options = query.apply(&state.options);

    let overview = tokio::task::spawn_blocking(move || {
        services::category_overview(category, &table, &options)
    })
    .await?;

    Ok(Json(overview))
}

/// GET /v1/categories/{category}/filters
///
/// Observed bounds and channel options for the filter widgets.
pub async fn get_filter_bounds(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> HandlerResult<FilterBounds> {
    let category = parse_category(&category)?;
    let table = state.repository.table(category)?;
    Ok(Json(services::filter_bounds(category, &table)))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Start a session with every detail panel collapsed.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionInfo>), AppError> {
    let session = state.sessions.create_session();
    tracing::info!(session_id = %session.session_id, "session created");
    Ok((StatusCode::CREATED, Json(session.info())))
}

/// GET /v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionInfo> {
    let session_id = parse_session_id(&session_id)?;
    state
        .sessions
        .get_session(session_id)
        .map(|s| Json(s.info()))
        .ok_or_else(|| unknown_session(session_id))
}

/// DELETE /v1/sessions/{session_id}
///
/// End a session and release its state.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let session_id = parse_session_id(&session_id)?;
    if state.sessions.remove_session(session_id) {
        tracing::info!(session_id = %session_id, "session removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(unknown_session(session_id))
    }
}

/// POST /v1/sessions/{session_id}/panels/{category}
///
/// Expand one category's detail panel, collapsing the others.
pub async fn activate_panel(
    State(state): State<AppState>,
    Path((session_id, category)): Path<(String, String)>,
) -> HandlerResult<SessionInfo> {
    let session_id = parse_session_id(&session_id)?;
    let category = parse_category(&category)?;
    state
        .sessions
        .activate_panel(session_id, category)
        .map(|s| Json(s.info()))
        .ok_or_else(|| unknown_session(session_id))
}

/// DELETE /v1/sessions/{session_id}/panels
///
/// Collapse every detail panel.
pub async fn reset_panels(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionInfo> {
    let session_id = parse_session_id(&session_id)?;
    state
        .sessions
        .reset_panels(session_id)
        .map(|s| Json(s.info()))
        .ok_or_else(|| unknown_session(session_id))
}

/// GET /v1/sessions/{session_id}/categories/{category}/view
///
/// Full view model of a category tab as seen by one session. The detail
/// section is present only when this category's panel is active.
pub async fn get_view(
    State(state): State<AppState>,
    Path((session_id, category)): Path<(String, String)>,
    Query(query): Query<ViewQuery>,
) -> HandlerResult<ViewModel> {
    let session_id = parse_session_id(&session_id)?;
    let category = parse_category(&category)?;
    let context = state
        .sessions
        .context(session_id)
        .ok_or_else(|| unknown_session(session_id))?;

    let table = state.repository.table(category)?;
    let bounds = services::filter_bounds(category, &table);
    let criteria = query.to_criteria(&bounds).map_err(AppError::BadRequest)?;
    let options = query.top_n().apply(&state.options);
    let active_panel = context.active_panel();

    let view = tokio::task::spawn_blocking(move || {
        services::render(category, &table, &criteria, active_panel, &options)
    })
    .await?;

    Ok(Json(view))
}
