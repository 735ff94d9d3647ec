//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::{DashboardConfig, DatasetRepository};
use crate::services::{RenderOptions, SessionTracker};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded category tables
    pub repository: Arc<dyn DatasetRepository>,
    /// Per-user panel state
    pub sessions: SessionTracker,
    /// Render defaults; query parameters override the top-N values
    pub options: RenderOptions,
    /// Rows shown in each dataset preview
    pub preview_rows: usize,
}

impl AppState {
    /// Create a new application state with the given repository and built-in defaults.
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self::from_config(repository, &DashboardConfig::default())
    }

    /// Create application state using the configured render settings.
    pub fn from_config(repository: Arc<dyn DatasetRepository>, config: &DashboardConfig) -> Self {
        Self {
            repository,
            sessions: SessionTracker::new(),
            options: config.render_options(),
            preview_rows: config.dashboard.preview_rows,
        }
    }
}
