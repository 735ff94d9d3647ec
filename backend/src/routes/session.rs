use serde::{Deserialize, Serialize};

use crate::api::SessionId;
use crate::models::{ActivePanel, PanelFlags};

// =========================================================
// Session types + routes
// =========================================================

/// Current panel state of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub active_panel: ActivePanel,
    pub panels: PanelFlags,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub const CREATE_SESSION: &str = "/sessions";
pub const GET_SESSION: &str = "/sessions/{session_id}";
pub const DELETE_SESSION: &str = "/sessions/{session_id}";
pub const ACTIVATE_PANEL: &str = "/sessions/{session_id}/panels/{category}";
pub const RESET_PANELS: &str = "/sessions/{session_id}/panels";
