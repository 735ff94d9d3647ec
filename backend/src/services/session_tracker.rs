//! Session tracking for detail-panel state.
//!
//! This module provides a simple in-memory tracker holding one
//! [`SessionContext`] per dashboard user. Loaded tables are shared and
//! read-only; the panel selector is the only per-user mutable state.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{SessionId, SessionInfo};
use crate::models::{ActivePanel, Category, SessionContext};

/// Session state and metadata.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub context: SessionContext,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn info(&self) -> SessionInfo {
        let active_panel = self.context.active_panel();
        SessionInfo {
            session_id: self.session_id,
            active_panel,
            panels: active_panel.flags(),
            created_at: self.created_at,
        }
    }
}

/// In-memory session tracker.
#[derive(Clone)]
pub struct SessionTracker {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl SessionTracker {
    /// Create a new session tracker.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session in the `Idle` state.
    pub fn create_session(&self) -> Session {
        let session = Session {
            session_id: SessionId::new(),
            context: SessionContext::new(),
            created_at: chrono::Utc::now(),
        };
        self.sessions
            .write()
            .insert(session.session_id, session.clone());
        log::debug!("Created session {}", session.session_id);
        session
    }

    /// Get a session by ID.
    pub fn get_session(&self, session_id: SessionId) -> Option<Session> {
        self.sessions.read().get(&session_id).cloned()
    }

    /// Snapshot of a session's context for one render pass.
    pub fn context(&self, session_id: SessionId) -> Option<SessionContext> {
        self.sessions.read().get(&session_id).map(|s| s.context)
    }

    /// Expand the detail panel of `category` for a session.
    pub fn activate_panel(&self, session_id: SessionId, category: Category) -> Option<Session> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(&session_id)?;
        let panel = session.context.activate(category);
        log::debug!("Session {} activated {:?}", session_id, panel);
        Some(session.clone())
    }

    /// Collapse every detail panel of a session.
    pub fn reset_panels(&self, session_id: SessionId) -> Option<Session> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(&session_id)?;
        session.context.reset();
        Some(session.clone())
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove_session(&self, session_id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&session_id).is_some();
        if removed {
            log::debug!("Removed session {}", session_id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Active panel of a session, `Idle` for unknown sessions.
    pub fn active_panel(&self, session_id: SessionId) -> ActivePanel {
        self.context(session_id)
            .map(|c| c.active_panel())
            .unwrap_or_default()
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}
