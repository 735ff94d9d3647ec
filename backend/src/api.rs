//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::category::CategoryOverview;
pub use crate::routes::category::ChannelMetric;
pub use crate::routes::category::DailyMeanPoint;
pub use crate::routes::category::SummaryMetrics;
pub use crate::routes::category::TopChannels;
pub use crate::routes::detail::DetailView;
pub use crate::routes::detail::FilterBounds;
pub use crate::routes::detail::ScatterPoint;
pub use crate::routes::detail::ViewModel;
pub use crate::routes::detail::ViewWarning;
pub use crate::routes::overview::ColumnStats;
pub use crate::routes::overview::DatasetInfo;
pub use crate::routes::overview::DatasetOverview;
pub use crate::routes::overview::VideoRow;
pub use crate::routes::session::SessionInfo;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Session identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SessionId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_round_trip_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
