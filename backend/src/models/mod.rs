//! Core domain types: video tables, filter criteria and panel state.

pub mod criteria;
pub mod session;
pub mod video;

pub use criteria::{DateRange, FilterCriteria, Predicate, ValueRange};
pub use session::{ActivePanel, PanelFlags, SessionContext};
pub use video::{Category, VideoRecord, VideoTable};
