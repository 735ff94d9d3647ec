//! Repository implementations module.
//!
//! - `local`: In-memory implementation holding the tables loaded at startup
pub mod local;

pub use local::LocalRepository;
