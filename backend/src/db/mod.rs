//! Dataset storage.
//!
//! The three category tables are loaded once at startup and then served
//! read-only through the [`DatasetRepository`] trait.
//!
//! # Layout
//! - `repository`: Trait definition and error types
//! - `repositories::local`: In-memory implementation
//! - `factory`: Loads the configured CSV files into a repository
//! - `repo_config`: `dashboard.toml` configuration
//! - `checksum`: SHA-256 of dataset sources

pub mod checksum;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;

pub use checksum::{calculate_checksum, calculate_table_checksum};
pub use factory::RepositoryFactory;
pub use repo_config::{
    DashboardConfig, DashboardSettings, DatasetSettings, ServerSettings, CONFIG_ENV,
};
pub use repositories::LocalRepository;
pub use repository::{DatasetRepository, ErrorContext, RepositoryError, RepositoryResult};
