//! # ytdash
//!
//! Backend for an interactive YouTube analytics dashboard.
//!
//! Three category datasets (gaming, movies, music) are loaded from CSV once at
//! startup. Each category tab shows summary metrics, a daily mean-views series
//! and top-channel rankings, and a per-session drill-down panel applies
//! date, channel, views and duration filters to the table.
//!
//! ## Architecture
//!
//! - [`io`]: CSV loading into typed tables
//! - [`models`]: Video records, filter criteria and per-session panel state
//! - [`services`]: Filtering, aggregation, statistics and the render pass
//! - [`routes`]: Serializable view types
//! - [`api`]: Consolidated DTO re-exports
//! - [`db`]: Repository of loaded tables, checksums and configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use ytdash::io::DatasetLoader;
//! use ytdash::models::{ActivePanel, Category, FilterCriteria};
//! use ytdash::services::{render, RenderOptions};
//!
//! let csv = "title,description,publishedDate,channelName,views,duration,isShort\n\
//!            Intro,,2024-01-05T10:00:00Z,Lofi Girl,120,3600,False\n";
//! let table = DatasetLoader::load_from_str(csv).unwrap();
//! let view = render(
//!     Category::Music,
//!     &table,
//!     &FilterCriteria::full_range(&table),
//!     ActivePanel::MusicDetail,
//!     &RenderOptions::default(),
//! );
//! assert_eq!(view.overview.summary.total_views, 120);
//! assert!(view.detail.is_some());
//! ```

// RepositoryError carries an ErrorContext alongside its message
#![allow(clippy::result_large_err)]

pub mod api;
pub mod db;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
