//! Dataset loading.
//!
//! Reads the three category CSV files into immutable
//! [`VideoTable`](crate::models::VideoTable)s. The
//! only transformation applied at load time is truncating `publishedDate`
//! to a calendar date.
//!
//! # Example
//!
//! ```no_run
//! use ytdash::io::DatasetLoader;
//! use ytdash::models::Category;
//! use std::path::Path;
//!
//! let result = DatasetLoader::load_from_file(Category::Gaming, Path::new("gaming.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} videos", result.num_rows);
//! ```

pub mod error;
pub mod loaders;


pub use error::{LoadError, LoadResult};
pub use loaders::{parse_published_date, DatasetLoadResult, DatasetLoader, REQUIRED_COLUMNS};
