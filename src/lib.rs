//! # apogee-csv
//!
//! Downloads the APOGEE DR17 `allStarLite` catalog from the SDSS science
//! archive and converts its FITS binary table into a CSV file.
//!
//! ## Pipeline
//!
//! 1. [`fetch`] - one HTTP GET, optional gzip inflation, write to `data/`
//! 2. [`loader`] - read the binary table HDU with cfitsio, drop array-valued columns
//! 3. [`export`] - decode byte strings as UTF-8, write comma-separated text
//!
//! ## Quick Start
//!
//! ```no_run
//! use apogee_csv::{Config, run};
//! use std::path::PathBuf;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         data_dir: PathBuf::from("/scratch/apogee"),
//!         ..Default::default()
//!     };
//!     run(&config).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// CSV export
pub mod export;
/// Remote resource download
pub mod fetch;
/// FITS file to table loading
pub mod loader;
/// End-to-end run
pub mod pipeline;
/// In-memory tables
pub mod table;


// Re-export commonly used types
pub use config::{Config, FetchConfig};
pub use error::{Error, Result};
pub use export::{decode_text_columns, export_csv, write_csv};
pub use fetch::{Compression, Fetcher};
pub use loader::load_table;
pub use pipeline::run;
pub use table::{CellShape, Column, ColumnData, Table};
