//! Fetch → load → export, run once.

use crate::config::Config;
use crate::error::Result;
use crate::export::export_csv;
use crate::fetch::Fetcher;
use crate::loader::load_table;
use std::path::PathBuf;
use tracing::info;

/// Download the catalog, convert it and write the CSV
///
/// Each stage starts only after the previous one has finished. The first error
/// ends the run.
///
/// # Returns
///
/// Path of the written CSV file
///
/// # Examples
///
/// ```no_run
/// use apogee_csv::{Config, run};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let csv_path = run(&Config::default()).await?;
///     println!("wrote {}", csv_path.display());
///     Ok(())
/// }
/// ```
pub async fn run(config: &Config) -> Result<PathBuf> {
    info!("Downloading allStar file (this will take a few minutes)...");
    let fetcher = Fetcher::new(&config.fetch)?;
    let fits_path = fetcher
        .url_write(&config.source_url, &config.data_dir)
        .await?;

    info!("Importing allStar fits file...");
    let mut catalog = load_table(&fits_path, config.hdu)?;

    info!("Exporting to CSV...");
    let csv_path = config.csv_path();
    export_csv(&mut catalog, &csv_path)?;

    info!("Done!");
    Ok(csv_path)
}
