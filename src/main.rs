//! Download the APOGEE DR17 allStar catalog and convert it to CSV.
//!
//! Takes no arguments; writes `data/allStarLite-dr17-synspec_rev1.fits` and
//! `data/APOGEEdata.csv` relative to the working directory. Set `RUST_LOG` to
//! change log verbosity (default `info`).

use apogee_csv::{Config, run};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run(&Config::default()).await?;
    Ok(())
}
