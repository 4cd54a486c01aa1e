//! Configuration types for apogee-csv
//!
//! The binary runs with [`Config::default`], which carries the catalog URL and
//! output locations as constants. The struct is serde-friendly so embedders and
//! tests can override individual fields.

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// File name of the DR17 allStarLite catalog on the SDSS server
pub const ALLSTAR_FNAME: &str = "allStarLite-dr17-synspec_rev1.fits";

/// Directory on the SDSS science archive server that holds the catalog
pub const ALLSTAR_BASE_URL: &str =
    "https://data.sdss.org/sas/dr17/apogee/spectro/aspcap/dr17/synspec_rev1";

/// Local directory for downloaded and generated files
pub const DATA_DIR: &str = "data";

/// Name of the generated CSV file
pub const CSV_FNAME: &str = "APOGEEdata.csv";

/// HTTP client settings for the catalog download
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout (None = wait indefinitely)
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// User-Agent header override (None = reqwest default)
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Top-level configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// URL of the FITS catalog to download
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Directory receiving the downloaded file and the CSV (default: "data")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Output CSV file name inside `data_dir` (default: "APOGEEdata.csv")
    #[serde(default = "default_csv_filename")]
    pub csv_filename: String,

    /// Index of the HDU holding the binary table (default: 1, the first extension)
    #[serde(default = "default_hdu")]
    pub hdu: usize,

    /// HTTP client settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            data_dir: default_data_dir(),
            csv_filename: default_csv_filename(),
            hdu: default_hdu(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// Full path of the CSV file this configuration produces
    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_filename)
    }
}

fn default_source_url() -> String {
    format!("{}/{}", ALLSTAR_BASE_URL, ALLSTAR_FNAME)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

fn default_csv_filename() -> String {
    CSV_FNAME.to_string()
}

fn default_hdu() -> usize {
    1
}
