//! Configurations pointing the pipeline at a mock server

use apogee_csv::Config;
use tempfile::TempDir;

/// Config that downloads `remote_path` from `server_uri` into a fresh temp dir
///
/// Returns the config and the tempdir (which must be kept alive).
pub fn mock_config(server_uri: &str, remote_path: &str) -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let config = Config {
        source_url: format!("{}{}", server_uri, remote_path),
        data_dir: temp_dir.path().join("data"),
        ..Default::default()
    };
    (config, temp_dir)
}
