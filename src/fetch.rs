//! Remote resource download.
//!
//! One GET per call, no retries. A `.gz` payload is inflated in memory and saved
//! without its suffix; anything else is saved byte-for-byte.

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use flate2::read::MultiGzDecoder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Compression formats recognized by file-name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// gzip (`.gz`)
    Gzip,
}

impl Compression {
    /// File-name suffix that marks this compression format
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Gzip => ".gz",
        }
    }

    /// Detect compression from a file name.
    ///
    /// Returns the format and the file name with the suffix stripped, or `None`
    /// if the name carries no recognized suffix.
    pub fn from_filename(name: &str) -> Option<(Self, &str)> {
        [Self::Gzip].into_iter().find_map(|compression| {
            name.strip_suffix(compression.suffix())
                .filter(|stem| !stem.is_empty())
                .map(|stem| (compression, stem))
        })
    }

    /// Decompress a complete payload held in memory
    pub fn decompress(self, payload: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            Self::Gzip => {
                let mut out = Vec::new();
                MultiGzDecoder::new(payload).read_to_end(&mut out)?;
                Ok(out)
            }
        }
    }
}

/// Derive the local file name from the final path segment of a URL
///
/// # Examples
///
/// ```
/// use apogee_csv::fetch::filename_from_url;
///
/// let name = filename_from_url("https://data.sdss.org/sas/dr17/allStar.fits.gz").unwrap();
/// assert_eq!(name, "allStar.fits.gz");
/// ```
pub fn filename_from_url(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let last_segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| Error::InvalidUrl {
            url: url.to_string(),
            reason: "URL path has no file name".to_string(),
        })?;

    let decoded = urlencoding::decode(last_segment).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: format!("file name is not valid UTF-8 after percent-decoding: {}", e),
    })?;

    if decoded.contains('/') || decoded == "." || decoded == ".." {
        return Err(Error::InvalidUrl {
            url: url.to_string(),
            reason: format!("'{}' is not a usable file name", decoded),
        });
    }

    Ok(decoded.into_owned())
}

/// HTTP downloader that writes resources to a local directory
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher from HTTP client settings
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Retrieve `url` and save it under `save_dir`, decompressing if needed
    ///
    /// The file is named after the URL's final path segment, minus a recognized
    /// compression suffix. `save_dir` is created if missing and an existing file
    /// is overwritten.
    ///
    /// # Returns
    ///
    /// The path of the written file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the URL has no usable file name
    /// - the request fails or the server answers with a non-success status
    /// - a compressed payload is corrupt
    /// - the file cannot be written
    pub async fn url_write(&self, url: &str, save_dir: &Path) -> Result<PathBuf> {
        let fname = filename_from_url(url)?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "response body received");

        let (payload, fname) = match Compression::from_filename(&fname) {
            Some((compression, stem)) => {
                let inflated =
                    compression
                        .decompress(&body)
                        .map_err(|source| Error::Decompress {
                            name: fname.clone(),
                            source,
                        })?;
                debug!(
                    compressed = body.len(),
                    decompressed = inflated.len(),
                    ?compression,
                    "payload decompressed"
                );
                (inflated, stem.to_string())
            }
            None => (body.to_vec(), fname),
        };

        tokio::fs::create_dir_all(save_dir).await?;
        let path = save_dir.join(&fname);
        tokio::fs::write(&path, &payload).await?;

        info!(path = %path.display(), bytes = payload.len(), "saved download");
        Ok(path)
    }
}
