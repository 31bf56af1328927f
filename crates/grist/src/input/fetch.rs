//! Raw byte loading from local paths and URLs.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{GristError, Result};

/// Timeout for remote fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns true if the source string names a remote URL.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load raw bytes from a file path or http(s) URL.
pub fn load_bytes(source: &str) -> Result<Vec<u8>> {
    if is_url(source) {
        fetch_url(source)
    } else {
        let path = Path::new(source);
        fs::read(path).map_err(|e| GristError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let wrap = |e: reqwest::Error| GristError::Fetch {
        url: url.to_string(),
        source: e,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(wrap)?;

    let response = client.get(url).send().map_err(wrap)?;
    let response = response.error_for_status().map_err(wrap)?;
    let body = response.bytes().map_err(wrap)?;

    Ok(body.to_vec())
}
