//! Blocking download of dataset archives (feature `download`).
//!
//! A file already present under the target directory is reused when it
//! verifies; otherwise it is fetched again and checked against its digest.

use super::checksum::{Checksum, verify_integrity};
use crate::error::{LabelNoiseError, Result};
use crate::utils::expand_home;
use reqwest::blocking::Client;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Download `url` to `root/filename` unless a verified copy already exists.
///
/// `root` may start with `~` and is created if missing. If the download of an
/// `https` URL fails with a connection error it is retried once over plain
/// `http`. The downloaded file must match `checksum`.
///
/// # Errors
///
/// - [`LabelNoiseError::IoError`] if the directory or file cannot be written.
/// - [`LabelNoiseError::DownloadError`] if the request fails.
/// - [`LabelNoiseError::ChecksumMismatch`] if the downloaded file does not
///   verify.
pub fn fetch(
    url: &str,
    root: impl AsRef<Path>,
    filename: &str,
    checksum: &Checksum,
) -> Result<PathBuf> {
    let root = expand_home(root);
    std::fs::create_dir_all(&root)?;
    let fpath = root.join(filename);

    if verify_integrity(&fpath, checksum)? {
        info!(path = %fpath.display(), "Using downloaded and verified file");
        return Ok(fpath);
    }

    let client = Client::new();
    info!(url, path = %fpath.display(), "Downloading");
    let response = match client.get(url).send() {
        Ok(response) => response,
        Err(err) if err.is_connect() && url.starts_with("https:") => {
            let fallback = url.replacen("https:", "http:", 1);
            warn!(
                error = %err,
                url = %fallback,
                "Failed download, trying https -> http instead"
            );
            client.get(&fallback).send()?
        }
        Err(err) => return Err(err.into()),
    };
    let mut response = response.error_for_status()?;
    let mut file = File::create(&fpath)?;
    response.copy_to(&mut file)?;
    drop(file);

    let actual = checksum.digest_file(&fpath)?;
    if actual != checksum.expected_hex() {
        return Err(LabelNoiseError::ChecksumMismatch {
            path: fpath,
            expected: checksum.expected_hex(),
            actual,
        });
    }
    Ok(fpath)
}
