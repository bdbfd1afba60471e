//! Dataset file utilities.
//!
//! Helpers used by dataset-preparation pipelines around noise injection:
//! checksum verification, download-if-missing and directory listing.

mod checksum;
#[cfg(feature = "download")]
mod download;
mod listing;

pub use checksum::{Checksum, verify_integrity};
#[cfg(feature = "download")]
pub use download::fetch;
pub use listing::{list_files_with_suffix, list_subdirectories};
