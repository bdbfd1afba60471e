//! Small parsing helpers shared by the dataset utilities and the CLI.

use crate::error::{LabelNoiseError, Result};
use ndarray::Array1;
use std::path::{Path, PathBuf};

/// Parse `"true"` or `"false"`, ignoring ASCII case.
///
/// ```
/// use labelnoise::utils::parse_bool_str;
///
/// assert!(parse_bool_str("True").unwrap());
/// assert!(!parse_bool_str("FALSE").unwrap());
/// assert!(parse_bool_str("yes").is_err());
/// ```
pub fn parse_bool_str(s: &str) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LabelNoiseError::InvalidBoolean(s.to_string())),
    }
}

/// Parse a label vector from text.
///
/// Labels are non-negative integers separated by whitespace and/or commas.
pub fn parse_labels(text: &str) -> Result<Array1<usize>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<usize>().map_err(|e| {
                LabelNoiseError::InvalidInput(format!("invalid label {token:?}: {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Array1::from_vec)
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or environments without `HOME`, are returned
/// unchanged.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}
