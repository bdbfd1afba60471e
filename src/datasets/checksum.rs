//! Integrity checks for downloaded dataset files.
//!
//! Files are hashed in fixed-size chunks so large archives never have to be
//! held in memory.

use crate::error::Result;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::digest::Output;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const CHUNK_SIZE: usize = 1024 * 1024;

/// Expected digest of a dataset file, as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Checksum {
    /// MD5 digest, as published by most dataset mirrors.
    Md5(String),
    /// SHA-256 digest.
    Sha256(String),
}

impl Checksum {
    /// Name of the digest algorithm.
    pub fn algorithm(&self) -> &'static str {
        match self {
            Checksum::Md5(_) => "md5",
            Checksum::Sha256(_) => "sha256",
        }
    }

    /// Expected digest, lowercase hex.
    pub fn expected_hex(&self) -> String {
        match self {
            Checksum::Md5(hex) | Checksum::Sha256(hex) => hex.to_ascii_lowercase(),
        }
    }

    /// Digest of the file at `path` with this checksum's algorithm.
    pub fn digest_file(&self, path: &Path) -> Result<String> {
        let file = File::open(path)?;
        match self {
            Checksum::Md5(_) => Ok(format!("{:x}", digest_reader::<Md5>(file)?)),
            Checksum::Sha256(_) => Ok(format!("{:x}", digest_reader::<Sha256>(file)?)),
        }
    }
}

fn digest_reader<D: Digest>(mut reader: impl Read) -> Result<Output<D>> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize())
}

/// Whether `path` is a regular file whose digest matches `checksum`.
///
/// Missing files and directories yield `Ok(false)`; read failures on an
/// existing file are returned as errors.
pub fn verify_integrity(path: impl AsRef<Path>, checksum: &Checksum) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(false);
    }
    Ok(checksum.digest_file(path)? == checksum.expected_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    // Digests of b"hello world".
    const HELLO_MD5: &str = "5eb63bbbe01eeed093cb22bb8f5acdc3";
    const HELLO_SHA256: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    fn hello_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_md5_matches() {
        let file = hello_file();
        let checksum = Checksum::Md5(HELLO_MD5.to_string());
        assert!(verify_integrity(file.path(), &checksum).unwrap());
    }

    #[test]
    fn test_sha256_matches_uppercase_expected() {
        let file = hello_file();
        let checksum = Checksum::Sha256(HELLO_SHA256.to_ascii_uppercase());
        assert!(verify_integrity(file.path(), &checksum).unwrap());
    }

    #[test]
    fn test_mismatch() {
        let file = hello_file();
        let checksum = Checksum::Md5("0".repeat(32));
        assert!(!verify_integrity(file.path(), &checksum).unwrap());
    }

    #[test]
    fn test_missing_file_and_directory() {
        let dir = tempdir().unwrap();
        let checksum = Checksum::Md5(HELLO_MD5.to_string());
        assert!(!verify_integrity(dir.path().join("absent.bin"), &checksum).unwrap());
        assert!(!verify_integrity(dir.path(), &checksum).unwrap());
    }

    #[test]
    fn test_digest_file_is_lowercase_hex() {
        let file = hello_file();
        let md5 = Checksum::Md5(String::new()).digest_file(file.path()).unwrap();
        let sha = Checksum::Sha256(String::new()).digest_file(file.path()).unwrap();
        assert_eq!(md5, HELLO_MD5);
        assert_eq!(sha, HELLO_SHA256);
    }

    #[test]
    fn test_multi_chunk_file() {
        let mut file = NamedTempFile::new().unwrap();
        let data = vec![7u8; CHUNK_SIZE * 2 + 17];
        file.write_all(&data).unwrap();
        file.flush().unwrap();

        let expected = format!("{:x}", Sha256::digest(&data));
        let checksum = Checksum::Sha256(expected);
        assert!(verify_integrity(file.path(), &checksum).unwrap());
    }
}
