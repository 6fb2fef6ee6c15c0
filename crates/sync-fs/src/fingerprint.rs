//! File fingerprinting: size, modification time, and content hash
//!
//! Provides a single canonical hash format (`sha256:<hex>`) used throughout
//! the workspace for change detection. The hash is a digest of the full file
//! contents, so identical bytes produce identical hashes across runs and
//! machines.

use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::{Error, Result};

/// Prefix for all hashes produced by this module
const PREFIX: &str = "sha256:";

/// The state of a file at a point in time: size, mtime, and content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    /// File size in bytes
    pub size: u64,
    /// Modification time in epoch seconds, as reported by the filesystem
    pub mtime: i64,
    /// Content hash in canonical `sha256:<hex>` form
    pub hash: String,
}

/// Compute the SHA-256 hash of a byte buffer.
///
/// Returns a string in the canonical format `"sha256:<hex>"`.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 hash of a file's contents.
///
/// Reads the file fully, so callers must tolerate O(file size) cost per
/// invocation.
///
/// # Errors
///
/// Returns an error if the file cannot be read (permissions, or the file
/// vanished between listing and hashing). Callers must propagate this rather
/// than treat the file as unchanged.
pub fn hash_file(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(hash_bytes(&content))
}

/// Extract the full fingerprint of a file: size, mtime, and content hash.
///
/// # Errors
///
/// Returns an error if the file's metadata or contents cannot be read.
pub fn fingerprint(path: &Path) -> Result<Fingerprint> {
    let metadata = std::fs::metadata(path).map_err(|e| Error::io(path, e))?;
    let mtime = mtime_epoch(&metadata).map_err(|e| Error::io(path, e))?;
    let hash = hash_file(path)?;
    Ok(Fingerprint {
        size: metadata.len(),
        mtime,
        hash,
    })
}

/// Modification time of already-fetched metadata, in epoch seconds.
///
/// Filesystem precision may be coarser than wall-clock precision; seconds is
/// the portable floor. Pre-epoch timestamps map to negative values.
pub(crate) fn mtime_epoch(metadata: &std::fs::Metadata) -> std::io::Result<i64> {
    let modified = metadata.modified()?;
    let mtime = match modified.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    };
    Ok(mtime)
}
