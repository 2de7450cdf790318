//! Content-Addressed Blob Store
//!
//! Uploaded payloads (print files, payment slips) are stored on disk keyed by
//! their SHA-256 hash instead of being embedded in documents as base64
//! data-URLs. Documents keep a `/api/blobs/{hash}` URL, so clients still get
//! a directly fetchable reference while large payloads stay out of the store.
//!
//! Layout: `{root}/{hh}/{hash}` where `hh` is the first two hash chars.
//! Identical content deduplicates naturally.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::utils::AppError;

/// Maximum size of one uploaded payload (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// A hash is exactly 64 lowercase hex chars; anything else is not one of ours.
/// Also rules out path traversal through the blob endpoint.
fn is_valid_hash(hash: &str) -> bool {
    hash.len() == 64 && hash.bytes().all(|b| b.is_ascii_hexdigit())
}

#[derive(Clone, Debug)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn blob_path(&self, hash: &str) -> PathBuf {
        self.root.join(&hash[..2]).join(hash)
    }

    /// Public URL for a stored blob
    pub fn url(hash: &str) -> String {
        format!("/api/blobs/{hash}")
    }

    /// Store a payload, returning its hash
    ///
    /// A blob that already exists is left untouched (same hash, same bytes).
    pub async fn store(&self, data: &[u8]) -> Result<String, AppError> {
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        let hash = calculate_hash(data);
        let path = self.blob_path(&hash);
        if path.exists() {
            return Ok(hash);
        }

        let shard = path.parent().unwrap_or(Path::new("."));
        tokio::fs::create_dir_all(shard)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create blob dir: {e}")))?;
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| AppError::internal(format!("Failed to write blob: {e}")))?;

        Ok(hash)
    }

    /// Read a blob back; Ok(None) if the hash is unknown
    pub async fn read(&self, hash: &str) -> Result<Option<Vec<u8>>, AppError> {
        if !is_valid_hash(hash) {
            return Ok(None);
        }
        match tokio::fs::read(self.blob_path(hash)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::internal(format!("Failed to read blob: {e}"))),
        }
    }
}
