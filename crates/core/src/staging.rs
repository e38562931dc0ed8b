//! Staged upload entity.
//!
//! A [`StagedUpload`] is the one ephemeral entity in the system: the bytes of
//! an inbound file written to transient storage under a server-assigned name,
//! held only for the duration of a single handler invocation. Removal is
//! guaranteed on every exit path: the happy path calls [`StagedUpload::remove`],
//! and the `Drop` impl covers early returns and panics.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A file staged to transient storage, pending relay to the downstream
/// service.
///
/// The staged path is always `temp_dir/<uuid-v4>`. The client-supplied
/// filename is untrusted and never used as a path component; it is kept only
/// so the outbound multipart part can carry it.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
    original_filename: String,
    len: u64,
    removed: bool,
}

impl StagedUpload {
    /// Write `bytes` to a fresh server-named file under `temp_dir`.
    pub async fn stage(temp_dir: &Path, original_filename: &str, bytes: &[u8]) -> Result<Self> {
        let path = temp_dir.join(Uuid::new_v4().to_string());
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| Error::Staging {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            original_filename: original_filename.to_string(),
            len: bytes.len() as u64,
            removed: false,
        })
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Client-supplied filename. Untrusted; only ever forwarded as multipart
    /// metadata, never used to name anything on disk.
    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    /// Staged content length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the staged content is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove the staged file. Removal failure is logged and swallowed; it
    /// must never affect the response already produced for the caller.
    pub async fn remove(mut self) {
        self.removed = true;
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to remove staged upload"
            );
        }
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        // Fallback for error paths and panics; the handler normally calls
        // remove() before responding.
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove staged upload on drop"
                );
            }
        }
    }
}
