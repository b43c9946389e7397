//! Local-disk storage client for uploaded attachments
//!
//! Writes each attachment into a single flat upload directory under a
//! timestamp-prefixed name and hands back the stored path as the stable
//! reference kept in the record store.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};

/// Compute the stored name for an attachment: `{millis}-{original_name}`.
///
/// Only the final path component of the client-supplied name is kept, so a
/// crafted filename cannot point outside the upload directory.
///
/// Pure so the naming scheme is testable without touching the filesystem.
/// Collisions are possible only for identical original names within the
/// same millisecond; the service does not guard against that.
pub fn storage_filename(original_name: &str, now_millis: i64) -> String {
    let base = Path::new(original_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());
    format!("{}-{}", now_millis, base)
}

/// Local-disk storage client for attachments
pub struct DiskStorage {
    upload_dir: PathBuf,
}

impl DiskStorage {
    /// Create a new storage client from configuration
    pub fn new(config: StorageConfig) -> Self {
        Self {
            upload_dir: PathBuf::from(config.upload_dir),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_upload_dir_exists(&self) -> Result<()> {
        fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(AppError::Storage)?;
        info!("Upload directory ready: {}", self.upload_dir.display());
        Ok(())
    }

    /// Write one attachment to the upload directory and return its stored path.
    ///
    /// The full content is written, flushed and synced before this returns,
    /// so a caller that proceeds to insert a record can rely on the bytes
    /// being durable on disk.
    pub async fn store(&self, original_name: &str, data: &[u8]) -> Result<String> {
        let name = storage_filename(original_name, Utc::now().timestamp_millis());
        let path = self.upload_dir.join(&name);

        let mut file = fs::File::create(&path).await.map_err(AppError::Storage)?;
        file.write_all(data).await.map_err(AppError::Storage)?;
        file.flush().await.map_err(AppError::Storage)?;
        file.sync_all().await.map_err(AppError::Storage)?;

        debug!("Attachment written: {} ({} bytes)", path.display(), data.len());

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &Path) -> DiskStorage {
        DiskStorage::new(StorageConfig {
            upload_dir: dir.to_string_lossy().into_owned(),
        })
    }

    #[test]
    fn storage_filename_prefixes_millis() {
        assert_eq!(
            storage_filename("receipt.pdf", 1704067200000),
            "1704067200000-receipt.pdf"
        );
    }

    #[test]
    fn storage_filename_distinct_for_distinct_instants() {
        let a = storage_filename("receipt.pdf", 1704067200000);
        let b = storage_filename("receipt.pdf", 1704067200001);
        assert_ne!(a, b);
    }

    #[test]
    fn storage_filename_strips_path_components() {
        assert_eq!(
            storage_filename("../../escape.pdf", 1704067200000),
            "1704067200000-escape.pdf"
        );
        assert_eq!(
            storage_filename("/etc/passwd", 1704067200000),
            "1704067200000-passwd"
        );
        assert_eq!(storage_filename("..", 1704067200000), "1704067200000-unnamed");
    }

    #[tokio::test]
    async fn store_writes_full_content() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());
        storage.ensure_upload_dir_exists().await.unwrap();

        let stored = storage.store("receipt.pdf", b"0123456789").await.unwrap();

        assert!(stored.ends_with("-receipt.pdf"));
        let content = std::fs::read(&stored).unwrap();
        assert_eq!(content, b"0123456789");
    }

    #[tokio::test]
    async fn store_keeps_same_original_name_submissions_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());
        storage.ensure_upload_dir_exists().await.unwrap();

        let first = storage.store("receipt.pdf", b"first").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = storage.store("receipt.pdf", b"second").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), b"first");
        assert_eq!(std::fs::read(&second).unwrap(), b"second");
    }

    #[tokio::test]
    async fn store_never_writes_outside_the_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let storage = storage_in(&uploads);
        storage.ensure_upload_dir_exists().await.unwrap();

        let stored = storage.store("../escape.pdf", b"data").await.unwrap();

        assert!(Path::new(&stored).parent().unwrap().ends_with("uploads"));
        assert!(stored.ends_with("-escape.pdf"));
        assert!(!dir.path().join("escape.pdf").exists());
        assert_eq!(std::fs::read(&stored).unwrap(), b"data");
    }

    #[tokio::test]
    async fn store_fails_when_upload_dir_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let storage = storage_in(&missing);

        let err = storage.store("receipt.pdf", b"data").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn ensure_upload_dir_exists_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());

        storage.ensure_upload_dir_exists().await.unwrap();
        storage.ensure_upload_dir_exists().await.unwrap();
        assert!(dir.path().is_dir());
    }
}
