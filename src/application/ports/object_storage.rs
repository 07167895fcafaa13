use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::ObjectLocation;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn get(&self, location: &ObjectLocation) -> Result<Bytes, ObjectStorageError>;

    async fn put(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectStorageError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
