use std::path::PathBuf;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;

use crate::application::ports::{ObjectStorage, ObjectStorageError};
use crate::domain::ObjectLocation;

use super::object_store_ops::{get_bytes, put_bytes};

/// Filesystem storage for development. Buckets map to top-level directories
/// under the base path. Content types are not persisted.
pub struct LocalObjectStorage {
    inner: LocalFileSystem,
}

impl LocalObjectStorage {
    pub fn new(base_path: PathBuf) -> Result<Self, ObjectStorageError> {
        std::fs::create_dir_all(&base_path).map_err(ObjectStorageError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ObjectStorageError::Unavailable(e.to_string()))?;
        Ok(Self { inner: fs })
    }

    fn path(location: &ObjectLocation) -> StorePath {
        StorePath::from(format!("{}/{}", location.bucket(), location.key()))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for LocalObjectStorage {
    async fn get(&self, location: &ObjectLocation) -> Result<Bytes, ObjectStorageError> {
        get_bytes(&self.inner, &Self::path(location)).await
    }

    async fn put(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        _content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        put_bytes(&self.inner, &Self::path(location), body, None).await
    }
}
