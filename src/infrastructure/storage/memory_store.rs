use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{Attribute, ObjectStore};

use crate::application::ports::{ObjectStorage, ObjectStorageError};
use crate::domain::ObjectLocation;

use super::object_store_ops::{get_bytes, put_bytes};

#[derive(Default)]
pub struct InMemoryObjectStorage {
    inner: InMemory,
}

impl InMemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn path(location: &ObjectLocation) -> StorePath {
        StorePath::from(format!("{}/{}", location.bucket(), location.key()))
    }

    /// Content type recorded when the object was written.
    pub async fn content_type(
        &self,
        location: &ObjectLocation,
    ) -> Result<Option<String>, ObjectStorageError> {
        let path = Self::path(location);
        let result = self.inner.get(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => ObjectStorageError::NotFound(path.to_string()),
            other => ObjectStorageError::DownloadFailed(other.to_string()),
        })?;

        Ok(result
            .attributes
            .get(&Attribute::ContentType)
            .map(|value| String::from(&**value)))
    }
}

#[async_trait::async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn get(&self, location: &ObjectLocation) -> Result<Bytes, ObjectStorageError> {
        get_bytes(&self.inner, &Self::path(location)).await
    }

    async fn put(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        put_bytes(&self.inner, &Self::path(location), body, Some(content_type)).await
    }
}
