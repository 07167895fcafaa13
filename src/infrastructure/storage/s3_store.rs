use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use object_store::ObjectStore;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as StorePath;

use crate::application::ports::{ObjectStorage, ObjectStorageError};
use crate::domain::ObjectLocation;

use super::object_store_ops::{get_bytes, put_bytes};

/// Amazon S3 backed storage. One client per bucket, built on first use.
///
/// Credentials are read from `AWS_*` environment variables (or instance
/// metadata), not from the shared config files or SSO sessions the SDK
/// clients resolve. Profile-only setups need the variables exported.
pub struct S3ObjectStorage {
    region: String,
    buckets: Mutex<HashMap<String, Arc<dyn ObjectStore>>>,
}

impl S3ObjectStorage {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            buckets: Mutex::new(HashMap::new()),
        }
    }

    fn store_for(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>, ObjectStorageError> {
        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(store) = buckets.get(bucket) {
            return Ok(Arc::clone(store));
        }

        let store: Arc<dyn ObjectStore> = Arc::new(
            AmazonS3Builder::from_env()
                .with_region(&self.region)
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| ObjectStorageError::Unavailable(e.to_string()))?,
        );
        buckets.insert(bucket.to_string(), Arc::clone(&store));
        Ok(store)
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn get(&self, location: &ObjectLocation) -> Result<Bytes, ObjectStorageError> {
        let store = self.store_for(location.bucket())?;
        get_bytes(store.as_ref(), &StorePath::from(location.key())).await
    }

    async fn put(
        &self,
        location: &ObjectLocation,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), ObjectStorageError> {
        let store = self.store_for(location.bucket())?;
        put_bytes(
            store.as_ref(),
            &StorePath::from(location.key()),
            body,
            Some(content_type),
        )
        .await
    }
}
