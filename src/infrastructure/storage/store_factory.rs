use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ObjectStorage, ObjectStorageError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalObjectStorage;
use super::s3_store::S3ObjectStorage;

pub struct ObjectStorageFactory;

impl ObjectStorageFactory {
    pub fn create(
        settings: &StorageSettings,
        region: &str,
    ) -> Result<Arc<dyn ObjectStorage>, ObjectStorageError> {
        match settings.provider {
            StorageProviderSetting::S3 => Ok(Arc::new(S3ObjectStorage::new(region))),
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let store = LocalObjectStorage::new(path)?;
                Ok(Arc::new(store))
            }
        }
    }
}
