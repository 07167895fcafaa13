use bytes::Bytes;
use object_store::path::Path as StorePath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};

use crate::application::ports::ObjectStorageError;

pub(super) async fn get_bytes(
    store: &dyn ObjectStore,
    path: &StorePath,
) -> Result<Bytes, ObjectStorageError> {
    let result = store.get(path).await.map_err(|e| match e {
        object_store::Error::NotFound { .. } => ObjectStorageError::NotFound(path.to_string()),
        other => ObjectStorageError::DownloadFailed(other.to_string()),
    })?;

    result
        .bytes()
        .await
        .map_err(|e| ObjectStorageError::DownloadFailed(e.to_string()))
}

pub(super) async fn put_bytes(
    store: &dyn ObjectStore,
    path: &StorePath,
    body: Bytes,
    content_type: Option<&str>,
) -> Result<(), ObjectStorageError> {
    let mut attributes = Attributes::new();
    if let Some(content_type) = content_type {
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
    }
    let options = PutOptions {
        attributes,
        ..PutOptions::default()
    };

    store
        .put_opts(path, PutPayload::from(body), options)
        .await
        .map_err(|e| ObjectStorageError::UploadFailed(e.to_string()))?;

    Ok(())
}
