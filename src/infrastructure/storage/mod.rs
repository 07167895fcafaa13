mod local_store;
mod memory_store;
mod object_store_ops;
mod s3_store;
mod store_factory;

pub use local_store::LocalObjectStorage;
pub use memory_store::InMemoryObjectStorage;
pub use s3_store::S3ObjectStorage;
pub use store_factory::ObjectStorageFactory;
