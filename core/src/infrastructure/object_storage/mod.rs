pub mod memory;
pub mod s3;

use bytes::Bytes;

use crate::domain::{
    common::{ObjectStorageConfig, StorageBackend, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

pub use memory::InMemoryObjectStorage;
pub use s3::S3ObjectStorage;

/// Storage backend chosen at startup.
#[derive(Clone)]
pub enum ObjectStorage {
    S3(S3ObjectStorage),
    Memory(InMemoryObjectStorage),
}

impl ObjectStorage {
    pub async fn from_config(config: ObjectStorageConfig) -> Self {
        match config.backend {
            StorageBackend::S3 => ObjectStorage::S3(S3ObjectStorage::new(config).await),
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory object storage, data will not survive a restart");
                ObjectStorage::Memory(InMemoryObjectStorage::new(config.bucket_name()))
            }
        }
    }
}

impl ObjectStoragePort for ObjectStorage {
    fn bucket_name(&self) -> String {
        match self {
            ObjectStorage::S3(storage) => storage.bucket_name(),
            ObjectStorage::Memory(storage) => storage.bucket_name(),
        }
    }

    async fn ensure_bucket(&self) {
        match self {
            ObjectStorage::S3(storage) => storage.ensure_bucket().await,
            ObjectStorage::Memory(storage) => storage.ensure_bucket().await,
        }
    }

    async fn bucket_exists(&self) -> Result<bool, CoreError> {
        match self {
            ObjectStorage::S3(storage) => storage.bucket_exists().await,
            ObjectStorage::Memory(storage) => storage.bucket_exists().await,
        }
    }

    async fn get_object(&self, object_key: &str) -> Result<Option<Bytes>, CoreError> {
        match self {
            ObjectStorage::S3(storage) => storage.get_object(object_key).await,
            ObjectStorage::Memory(storage) => storage.get_object(object_key).await,
        }
    }

    async fn object_exists(&self, object_key: &str) -> Result<bool, CoreError> {
        match self {
            ObjectStorage::S3(storage) => storage.object_exists(object_key).await,
            ObjectStorage::Memory(storage) => storage.object_exists(object_key).await,
        }
    }

    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        match self {
            ObjectStorage::S3(storage) => {
                storage.put_object(object_key, payload, content_type).await
            }
            ObjectStorage::Memory(storage) => {
                storage.put_object(object_key, payload, content_type).await
            }
        }
    }
}
