use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::ObjectStoragePort};

/// Process-local object storage, used for development and tests.
///
/// Contents are lost when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryObjectStorage {
    bucket: String,
    objects: Arc<DashMap<String, Bytes>>,
}

impl InMemoryObjectStorage {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Default::default(),
        }
    }

    pub fn object_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .iter()
            .map(|object| object.key().clone())
            .collect();
        keys.sort();
        keys
    }
}

impl ObjectStoragePort for InMemoryObjectStorage {
    fn bucket_name(&self) -> String {
        self.bucket.clone()
    }

    async fn ensure_bucket(&self) {}

    async fn bucket_exists(&self) -> Result<bool, CoreError> {
        Ok(true)
    }

    async fn get_object(&self, object_key: &str) -> Result<Option<Bytes>, CoreError> {
        Ok(self.objects.get(object_key).map(|object| object.value().clone()))
    }

    async fn object_exists(&self, object_key: &str) -> Result<bool, CoreError> {
        Ok(self.objects.contains_key(object_key))
    }

    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        _content_type: &str,
    ) -> Result<(), CoreError> {
        self.objects.insert(object_key.to_string(), payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_lists_objects() {
        let storage = InMemoryObjectStorage::new("diet-app-data-test");
        storage
            .put_object("h1/recipes.json", Bytes::from_static(b"[]"), "application/json")
            .await
            .unwrap();
        storage
            .put_object("admin/users.json", Bytes::from_static(b"{}"), "application/json")
            .await
            .unwrap();

        assert_eq!(
            storage.object_keys(),
            vec!["admin/users.json".to_string(), "h1/recipes.json".to_string()]
        );
        assert!(storage.object_exists("h1/recipes.json").await.unwrap());
        assert_eq!(
            storage.get_object("admin/users.json").await.unwrap(),
            Some(Bytes::from_static(b"{}"))
        );
        assert_eq!(storage.get_object("h1/missing.json").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_contents() {
        let storage = InMemoryObjectStorage::new("bucket");
        let clone = storage.clone();

        clone
            .put_object("h1/inventory.json", Bytes::from_static(b"[]"), "application/json")
            .await
            .unwrap();

        assert_eq!(storage.object_keys(), vec!["h1/inventory.json".to_string()]);
    }
}
