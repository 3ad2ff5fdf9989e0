use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::DocumentName, ports::DocumentService, value_objects::DocumentLoad},
    household::entities::HouseholdId,
    llm::ports::LLMClient,
    storage::{ports::ObjectStoragePort, value_objects::ObjectKey},
};

const JSON_CONTENT_TYPE: &str = "application/json";

impl<OS, LLM> Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    pub(crate) async fn read_json<T>(&self, key: &ObjectKey) -> Result<DocumentLoad<T>, CoreError>
    where
        T: DeserializeOwned,
    {
        let Some(content) = self.object_storage.get_object(key.as_str()).await? else {
            return Ok(DocumentLoad::Absent);
        };

        let value = serde_json::from_slice(&content).map_err(|e| {
            tracing::error!(object_key = %key, error = %e, "Stored document is not valid JSON");
            CoreError::ObjectStorageError(format!("Failed to parse {}: {}", key, e))
        })?;

        Ok(DocumentLoad::Found(value))
    }

    pub(crate) async fn write_json<T>(&self, key: &ObjectKey, value: &T) -> Result<(), CoreError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec_pretty(value).map_err(|e| {
            tracing::error!(object_key = %key, error = %e, "Failed to serialize document");
            CoreError::SaveFailed(key.to_string())
        })?;

        self.object_storage
            .put_object(key.as_str(), Bytes::from(payload), JSON_CONTENT_TYPE)
            .await
            .map_err(|e| {
                tracing::error!(object_key = %key, error = %e, "Failed to save document");
                CoreError::SaveFailed(key.to_string())
            })
    }

    /// Read-modify-write of one document inside its key's critical section.
    ///
    /// An absent document starts from `default`; a failed read aborts without
    /// writing. Nothing is written when `mutate` fails.
    pub(crate) async fn update_document<T, R, D, F>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
        default: D,
        mutate: F,
    ) -> Result<R, CoreError>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        R: Send,
        D: FnOnce() -> T + Send,
        F: FnOnce(&mut T) -> Result<R, CoreError> + Send,
    {
        let key = ObjectKey::document(household_id, name);
        let _guard = self.locks.lock(key.as_str()).await;

        let mut document = self.read_json::<T>(&key).await?.unwrap_or_else(default);
        let outcome = mutate(&mut document)?;
        self.write_json(&key, &document).await?;

        Ok(outcome)
    }
}

impl<OS, LLM> DocumentService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(household_id = %household_id, document = %name))]
    async fn load_document<T>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
    ) -> Result<DocumentLoad<T>, CoreError>
    where
        T: DeserializeOwned + Send,
    {
        self.read_json(&ObjectKey::document(household_id, name))
            .await
    }

    #[instrument(skip(self, default), fields(household_id = %household_id, document = %name))]
    async fn load_document_or_default<T>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
        default: T,
    ) -> T
    where
        T: DeserializeOwned + Send,
    {
        match self.load_document(household_id, name).await {
            Ok(DocumentLoad::Found(value)) => value,
            Ok(DocumentLoad::Absent) => default,
            Err(e) => {
                tracing::error!(error = %e, "Error loading document, using default");
                default
            }
        }
    }

    #[instrument(skip(self, value), fields(household_id = %household_id, document = %name))]
    async fn save_document<T>(
        &self,
        household_id: &HouseholdId,
        name: DocumentName,
        value: &T,
    ) -> Result<(), CoreError>
    where
        T: Serialize + Sync,
    {
        let key = ObjectKey::document(household_id, name);
        let _guard = self.locks.lock(key.as_str()).await;

        self.write_json(&key, value).await
    }
}
