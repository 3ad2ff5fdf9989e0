use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod lenient;
pub mod locks;
pub mod services;

#[derive(Clone, Debug)]
pub struct ScantryConfig {
    pub object_storage: ObjectStorageConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Memory,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub backend: StorageBackend,
    pub project_id: String,
    pub bucket_prefix: String,
    pub bucket_location: String,
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl ObjectStorageConfig {
    /// Bucket holding every household's data, e.g. `diet-app-data-my-project`.
    pub fn bucket_name(&self) -> String {
        format!("{}-{}", self.bucket_prefix, self.project_id)
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Removes the item at a caller-supplied position.
pub(crate) fn remove_at<T>(items: &mut Vec<T>, index: usize, what: &str) -> Result<T, CoreError> {
    if index >= items.len() {
        return Err(CoreError::NotFound(format!(
            "{what} #{index} does not exist ({} item(s))",
            items.len()
        )));
    }
    Ok(items.remove(index))
}

/// Short stable digest of an e-mail, safe to put in logs.
pub fn hash_identity(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}
