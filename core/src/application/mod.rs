use anyhow::bail;

use crate::{
    domain::common::{ScantryConfig, services::Service},
    infrastructure::{llm::gemini_client::GeminiLLMClient, object_storage::ObjectStorage},
};

pub type ScantryService = Service<ObjectStorage, GeminiLLMClient>;

/// Builds the application service from configuration.
pub async fn create_service(config: ScantryConfig) -> Result<ScantryService, anyhow::Error> {
    if config.object_storage.project_id.trim().is_empty() {
        bail!("GOOGLE_CLOUD_PROJECT must be set");
    }

    let object_storage = ObjectStorage::from_config(config.object_storage).await;
    let llm_client = GeminiLLMClient::new(config.llm);

    Ok(Service::new(object_storage, llm_client))
}
