use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::StorageHealthStatus, ports::HealthCheckService},
    llm::ports::LLMClient,
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> HealthCheckService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    async fn readiness(&self) -> Result<StorageHealthStatus, CoreError> {
        let reachable = self.object_storage.bucket_exists().await?;

        Ok(StorageHealthStatus {
            bucket: self.object_storage.bucket_name(),
            reachable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::storage::ports::MockObjectStoragePort, test_support::ScriptedLLMClient,
    };

    #[tokio::test]
    async fn readiness_reports_bucket_state() {
        let mut storage = MockObjectStoragePort::new();
        storage
            .expect_bucket_exists()
            .returning(|| Box::pin(async { Ok(false) }));
        storage
            .expect_bucket_name()
            .returning(|| "diet-app-data-test".to_string());
        let service = Service::new(storage, ScriptedLLMClient::default());

        let status = service.readiness().await.unwrap();

        assert_eq!(
            status,
            StorageHealthStatus {
                bucket: "diet-app-data-test".to_string(),
                reachable: false,
            }
        );
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let mut storage = MockObjectStoragePort::new();
        storage.expect_bucket_exists().returning(|| {
            Box::pin(async { Err(CoreError::ObjectStorageError("denied".to_string())) })
        });
        let service = Service::new(storage, ScriptedLLMClient::default());

        assert!(service.readiness().await.is_err());
    }
}
