use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
    types::{BucketLocationConstraint, CreateBucketConfiguration},
};
use bytes::Bytes;
use tokio::sync::OnceCell;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

/// Object storage over the S3 API: Google Cloud Storage through its
/// interoperability endpoint, MinIO, or S3 itself.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
    bucket_location: String,
    bucket_ready: std::sync::Arc<OnceCell<()>>,
}

impl S3ObjectStorage {
    pub async fn new(config: ObjectStorageConfig) -> Self {
        let bucket = config.bucket_name();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(access_key), Some(secret_key)) = (&config.access_key, &config.secret_key) {
            loader = loader.credentials_provider(Credentials::new(
                access_key, secret_key, None, None, "scantry",
            ));
        }

        let shared_config = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config).force_path_style(true);

        if let Some(endpoint) = &config.endpoint {
            // Ensure endpoint URL is properly formatted (remove trailing slash)
            let endpoint = endpoint.trim_end_matches('/');
            builder = builder.endpoint_url(endpoint);
        }

        tracing::info!(
            endpoint = ?config.endpoint,
            region = %config.region,
            bucket = %bucket,
            "Initializing object storage client"
        );

        Self {
            client: Client::from_conf(builder.build()),
            bucket,
            bucket_location: config.bucket_location,
            bucket_ready: Default::default(),
        }
    }

    async fn bucket_ready(&self) {
        self.bucket_ready
            .get_or_init(|| async { self.create_bucket_if_missing().await })
            .await;
    }

    async fn create_bucket_if_missing(&self) {
        match self.bucket_exists().await {
            Ok(true) => return,
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(bucket = %self.bucket, error = %e, "Bucket existence check failed");
            }
        }

        let configuration = CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(self.bucket_location.as_str()))
            .build();

        let result = self
            .client
            .create_bucket()
            .bucket(&self.bucket)
            .create_bucket_configuration(configuration)
            .send()
            .await;

        match result {
            Ok(_) => tracing::info!(bucket = %self.bucket, "Created bucket"),
            Err(e) => {
                let lost_race = e.as_service_error().is_some_and(|service_error| {
                    service_error.is_bucket_already_owned_by_you()
                        || service_error.is_bucket_already_exists()
                });

                // Any other failure is not fatal either; the next read or write reports it.
                if lost_race {
                    tracing::info!(bucket = %self.bucket, "Bucket created concurrently");
                } else {
                    tracing::warn!(bucket = %self.bucket, error = %e, "Bucket creation failed");
                }
            }
        }
    }
}

impl ObjectStoragePort for S3ObjectStorage {
    fn bucket_name(&self) -> String {
        self.bucket.clone()
    }

    async fn ensure_bucket(&self) {
        self.bucket_ready().await;
    }

    #[instrument(skip(self))]
    async fn bucket_exists(&self) -> Result<bool, CoreError> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                if e.as_service_error().is_some_and(|service_error| service_error.is_not_found()) {
                    return Ok(false);
                }

                tracing::error!(error = %e, bucket = %self.bucket, "Failed to check bucket");
                Err(CoreError::ObjectStorageError(format!(
                    "Failed to check bucket: {}",
                    e
                )))
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_object(&self, object_key: &str) -> Result<Option<Bytes>, CoreError> {
        self.bucket_ready().await;

        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                if e.as_service_error().is_some_and(|service_error| service_error.is_no_such_key()) {
                    tracing::debug!(object_key = %object_key, "Object does not exist");
                    return Ok(None);
                }

                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to download object"
                );
                return Err(CoreError::ObjectStorageError(format!(
                    "Failed to download object: {}",
                    e
                )));
            }
        };

        let body = output.body.collect().await.map_err(|e| {
            tracing::error!(error = %e, object_key = %object_key, "Failed to read object body");
            CoreError::ObjectStorageError(format!("Failed to read object body: {}", e))
        })?;

        Ok(Some(body.into_bytes()))
    }

    #[instrument(skip(self))]
    async fn object_exists(&self, object_key: &str) -> Result<bool, CoreError> {
        self.bucket_ready().await;

        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                if e.as_service_error().is_some_and(|service_error| service_error.is_not_found()) {
                    return Ok(false);
                }

                tracing::error!(error = %e, object_key = %object_key, "Failed to check object");
                Err(CoreError::ObjectStorageError(format!(
                    "Failed to check object: {}",
                    e
                )))
            }
        }
    }

    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        self.bucket_ready().await;

        // Save payload size before moving payload into ByteStream
        let payload_size = payload.len();

        tracing::debug!(
            bucket = %self.bucket,
            object_key = %object_key,
            size = payload_size,
            "Uploading object to storage"
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .cache_control("no-cache")
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                let error_msg = format!("{}", e);
                let error_kind = if error_msg.contains("dispatch failure") {
                    "HTTP client dispatch failure - check endpoint URL and network connectivity"
                } else if error_msg.contains("timeout") {
                    "Request timeout - check network connection and storage server status"
                } else if error_msg.contains("connection") {
                    "Connection error - check storage endpoint and network"
                } else {
                    "Unknown error"
                };

                tracing::error!(
                    error = %e,
                    error_kind = %error_kind,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorageError(format!(
                    "Failed to upload object: {} ({})",
                    e, error_kind
                ))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            "Object uploaded successfully"
        );

        Ok(())
    }
}
