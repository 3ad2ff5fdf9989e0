use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Port for the blob store holding every household document (GCS/S3/MinIO).
///
/// All objects live in a single bucket; keys are `/`-separated paths.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Name of the bucket this adapter reads from and writes to
    fn bucket_name(&self) -> String;

    /// Create the bucket when it does not exist yet.
    ///
    /// A failed creation is logged and swallowed: a concurrent creator may
    /// have won the race.
    fn ensure_bucket(&self) -> impl Future<Output = ()> + Send;

    /// Check that the bucket is reachable
    fn bucket_exists(&self) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Read an object; `None` when it does not exist
    fn get_object(
        &self,
        object_key: &str,
    ) -> impl Future<Output = Result<Option<Bytes>, CoreError>> + Send;

    /// Check whether an object exists
    fn object_exists(&self, object_key: &str)
    -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Write an object, replacing any previous content
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
