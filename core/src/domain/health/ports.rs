use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::StorageHealthStatus,
};

pub trait HealthCheckService: Send + Sync {
    /// Whether the data bucket can be reached
    fn readiness(&self) -> impl Future<Output = Result<StorageHealthStatus, CoreError>> + Send;
}
