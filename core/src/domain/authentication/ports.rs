use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

/// Verifies a bearer token issued by the OAuth provider and yields the caller.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityVerifier: Send + Sync {
    fn verify(&self, token: &str) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
