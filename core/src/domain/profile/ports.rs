use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    profile::entities::UserProfile,
};

pub trait ProfileService: Send + Sync {
    /// Saved profiles, or the defaults when none are saved
    fn get_profiles(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<UserProfile>, CoreError>> + Send;

    fn update_profiles(
        &self,
        identity: &Identity,
        profiles: Vec<UserProfile>,
    ) -> impl Future<Output = Result<Vec<UserProfile>, CoreError>> + Send;
}
