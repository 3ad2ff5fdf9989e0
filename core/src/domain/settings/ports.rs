use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    settings::entities::{HouseholdSettings, OnboardingStatus},
};

pub trait SettingsService: Send + Sync {
    fn get_settings(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<HouseholdSettings, CoreError>> + Send;

    /// Stores `onboarding_dismissed`; `invite_sent` is only set by invitations.
    fn update_settings(
        &self,
        identity: &Identity,
        settings: HouseholdSettings,
    ) -> impl Future<Output = Result<HouseholdSettings, CoreError>> + Send;

    /// Checklist shown to new households
    fn get_onboarding(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<OnboardingStatus, CoreError>> + Send;
}
