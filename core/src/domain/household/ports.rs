use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    household::{
        entities::{Household, HouseholdId, Invitation},
        value_objects::InviteMemberInput,
    },
};

/// Service trait for the identity → household registry
pub trait HouseholdService: Send + Sync {
    /// Household of the caller, created on first sight
    fn resolve_household(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<HouseholdId, CoreError>> + Send;

    /// Household of the caller together with every identity sharing it
    fn get_household(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Household, CoreError>> + Send;

    /// Map another identity onto the caller's household
    fn invite_member(
        &self,
        identity: &Identity,
        input: InviteMemberInput,
    ) -> impl Future<Output = Result<Invitation, CoreError>> + Send;
}
