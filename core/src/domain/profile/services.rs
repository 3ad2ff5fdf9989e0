use std::collections::HashSet;

use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::{entities::HouseholdId, ports::HouseholdService},
    llm::ports::LLMClient,
    profile::{
        entities::{UserProfile, default_profiles},
        ports::ProfileService,
    },
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    pub(crate) async fn household_profiles(&self, household_id: &HouseholdId) -> Vec<UserProfile> {
        let profiles: Vec<UserProfile> = self
            .load_document_or_default(household_id, DocumentName::Profiles, Vec::new())
            .await;

        if profiles.is_empty() {
            default_profiles()
        } else {
            profiles
        }
    }
}

fn validate_profiles(profiles: Vec<UserProfile>) -> Result<Vec<UserProfile>, CoreError> {
    if profiles.is_empty() {
        return Err(CoreError::InvalidInput(
            "at least one profile is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    profiles
        .into_iter()
        .map(|profile| {
            if !seen.insert(profile.id) {
                return Err(CoreError::InvalidInput(format!(
                    "profile '{}' appears more than once",
                    profile.id
                )));
            }

            let name = profile.name.trim();
            if name.is_empty() {
                return Err(CoreError::InvalidInput(format!(
                    "profile '{}' needs a name",
                    profile.id
                )));
            }

            Ok(UserProfile::new(
                profile.id,
                name,
                profile.dietary_needs.trim(),
            ))
        })
        .collect()
}

impl<OS, LLM> ProfileService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_profiles(&self, identity: &Identity) -> Result<Vec<UserProfile>, CoreError> {
        let household_id = self.resolve_household(identity).await?;
        Ok(self.household_profiles(&household_id).await)
    }

    #[instrument(skip(self, identity, profiles), fields(identity = %identity.log_id()))]
    async fn update_profiles(
        &self,
        identity: &Identity,
        profiles: Vec<UserProfile>,
    ) -> Result<Vec<UserProfile>, CoreError> {
        let profiles = validate_profiles(profiles)?;
        let household_id = self.resolve_household(identity).await?;

        self.save_document(&household_id, DocumentName::Profiles, &profiles)
            .await?;

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::profile::entities::ProfileKey,
        test_support::{identity, test_service},
    };

    #[tokio::test]
    async fn defaults_until_saved() {
        let service = test_service();
        let caller = identity("a@x.com");

        assert_eq!(service.get_profiles(&caller).await.unwrap(), default_profiles());

        let mut profiles = default_profiles();
        profiles[2].name = "  Noel  ".to_string();
        profiles[2].dietary_needs = "Maintenance".to_string();
        service.update_profiles(&caller, profiles).await.unwrap();

        let saved = service.get_profiles(&caller).await.unwrap();
        assert_eq!(saved[2], UserProfile::new(ProfileKey::Dad, "Noel", "Maintenance"));
    }

    #[tokio::test]
    async fn rejects_duplicate_ids_and_blank_names() {
        let service = test_service();
        let caller = identity("a@x.com");

        let duplicate = vec![
            UserProfile::new(ProfileKey::Son, "A", ""),
            UserProfile::new(ProfileKey::Son, "B", ""),
        ];
        assert!(matches!(
            service.update_profiles(&caller, duplicate).await,
            Err(CoreError::InvalidInput(_))
        ));

        let blank = vec![UserProfile::new(ProfileKey::Wife, " ", "")];
        assert!(matches!(
            service.update_profiles(&caller, blank).await,
            Err(CoreError::InvalidInput(_))
        ));

        assert!(matches!(
            service.update_profiles(&caller, vec![]).await,
            Err(CoreError::InvalidInput(_))
        ));
    }
}
