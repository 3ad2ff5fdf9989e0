use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::ports::HouseholdService,
    llm::ports::LLMClient,
    settings::{
        entities::{HouseholdSettings, OnboardingStatus},
        ports::SettingsService,
    },
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> SettingsService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_settings(&self, identity: &Identity) -> Result<HouseholdSettings, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(
                &household_id,
                DocumentName::Settings,
                HouseholdSettings::default(),
            )
            .await)
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn update_settings(
        &self,
        identity: &Identity,
        settings: HouseholdSettings,
    ) -> Result<HouseholdSettings, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        self.update_document(
            &household_id,
            DocumentName::Settings,
            HouseholdSettings::default,
            |stored: &mut HouseholdSettings| {
                stored.onboarding_dismissed = settings.onboarding_dismissed;
                Ok(stored.clone())
            },
        )
        .await
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_onboarding(&self, identity: &Identity) -> Result<OnboardingStatus, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        // Only emptiness matters here, so the documents are read untyped
        let (inventory, schedule, settings) = futures::join!(
            self.load_document_or_default::<Vec<Value>>(
                &household_id,
                DocumentName::Inventory,
                Vec::new()
            ),
            self.load_document_or_default::<Vec<Value>>(
                &household_id,
                DocumentName::Schedule,
                Vec::new()
            ),
            self.load_document_or_default(
                &household_id,
                DocumentName::Settings,
                HouseholdSettings::default()
            ),
        );

        Ok(OnboardingStatus::from_checks(
            !inventory.is_empty(),
            !schedule.is_empty(),
            &settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{identity, test_service};

    #[tokio::test]
    async fn new_household_starts_with_nothing_done() {
        let service = test_service();

        let status = service.get_onboarding(&identity("a@x.com")).await.unwrap();

        assert_eq!(status.progress, 0);
        assert!(!status.all_complete);
        assert!(!status.dismissed);
        assert_eq!(
            service.get_settings(&identity("a@x.com")).await.unwrap(),
            HouseholdSettings::default()
        );
    }

    #[tokio::test]
    async fn onboarding_reflects_household_documents() {
        let service = test_service();
        let caller = identity("a@x.com");
        let household_id = service.resolve_household(&caller).await.unwrap();
        service.object_storage.put_json(
            &format!("{household_id}/inventory.json"),
            json!([{ "name": "eggs", "quantity": "6" }]),
        );

        service.object_storage.put_json(
            &format!("{household_id}/settings.json"),
            json!({ "inviteSent": true }),
        );

        service
            .update_settings(
                &caller,
                HouseholdSettings {
                    onboarding_dismissed: true,
                    invite_sent: false,
                },
            )
            .await
            .unwrap();

        let status = service.get_onboarding(&caller).await.unwrap();
        assert_eq!(status.progress, 66);
        assert!(status.dismissed);
        assert!(!status.steps[1].completed);
    }

    #[tokio::test]
    async fn dismissing_onboarding_keeps_the_invite_flag() {
        let service = test_service();
        let caller = identity("a@x.com");
        let household_id = service.resolve_household(&caller).await.unwrap();
        service.object_storage.put_json(
            &format!("{household_id}/settings.json"),
            json!({ "onboardingDismissed": false, "inviteSent": true }),
        );

        let updated = service
            .update_settings(
                &caller,
                HouseholdSettings {
                    onboarding_dismissed: true,
                    ..HouseholdSettings::default()
                },
            )
            .await
            .unwrap();

        let expected = HouseholdSettings {
            onboarding_dismissed: true,
            invite_sent: true,
        };
        assert_eq!(updated, expected);
        assert_eq!(service.get_settings(&caller).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn clients_cannot_set_the_invite_flag() {
        let service = test_service();
        let caller = identity("a@x.com");

        let updated = service
            .update_settings(
                &caller,
                HouseholdSettings {
                    onboarding_dismissed: false,
                    invite_sent: true,
                },
            )
            .await
            .unwrap();

        assert!(!updated.invite_sent);
    }
}
