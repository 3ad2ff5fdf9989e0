use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, hash_identity, services::Service},
    document::{entities::DocumentName, value_objects::DocumentLoad},
    household::{
        entities::{Household, HouseholdId, HouseholdRegistry, Invitation},
        ports::HouseholdService,
        value_objects::InviteMemberInput,
    },
    llm::ports::LLMClient,
    settings::entities::HouseholdSettings,
    storage::{ports::ObjectStoragePort, value_objects::ObjectKey},
};

impl<OS, LLM> Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    async fn read_registry(&self, key: &ObjectKey) -> Result<HouseholdRegistry, CoreError> {
        Ok(self
            .read_json::<HouseholdRegistry>(key)
            .await?
            .unwrap_or_else(HouseholdRegistry::default))
    }

    async fn mark_invite_sent(&self, household_id: &HouseholdId) {
        let result = self
            .update_document(
                household_id,
                DocumentName::Settings,
                HouseholdSettings::default,
                |settings| {
                    settings.invite_sent = true;
                    Ok(())
                },
            )
            .await;

        if let Err(e) = result {
            tracing::warn!(
                household_id = %household_id,
                error = %e,
                "Invite saved but onboarding settings could not be updated"
            );
        }
    }
}

impl<OS, LLM> HouseholdService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn resolve_household(&self, identity: &Identity) -> Result<HouseholdId, CoreError> {
        let key = ObjectKey::registry();

        if let Some(household_id) = self.read_registry(&key).await?.household_of(identity.email()) {
            return Ok(household_id.clone());
        }

        let _guard = self.locks.lock(key.as_str()).await;

        // Another request may have registered this identity while we waited
        let mut registry = self.read_registry(&key).await?;
        if let Some(household_id) = registry.household_of(identity.email()) {
            return Ok(household_id.clone());
        }

        let mut household_id = HouseholdId::generate();
        while registry.contains_household(&household_id) {
            household_id = HouseholdId::generate();
        }

        registry.assign(identity.email(), household_id.clone());
        self.write_json(&key, &registry).await?;

        tracing::info!(household_id = %household_id, "Created household for new identity");

        Ok(household_id)
    }

    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_household(&self, identity: &Identity) -> Result<Household, CoreError> {
        let household_id = self.resolve_household(identity).await?;
        let registry = self.read_registry(&ObjectKey::registry()).await?;

        Ok(Household {
            members: registry.members_of(&household_id),
            id: household_id,
        })
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id()))]
    async fn invite_member(
        &self,
        identity: &Identity,
        input: InviteMemberInput,
    ) -> Result<Invitation, CoreError> {
        let member = Identity::from_email(Some(&input.email))
            .map_err(|_| CoreError::InvalidInput("an e-mail address is required".to_string()))?;
        if !member.email().contains('@') {
            return Err(CoreError::InvalidInput(format!(
                "'{}' is not an e-mail address",
                member.email()
            )));
        }

        let key = ObjectKey::registry();
        let (household_id, replaced_household) = {
            let _guard = self.locks.lock(key.as_str()).await;

            let mut registry = match self.read_json::<HouseholdRegistry>(&key).await? {
                DocumentLoad::Found(registry) => registry,
                DocumentLoad::Absent => return Err(CoreError::RegistryMissing),
            };

            let household_id = registry
                .household_of(identity.email())
                .cloned()
                .ok_or(CoreError::NoHousehold)?;

            let previous = registry.assign(member.email(), household_id.clone());
            self.write_json(&key, &registry).await?;

            let replaced = previous.filter(|previous| *previous != household_id);
            if let Some(replaced) = &replaced {
                tracing::warn!(
                    member = %hash_identity(member.email()),
                    replaced_household = %replaced,
                    household_id = %household_id,
                    "Invited member was moved out of another household"
                );
            }

            (household_id, replaced)
        };

        self.mark_invite_sent(&household_id).await;

        tracing::info!(
            household_id = %household_id,
            member = %hash_identity(member.email()),
            "Member invited to household"
        );

        Ok(Invitation {
            household_id,
            member_email: member.email().to_string(),
            replaced_household,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{identity, test_service};

    fn invite(email: &str) -> InviteMemberInput {
        InviteMemberInput {
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn unseen_identity_gets_a_fresh_household_once() {
        let service = test_service();
        service
            .object_storage
            .put_json("admin/users.json", json!({ "z@x.com": "existing" }));

        let first = service.resolve_household(&identity("a@x.com")).await.unwrap();
        let again = service.resolve_household(&identity("a@x.com")).await.unwrap();

        assert_eq!(first, again);
        assert_ne!(first, HouseholdId::new("existing"));
        assert_eq!(service.object_storage.write_count(), 1);
    }

    #[tokio::test]
    async fn lookups_ignore_case_and_whitespace() {
        let service = test_service();

        let first = service.resolve_household(&identity("Noel@X.com")).await.unwrap();
        let second = service
            .resolve_household(&identity("  noel@x.com "))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn registry_scenario_share_a_household() {
        let service = test_service();

        let p1 = service.resolve_household(&identity("a@x.com")).await.unwrap();
        let stored = service.object_storage.json("admin/users.json").unwrap();
        assert_eq!(stored, json!({ "a@x.com": p1.as_str() }));

        assert_eq!(
            service.resolve_household(&identity("a@x.com")).await.unwrap(),
            p1
        );

        let invitation = service
            .invite_member(&identity("a@x.com"), invite("b@x.com"))
            .await
            .unwrap();
        assert_eq!(invitation.household_id, p1);
        assert_eq!(invitation.replaced_household, None);

        assert_eq!(
            service.resolve_household(&identity("b@x.com")).await.unwrap(),
            p1
        );

        let household = service.get_household(&identity("b@x.com")).await.unwrap();
        assert_eq!(household.members, vec!["a@x.com", "b@x.com"]);
    }

    #[tokio::test]
    async fn invite_marks_onboarding_step() {
        let service = test_service();
        let household_id = service.resolve_household(&identity("a@x.com")).await.unwrap();

        service
            .invite_member(&identity("a@x.com"), invite("b@x.com"))
            .await
            .unwrap();

        let settings = service
            .object_storage
            .json(&format!("{household_id}/settings.json"))
            .unwrap();
        assert_eq!(settings["inviteSent"], json!(true));
    }

    #[tokio::test]
    async fn invite_reports_replaced_household() {
        let service = test_service();
        let p1 = service.resolve_household(&identity("a@x.com")).await.unwrap();
        let p2 = service.resolve_household(&identity("b@x.com")).await.unwrap();

        let invitation = service
            .invite_member(&identity("a@x.com"), invite("B@x.com"))
            .await
            .unwrap();

        assert_eq!(invitation.replaced_household, Some(p2));
        assert_eq!(invitation.member_email, "b@x.com");
        assert_eq!(
            service.resolve_household(&identity("b@x.com")).await.unwrap(),
            p1
        );
    }

    #[tokio::test]
    async fn invite_without_registry_fails_without_writing() {
        let service = test_service();

        let result = service
            .invite_member(&identity("a@x.com"), invite("b@x.com"))
            .await;

        assert!(matches!(result, Err(CoreError::RegistryMissing)));
        assert_eq!(service.object_storage.write_count(), 0);
    }

    #[tokio::test]
    async fn invite_from_unmapped_identity_fails_without_writing() {
        let service = test_service();
        service.resolve_household(&identity("a@x.com")).await.unwrap();
        let writes = service.object_storage.write_count();

        let result = service
            .invite_member(&identity("stranger@x.com"), invite("b@x.com"))
            .await;

        assert!(matches!(result, Err(CoreError::NoHousehold)));
        assert_eq!(service.object_storage.write_count(), writes);
        assert!(
            service
                .resolve_household(&identity("a@x.com"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn invite_rejects_blank_email() {
        let service = test_service();
        service.resolve_household(&identity("a@x.com")).await.unwrap();

        let result = service
            .invite_member(&identity("a@x.com"), invite("   "))
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn unreadable_registry_is_never_replaced() {
        let service = test_service();
        service
            .object_storage
            .put_raw("admin/users.json", b"{ truncated".to_vec());

        let result = service.resolve_household(&identity("a@x.com")).await;

        assert!(result.is_err());
        assert_eq!(
            service.object_storage.raw("admin/users.json").unwrap(),
            b"{ truncated".to_vec()
        );
    }

    #[tokio::test]
    async fn concurrent_first_sights_all_persist() {
        let service = test_service();

        let tasks: Vec<_> = (0..10)
            .map(|n| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .resolve_household(&identity(&format!("user{n}@x.com")))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = service.object_storage.json("admin/users.json").unwrap();
        assert_eq!(stored.as_object().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn mixed_case_registry_keys_resolve_without_a_new_household() {
        let service = test_service();
        service
            .object_storage
            .put_json("admin/users.json", json!({ "Hiro@Example.com": "legacy" }));

        let household_id = service
            .resolve_household(&identity("hiro@example.com"))
            .await
            .unwrap();

        assert_eq!(household_id, HouseholdId::new("legacy"));
        assert_eq!(service.object_storage.write_count(), 0);

        let invitation = service
            .invite_member(&identity("HIRO@example.com"), invite("guest@example.com"))
            .await
            .unwrap();
        assert_eq!(invitation.household_id, HouseholdId::new("legacy"));
        let stored = service.object_storage.json("admin/users.json").unwrap();
        assert_eq!(
            stored,
            json!({ "hiro@example.com": "legacy", "guest@example.com": "legacy" })
        );
    }
}
