use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    feedback::{
        entities::FeedbackEntry, ports::FeedbackService, value_objects::SubmitFeedbackInput,
    },
    household::ports::HouseholdService,
    llm::ports::LLMClient,
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> FeedbackService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_feedback(&self, identity: &Identity) -> Result<Vec<FeedbackEntry>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        Ok(self
            .load_document_or_default(&household_id, DocumentName::Feedback, Vec::new())
            .await)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), kind = ?input.kind))]
    async fn submit_feedback(
        &self,
        identity: &Identity,
        input: SubmitFeedbackInput,
    ) -> Result<FeedbackEntry, CoreError> {
        let message = input.message.trim();
        if message.is_empty() {
            return Err(CoreError::InvalidInput(
                "feedback message cannot be empty".to_string(),
            ));
        }

        let household_id = self.resolve_household(identity).await?;
        let entry = FeedbackEntry {
            id: generate_uuid_v7().to_string(),
            user: identity.email().to_string(),
            kind: input.kind,
            message: message.to_string(),
            date: Utc::now(),
        };

        self.update_document(
            &household_id,
            DocumentName::Feedback,
            Vec::new,
            |entries: &mut Vec<FeedbackEntry>| {
                entries.insert(0, entry.clone());
                Ok(())
            },
        )
        .await?;

        tracing::info!(feedback_id = %entry.id, "Feedback submitted");

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::feedback::entities::FeedbackKind,
        test_support::{identity, test_service},
    };

    fn feedback(kind: FeedbackKind, message: &str) -> SubmitFeedbackInput {
        SubmitFeedbackInput {
            kind,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn newest_feedback_first() {
        let service = test_service();
        let caller = identity("a@x.com");

        service
            .submit_feedback(&caller, feedback(FeedbackKind::Suggestion, "Dark mode"))
            .await
            .unwrap();
        let latest = service
            .submit_feedback(&caller, feedback(FeedbackKind::BugReport, "  Scan hangs "))
            .await
            .unwrap();

        let entries = service.get_feedback(&caller).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], latest);
        assert_eq!(entries[0].message, "Scan hangs");
        assert_eq!(entries[0].user, "a@x.com");
    }

    #[tokio::test]
    async fn blank_feedback_is_rejected_without_writing() {
        let service = test_service();

        let result = service
            .submit_feedback(&identity("a@x.com"), feedback(FeedbackKind::Other, "   "))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        assert_eq!(service.object_storage.write_count(), 0);
    }
}
