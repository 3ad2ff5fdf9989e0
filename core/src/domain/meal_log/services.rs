use tracing::instrument;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    document::{entities::DocumentName, ports::DocumentService},
    household::ports::HouseholdService,
    llm::{
        helpers::{non_blank, parse_llm_json},
        ports::LLMClient,
        prompts::analyze_meal_prompt,
        schema::meal_analysis_schema,
    },
    meal_log::{
        entities::{MealLog, ReportedAnalysis, SuperGutAnalysis},
        ports::MealLogService,
        value_objects::{AnalyzeMealInput, LogMealInput},
    },
    storage::ports::ObjectStoragePort,
};

impl<OS, LLM> MealLogService for Service<OS, LLM>
where
    OS: ObjectStoragePort,
    LLM: LLMClient,
{
    #[instrument(skip(self, identity), fields(identity = %identity.log_id()))]
    async fn get_history(&self, identity: &Identity) -> Result<Vec<MealLog>, CoreError> {
        let household_id = self.resolve_household(identity).await?;

        let mut history: Vec<MealLog> = self
            .load_document_or_default(&household_id, DocumentName::History, Vec::new())
            .await;
        history.iter_mut().for_each(MealLog::backfill_logged_at);

        Ok(history)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id()))]
    async fn analyze_meal(
        &self,
        identity: &Identity,
        input: AnalyzeMealInput,
    ) -> Result<SuperGutAnalysis, CoreError> {
        let raw = self
            .llm_client
            .generate(
                analyze_meal_prompt(),
                vec![input.image],
                meal_analysis_schema(),
            )
            .await?;

        let analysis = SuperGutAnalysis::try_from(parse_llm_json::<ReportedAnalysis>(&raw)?)?;
        tracing::info!(
            net_carbs = analysis.net_carbs,
            compliant = analysis.compliant,
            "Meal analyzed"
        );

        Ok(analysis)
    }

    #[instrument(skip(self, identity, input), fields(identity = %identity.log_id(), date = %input.date))]
    async fn log_meal(&self, identity: &Identity, input: LogMealInput) -> Result<MealLog, CoreError> {
        let recipe_title = non_blank(input.recipe_title);
        let description = non_blank(input.description);
        if recipe_title.is_none() && description.is_none() && input.analysis.is_none() {
            return Err(CoreError::InvalidInput(
                "a recipe title, a description or an analysis is required".to_string(),
            ));
        }

        let analysis = input
            .analysis
            .map(|analysis| {
                if !analysis.net_carbs.is_finite() || analysis.net_carbs < 0.0 {
                    return Err(CoreError::InvalidInput(
                        "net carbs must be a non-negative number".to_string(),
                    ));
                }
                Ok(SuperGutAnalysis::new(analysis.net_carbs, analysis.notes))
            })
            .transpose()?;

        let household_id = self.resolve_household(identity).await?;
        let log = MealLog {
            slot: Some(input.slot),
            recipe_title,
            description,
            attendees: input.attendees,
            analysis,
            ..MealLog::new(input.date)
        };

        self.update_document(
            &household_id,
            DocumentName::History,
            Vec::new,
            |history: &mut Vec<MealLog>| {
                history.insert(0, log.clone());
                Ok(())
            },
        )
        .await?;

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        domain::{
            llm::errors::AiGatewayError, profile::entities::ProfileKey,
            schedule::entities::MealType,
        },
        test_support::{identity, image, test_service},
    };

    fn logged(description: &str, analysis: Option<SuperGutAnalysis>) -> LogMealInput {
        LogMealInput {
            date: NaiveDate::from_ymd_opt(2025, 12, 2).unwrap(),
            slot: MealType::Lunch,
            recipe_title: None,
            description: Some(description.to_string()),
            attendees: vec![ProfileKey::Wife, ProfileKey::Dad],
            analysis,
        }
    }

    #[tokio::test]
    async fn analysis_is_validated_and_not_stored() {
        let service = test_service();
        service
            .llm_client
            .respond(r#"{"netCarbs": "18", "compliant": true, "notes": "Rice"}"#);

        let analysis = service
            .analyze_meal(&identity("a@x.com"), AnalyzeMealInput { image: image() })
            .await
            .unwrap();

        assert_eq!(analysis.net_carbs, 18.0);
        assert!(!analysis.compliant);
        assert_eq!(service.llm_client.calls()[0].image_count, 1);
        assert_eq!(service.object_storage.write_count(), 0);
    }

    #[tokio::test]
    async fn unusable_analysis_is_a_gateway_error() {
        let service = test_service();
        service
            .llm_client
            .respond(r#"{"netCarbs": -4, "compliant": true, "notes": ""}"#);

        let result = service
            .analyze_meal(&identity("a@x.com"), AnalyzeMealInput { image: image() })
            .await;

        assert!(matches!(
            result,
            Err(CoreError::AiGateway(AiGatewayError::SchemaMismatch(_)))
        ));
    }

    #[tokio::test]
    async fn logs_are_newest_first() {
        let service = test_service();
        let caller = identity("a@x.com");

        service.log_meal(&caller, logged("Leftover steak", None)).await.unwrap();
        let latest = service
            .log_meal(
                &caller,
                logged("Omelette", Some(SuperGutAnalysis::new(4.0, "Eggs"))),
            )
            .await
            .unwrap();

        let history = service.get_history(&caller).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], latest);
        assert_eq!(history[1].description.as_deref(), Some("Leftover steak"));
    }

    #[tokio::test]
    async fn log_needs_something_to_describe_the_meal() {
        let service = test_service();

        let result = service
            .log_meal(&identity("a@x.com"), logged("  ", None))
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn photo_analysis_alone_can_be_logged() {
        let service = test_service();
        let input = LogMealInput {
            description: None,
            ..logged("", Some(SuperGutAnalysis::new(8.0, "Salmon and greens")))
        };

        let log = service.log_meal(&identity("a@x.com"), input).await.unwrap();

        assert!(log.recipe_title.is_none());
        assert!(log.description.is_none());
        assert_eq!(log.analysis.as_ref().map(|a| a.net_carbs), Some(8.0));
        assert_eq!(service.get_history(&identity("a@x.com")).await.unwrap(), vec![log]);
    }

    #[tokio::test]
    async fn client_compliance_verdict_is_recomputed() {
        let service = test_service();
        let claimed = SuperGutAnalysis {
            net_carbs: 60.0,
            compliant: true,
            notes: "Pasta".to_string(),
        };

        let log = service
            .log_meal(&identity("a@x.com"), logged("Pasta night", Some(claimed)))
            .await
            .unwrap();

        let stored = service.get_history(&identity("a@x.com")).await.unwrap();
        assert_eq!(log.analysis.as_ref().map(|a| a.compliant), Some(false));
        assert_eq!(stored[0].analysis.as_ref().map(|a| a.compliant), Some(false));
    }

    #[tokio::test]
    async fn negative_or_non_finite_carbs_are_rejected() {
        let service = test_service();

        for net_carbs in [-3.0, f64::NAN, f64::INFINITY] {
            let analysis = SuperGutAnalysis {
                net_carbs,
                compliant: true,
                notes: String::new(),
            };
            let result = service
                .log_meal(&identity("a@x.com"), logged("Toast", Some(analysis)))
                .await;

            assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        }
        assert_eq!(service.object_storage.write_count(), 0);
    }

    #[tokio::test]
    async fn history_fills_missing_logged_at_from_the_meal_date() {
        let service = test_service();
        let caller = identity("a@x.com");
        service.log_meal(&caller, logged("Soup", None)).await.unwrap();
        let household_id = service.resolve_household(&caller).await.unwrap();
        service
            .update_document(
                &household_id,
                DocumentName::History,
                Vec::new,
                |history: &mut Vec<MealLog>| {
                    history.iter_mut().for_each(|log| log.logged_at = None);
                    Ok(())
                },
            )
            .await
            .unwrap();

        let history = service.get_history(&caller).await.unwrap();

        let expected = NaiveDate::from_ymd_opt(2025, 12, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();
        assert_eq!(history[0].logged_at, Some(expected));
    }
}
