use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{generate_uuid_v7, lenient},
    llm::{errors::AiGatewayError, helpers::non_blank},
    profile::entities::ProfileKey,
    schedule::entities::MealType,
};

/// Super Gut ceiling on net carbs for a single meal, in grams.
pub const NET_CARB_LIMIT_GRAMS: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuperGutAnalysis {
    pub net_carbs: f64,
    #[serde(default)]
    pub compliant: bool,
    #[serde(default)]
    pub notes: String,
}

impl SuperGutAnalysis {
    pub fn new(net_carbs: f64, notes: impl Into<String>) -> Self {
        Self {
            net_carbs,
            compliant: net_carbs <= NET_CARB_LIMIT_GRAMS,
            notes: notes.into(),
        }
    }
}

/// Meal analysis as reported by the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedAnalysis {
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub net_carbs: Option<f64>,
    #[serde(default)]
    pub compliant: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<ReportedAnalysis> for SuperGutAnalysis {
    type Error = AiGatewayError;

    fn try_from(reported: ReportedAnalysis) -> Result<Self, Self::Error> {
        let net_carbs = reported
            .net_carbs
            .filter(|carbs| carbs.is_finite() && *carbs >= 0.0)
            .ok_or_else(|| {
                AiGatewayError::SchemaMismatch(format!(
                    "net carbs must be a non-negative number, got {:?}",
                    reported.net_carbs
                ))
            })?;

        let analysis = SuperGutAnalysis::new(net_carbs, non_blank(reported.notes).unwrap_or_default());
        if reported.compliant.is_some_and(|c| c != analysis.compliant) {
            tracing::debug!(net_carbs, "Model compliance verdict disagrees with its own estimate");
        }

        Ok(analysis)
    }
}

/// One eaten meal, stored newest first in `history.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    #[serde(default = "new_log_id", deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::date")]
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<MealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attendees: Vec<ProfileKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<SuperGutAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn new_log_id() -> String {
    generate_uuid_v7().to_string()
}

impl MealLog {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: new_log_id(),
            date,
            logged_at: Some(Utc::now()),
            slot: None,
            recipe_title: None,
            description: None,
            attendees: Vec::new(),
            analysis: None,
            rating: None,
            notes: None,
        }
    }

    /// Entries written without a timestamp are placed at noon of their date.
    pub fn backfill_logged_at(&mut self) {
        if self.logged_at.is_none() {
            self.logged_at = self.date.and_hms_opt(12, 0, 0).map(|noon| noon.and_utc());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_is_recomputed() {
        let reported = ReportedAnalysis {
            net_carbs: Some(22.0),
            compliant: Some(true),
            notes: Some(" Too much rice ".to_string()),
        };

        let analysis = SuperGutAnalysis::try_from(reported).unwrap();
        assert!(!analysis.compliant);
        assert_eq!(analysis.notes, "Too much rice");

        assert!(SuperGutAnalysis::new(15.0, "").compliant);
    }

    #[test]
    fn invalid_carb_estimates_are_rejected() {
        for net_carbs in [None, Some(-1.0), Some(f64::NAN)] {
            let reported = ReportedAnalysis {
                net_carbs,
                compliant: Some(true),
                notes: None,
            };
            assert!(matches!(
                SuperGutAnalysis::try_from(reported),
                Err(AiGatewayError::SchemaMismatch(_))
            ));
        }
    }

    #[test]
    fn reads_entries_logged_by_older_clients() {
        let log: MealLog = serde_json::from_str(
            r#"{"date": "2025-12-02T02:08:23.232Z", "recipeTitle": "Stew", "rating": 4, "notes": "more salt"}"#,
        )
        .unwrap();

        assert_eq!(log.date, NaiveDate::from_ymd_opt(2025, 12, 2).unwrap());
        assert_eq!(log.rating, Some(4));
        assert!(log.attendees.is_empty());
        assert!(!log.id.is_empty());
    }

    #[test]
    fn missing_logged_at_is_noon_of_the_meal_date() {
        let mut log: MealLog = serde_json::from_str(r#"{"date": "2025-12-02"}"#).unwrap();
        assert!(log.logged_at.is_none());

        log.backfill_logged_at();

        assert_eq!(
            log.logged_at.map(|at| at.to_rfc3339()),
            Some("2025-12-02T12:00:00+00:00".to_string())
        );
    }

    #[test]
    fn existing_logged_at_is_kept() {
        let mut log = MealLog::new(NaiveDate::from_ymd_opt(2025, 12, 2).unwrap());
        let logged_at = log.logged_at;

        log.backfill_logged_at();

        assert_eq!(log.logged_at, logged_at);
    }
}
