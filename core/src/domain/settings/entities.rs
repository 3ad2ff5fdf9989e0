use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSettings {
    #[serde(default)]
    pub onboarding_dismissed: bool,
    #[serde(default)]
    pub invite_sent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStep {
    pub id: String,
    pub label: String,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub steps: Vec<OnboardingStep>,
    /// Share of completed steps, 0 to 100
    pub progress: u8,
    pub all_complete: bool,
    pub dismissed: bool,
}

impl OnboardingStatus {
    pub fn from_checks(
        has_inventory: bool,
        has_schedule: bool,
        settings: &HouseholdSettings,
    ) -> Self {
        let steps = vec![
            OnboardingStep {
                id: "inventory".to_string(),
                label: "Scan your fridge".to_string(),
                description: "Take a photo to build your inventory".to_string(),
                completed: has_inventory,
            },
            OnboardingStep {
                id: "schedule".to_string(),
                label: "Plan a meal".to_string(),
                description: "Add a recipe to your weekly schedule".to_string(),
                completed: has_schedule,
            },
            OnboardingStep {
                id: "invite".to_string(),
                label: "Invite family".to_string(),
                description: "Share your household with someone".to_string(),
                completed: settings.invite_sent,
            },
        ];

        let done = steps.iter().filter(|step| step.completed).count();
        let progress = (done * 100 / steps.len()) as u8;

        Self {
            all_complete: done == steps.len(),
            progress,
            steps,
            dismissed: settings.onboarding_dismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_counts_completed_steps() {
        let settings = HouseholdSettings {
            onboarding_dismissed: false,
            invite_sent: true,
        };
        let status = OnboardingStatus::from_checks(true, false, &settings);

        assert_eq!(status.progress, 66);
        assert!(!status.all_complete);
        assert_eq!(
            status
                .steps
                .iter()
                .map(|step| step.completed)
                .collect::<Vec<_>>(),
            vec![true, false, true]
        );

        let complete = OnboardingStatus::from_checks(true, true, &settings);
        assert_eq!(complete.progress, 100);
        assert!(complete.all_complete);
    }

    #[test]
    fn legacy_settings_default_missing_flags() {
        let settings: HouseholdSettings =
            serde_json::from_str(r#"{"onboardingDismissed": true}"#).unwrap();
        assert!(settings.onboarding_dismissed);
        assert!(!settings.invite_sent);
    }
}
