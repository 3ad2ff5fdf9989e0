use scantry_core::domain::settings::entities::HouseholdSettings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsValidator {
    #[serde(default)]
    pub onboarding_dismissed: bool,
}

impl From<UpdateSettingsValidator> for HouseholdSettings {
    fn from(payload: UpdateSettingsValidator) -> Self {
        HouseholdSettings {
            onboarding_dismissed: payload.onboarding_dismissed,
            ..HouseholdSettings::default()
        }
    }
}
