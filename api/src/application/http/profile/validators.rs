use scantry_core::domain::profile::entities::{ProfileKey, UserProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileValidator {
    pub id: ProfileKey,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub dietary_needs: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfilesValidator {
    #[validate(length(min = 1, message = "at least one profile is required"))]
    #[validate(nested)]
    pub profiles: Vec<ProfileValidator>,
}

impl From<ProfileValidator> for UserProfile {
    fn from(profile: ProfileValidator) -> Self {
        UserProfile::new(profile.id, profile.name, profile.dietary_needs)
    }
}
