use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three household roles recipes are rated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKey {
    Wife,
    Son,
    Dad,
}

impl ProfileKey {
    pub const ALL: [ProfileKey; 3] = [ProfileKey::Wife, ProfileKey::Son, ProfileKey::Dad];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKey::Wife => "wife",
            ProfileKey::Son => "son",
            ProfileKey::Dad => "dad",
        }
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: ProfileKey,
    pub name: String,
    pub dietary_needs: String,
}

impl UserProfile {
    pub fn new(id: ProfileKey, name: impl Into<String>, dietary_needs: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dietary_needs: dietary_needs.into(),
        }
    }
}

/// Profiles used until the household saves its own.
pub fn default_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::new(
            ProfileKey::Wife,
            "Vera (Wife)",
            "Low carb, Low sugar (Neuropathy/Pre-diabetes)",
        ),
        UserProfile::new(
            ProfileKey::Son,
            "Hiro (Son)",
            "High calorie, filling (Teenager)",
        ),
        UserProfile::new(ProfileKey::Dad, "Noel (Me)", "Weight loss focused"),
    ]
}
