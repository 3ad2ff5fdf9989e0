use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::authentication::value_objects::normalize_email;

/// Opaque id of a household: the sharing boundary for every document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct HouseholdId(String);

impl HouseholdId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for a first-time identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HouseholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identity → household mapping stored at `admin/users.json`.
///
/// Serialized as a flat JSON object `{ "email": "household id" }`. Keys are
/// normalized on read; an already normalized key wins over its variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HouseholdRegistry {
    members: BTreeMap<String, HouseholdId>,
}

impl<'de> Deserialize<'de> for HouseholdRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = BTreeMap::<String, HouseholdId>::deserialize(deserializer)?;

        let mut members = BTreeMap::new();
        for (email, household_id) in stored {
            let normalized = normalize_email(&email);
            if normalized == email {
                members.insert(normalized, household_id);
            } else {
                members.entry(normalized).or_insert(household_id);
            }
        }

        Ok(Self { members })
    }
}

impl HouseholdRegistry {
    pub fn household_of(&self, email: &str) -> Option<&HouseholdId> {
        self.members.get(email)
    }

    /// Maps `email` to `household_id`, returning the household it pointed to before.
    pub fn assign(&mut self, email: &str, household_id: HouseholdId) -> Option<HouseholdId> {
        self.members.insert(email.to_string(), household_id)
    }

    pub fn contains_household(&self, household_id: &HouseholdId) -> bool {
        self.members.values().any(|id| id == household_id)
    }

    pub fn members_of(&self, household_id: &HouseholdId) -> Vec<String> {
        self.members
            .iter()
            .filter(|(_, id)| *id == household_id)
            .map(|(email, _)| email.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub id: HouseholdId,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub household_id: HouseholdId,
    pub member_email: String,
    /// Household the invited member was mapped to before, now unreachable.
    pub replaced_household: Option<HouseholdId>,
}
