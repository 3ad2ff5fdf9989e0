use std::fmt;

use crate::domain::{document::entities::DocumentName, household::entities::HouseholdId};

const REGISTRY_KEY: &str = "admin/users.json";

/// Path of a blob inside the data bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// The single identity → household registry.
    pub fn registry() -> Self {
        Self(REGISTRY_KEY.to_string())
    }

    /// `{household_id}/{document}.json`
    pub fn document(household_id: &HouseholdId, name: DocumentName) -> Self {
        Self(format!("{}/{}", household_id, name.file_name()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lives_under_admin() {
        assert_eq!(ObjectKey::registry().as_str(), "admin/users.json");
    }

    #[test]
    fn documents_are_scoped_by_household() {
        let id = HouseholdId::new("7f0c1d1e-7c1a-4f44-9d8e-0a1b2c3d4e5f");
        let key = ObjectKey::document(&id, DocumentName::ShoppingList);

        assert_eq!(
            key.as_str(),
            "7f0c1d1e-7c1a-4f44-9d8e-0a1b2c3d4e5f/shopping-list.json"
        );
    }
}
