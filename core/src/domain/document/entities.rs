use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every per-household document the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentName {
    Inventory,
    Recipes,
    Rejected,
    Schedule,
    ShoppingList,
    History,
    Settings,
    Profiles,
    Feedback,
}

impl DocumentName {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentName::Inventory => "inventory",
            DocumentName::Recipes => "recipes",
            DocumentName::Rejected => "rejected",
            DocumentName::Schedule => "schedule",
            DocumentName::ShoppingList => "shopping-list",
            DocumentName::History => "history",
            DocumentName::Settings => "settings",
            DocumentName::Profiles => "profiles",
            DocumentName::Feedback => "feedback",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
