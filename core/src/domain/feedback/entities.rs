use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::lenient;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FeedbackKind {
    #[default]
    Suggestion,
    #[serde(rename = "Bug Report")]
    BugReport,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    pub user: String,
    #[serde(rename = "type", default)]
    pub kind: FeedbackKind,
    pub message: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_with_numeric_ids() {
        let entry: FeedbackEntry = serde_json::from_str(
            r#"{"id": 1733100000000, "user": "a@x.com", "type": "Bug Report", "message": "Crash", "date": "2025-12-02T02:08:23.232Z"}"#,
        )
        .unwrap();

        assert_eq!(entry.id, "1733100000000");
        assert_eq!(entry.kind, FeedbackKind::BugReport);
        assert_eq!(
            serde_json::to_value(entry).unwrap()["type"],
            serde_json::json!("Bug Report")
        );
    }
}
