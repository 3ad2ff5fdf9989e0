use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::llm::helpers::non_blank;

/// Aisle for items the model did not place.
pub const FALLBACK_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
            category: None,
        }
    }

    fn match_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingCategory {
    pub category: String,
    pub items: Vec<ShoppingItem>,
}

/// A store aisle and the item names the model put in it.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestedCategory {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

/// Applies the model's aisles to `items` and groups them.
///
/// Names the model invented are ignored; items it skipped land in
/// [`FALLBACK_CATEGORY`]. Groups keep the model's order, with the fallback last.
pub fn apply_categories(
    items: &mut [ShoppingItem],
    suggestions: Vec<SuggestedCategory>,
) -> Vec<ShoppingCategory> {
    let mut order: Vec<String> = Vec::new();
    let mut assignment: HashMap<String, String> = HashMap::new();

    for suggestion in suggestions {
        let Some(category) = non_blank(suggestion.category) else {
            continue;
        };
        if !order.contains(&category) {
            order.push(category.clone());
        }
        for name in suggestion.items {
            assignment
                .entry(name.trim().to_lowercase())
                .or_insert_with(|| category.clone());
        }
    }

    for item in items.iter_mut() {
        let category = assignment
            .get(&item.match_key())
            .cloned()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
        item.category = Some(category);
    }

    if !order.iter().any(|c| c == FALLBACK_CATEGORY) {
        order.push(FALLBACK_CATEGORY.to_string());
    }

    order
        .into_iter()
        .map(|category| ShoppingCategory {
            items: items
                .iter()
                .filter(|item| item.category.as_deref() == Some(category.as_str()))
                .cloned()
                .collect(),
            category,
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggested(category: &str, items: &[&str]) -> SuggestedCategory {
        SuggestedCategory {
            category: Some(category.to_string()),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn only_listed_items_are_categorized() {
        let mut items = vec![
            ShoppingItem::new("Milk"),
            ShoppingItem::new("kale"),
            ShoppingItem::new("batteries"),
        ];

        let groups = apply_categories(
            &mut items,
            vec![
                suggested("Produce", &["Kale", "Bananas"]),
                suggested("Dairy", &["milk"]),
                suggested("Bakery", &["bread"]),
            ],
        );

        assert_eq!(
            groups
                .iter()
                .map(|g| (g.category.as_str(), g.items.len()))
                .collect::<Vec<_>>(),
            vec![("Produce", 1), ("Dairy", 1), ("Other", 1)]
        );
        assert_eq!(items[2].category.as_deref(), Some("Other"));
        assert_eq!(items[0].category.as_deref(), Some("Dairy"));
    }
}
