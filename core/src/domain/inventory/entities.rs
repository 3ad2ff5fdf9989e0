use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::lenient, llm::helpers::non_blank};

pub const MANUAL_CATEGORY: &str = "Manual";
pub const DEFAULT_QUANTITY: &str = "some";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ingredient {
    /// Entry typed in by hand rather than recognized from a photo.
    pub fn manual(name: impl Into<String>, quantity: Option<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(non_blank(quantity).unwrap_or_else(|| DEFAULT_QUANTITY.to_string())),
            category: Some(MANUAL_CATEGORY.to_string()),
        }
    }

    /// Key used to spot the same ingredient under different spellings.
    pub fn match_key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// One ingredient as reported by the model, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizedIngredient {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub category: Option<String>,
}

impl RecognizedIngredient {
    /// `None` when the model gave no usable name.
    pub fn into_ingredient(self) -> Option<Ingredient> {
        Some(Ingredient {
            name: non_blank(self.name)?,
            quantity: non_blank(self.quantity),
            category: non_blank(self.category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_entries_default_quantity() {
        let ingredient = Ingredient::manual("Eggs", Some("  ".to_string()));
        assert_eq!(ingredient.quantity.as_deref(), Some("some"));
        assert_eq!(ingredient.category.as_deref(), Some("Manual"));
    }

    #[test]
    fn recognized_ingredient_needs_a_name() {
        let items: Vec<RecognizedIngredient> = serde_json::from_str(
            r#"[{"name": " Kale ", "quantity": 2, "category": "Produce"}, {"name": "  "}, {"quantity": "1"}]"#,
        )
        .unwrap();

        let valid: Vec<Ingredient> = items
            .into_iter()
            .filter_map(RecognizedIngredient::into_ingredient)
            .collect();

        assert_eq!(
            valid,
            vec![Ingredient {
                name: "Kale".to_string(),
                quantity: Some("2".to_string()),
                category: Some("Produce".to_string()),
            }]
        );
    }
}
