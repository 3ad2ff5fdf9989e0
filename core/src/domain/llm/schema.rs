use serde_json::json;

/// Schema for ingredients recognized in pantry photos
pub fn ingredients_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "quantity": { "type": "string" },
                "category": { "type": "string" }
            },
            "required": ["name"]
        }
    })
}

/// Schema for suggested dinner recipes
pub fn recipes_schema() -> serde_json::Value {
    let per_member_bool = json!({
        "type": "object",
        "properties": {
            "wife": { "type": "boolean" },
            "son": { "type": "boolean" },
            "dad": { "type": "boolean" }
        },
        "required": ["wife", "son", "dad"]
    });
    let per_member_number = json!({
        "type": "object",
        "properties": {
            "wife": { "type": "number" },
            "son": { "type": "number" },
            "dad": { "type": "number" }
        },
        "required": ["wife", "son", "dad"]
    });

    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "title": { "type": "string" },
                "description": { "type": "string" },
                "ingredients": { "type": "array", "items": { "type": "string" } },
                "instructions": { "type": "array", "items": { "type": "string" } },
                "tags": { "type": "array", "items": { "type": "string" } },
                "suitability": per_member_bool,
                "calories": per_member_number,
                "netCarbs": { "type": "number" },
                "superGutBenefit": { "type": "string" },
                "reheatFriendly": { "type": "boolean" }
            },
            "required": [
                "id", "title", "description", "ingredients", "instructions",
                "tags", "suitability", "reheatFriendly"
            ]
        }
    })
}

/// Schema for a shopping list grouped by store aisle
pub fn shopping_categories_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "category": { "type": "string" },
                "items": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["category", "items"]
        }
    })
}

/// Schema for the net carb estimate of one meal
pub fn meal_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "netCarbs": { "type": "number" },
            "compliant": { "type": "boolean" },
            "notes": { "type": "string" }
        },
        "required": ["netCarbs", "compliant", "notes"]
    })
}
