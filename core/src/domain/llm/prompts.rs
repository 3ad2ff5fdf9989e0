//! Instructions sent to the model for each task.

use crate::domain::{
    inventory::entities::Ingredient, meal_log::entities::NET_CARB_LIMIT_GRAMS,
    profile::entities::UserProfile, shopping_list::entities::ShoppingItem,
};

pub const RECIPES_PER_PLAN: usize = 3;

fn describe_inventory(inventory: &[Ingredient]) -> String {
    inventory
        .iter()
        .map(|item| match &item.quantity {
            Some(quantity) => format!("{} ({})", item.name, quantity),
            None => item.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn identify_ingredients_prompt(photo_count: usize, inventory: &[Ingredient]) -> String {
    let already_known = if inventory.is_empty() {
        "The inventory is currently empty.".to_string()
    } else {
        format!(
            "Already in the inventory (do not list these again): {}.",
            describe_inventory(inventory)
        )
    };

    format!(
        "Analyze {photo_count} image(s) of a fridge or pantry.\n\
         List all visible food ingredients. If the same item appears in several images, list it once.\n\
         {already_known}\n\
         Return ONLY a JSON array of objects with the following structure:\n\
         [{{ \"name\": \"item name\", \"quantity\": \"estimated quantity\", \"category\": \"category name\" }}]\n\
         Do not add any markdown formatting."
    )
}

pub fn meal_plan_prompt(
    inventory: &[Ingredient],
    profiles: &[UserProfile],
    rejected_titles: &[String],
) -> String {
    let profile_lines = profiles
        .iter()
        .enumerate()
        .map(|(n, profile)| {
            format!(
                "{}. {} [{}]: {}.",
                n + 1,
                profile.name,
                profile.id,
                profile.dietary_needs
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let avoid = if rejected_titles.is_empty() {
        String::new()
    } else {
        format!(
            "\nThe family rejected these before, do not suggest them or close variants: {}.\n",
            rejected_titles.join(", ")
        )
    };

    format!(
        "You are a meal planner for a family with specific dietary needs.\n\
         Inventory: {inventory}\n\
         \n\
         Profiles:\n\
         {profile_lines}\n\
         General: No microwave available. Reheating must be oven/stove friendly or quick execution.\n\
         Super Gut rule: aim for at most {limit} g net carbs per serving and report the estimate as netCarbs.\n\
         {avoid}\n\
         Task:\n\
         Suggest {count} distinct dinner recipes that can be made primarily from the inventory \
         (assume basic staples like oil, spices, flour availability).\n\
         Each recipe must accommodate the profiles (e.g. by having modular carbs or naturally low carb base).\n\
         For each recipe, explicitly verify if it meets each profile's needs and set suitability accordingly \
         (wife, son, dad), estimate calories per serving for each of them, \
         and explain in superGutBenefit why it is good for the gut.\n\
         \n\
         Return ONLY a JSON array of objects:\n\
         [{{\n\
           \"id\": \"unique_string\",\n\
           \"title\": \"Recipe Title\",\n\
           \"description\": \"Short description\",\n\
           \"ingredients\": [\"list\", \"of\", \"ingredients\"],\n\
           \"instructions\": [\"step 1\", \"step 2\"],\n\
           \"tags\": [\"Low Carb\", \"Hearty\"],\n\
           \"suitability\": {{ \"wife\": true, \"son\": true, \"dad\": false }},\n\
           \"calories\": {{ \"wife\": 450, \"son\": 900, \"dad\": 550 }},\n\
           \"netCarbs\": 12,\n\
           \"superGutBenefit\": \"Why this helps\",\n\
           \"reheatFriendly\": true\n\
         }}]\n\
         Do not add markdown formatting.",
        inventory = describe_inventory(inventory),
        limit = NET_CARB_LIMIT_GRAMS,
        count = RECIPES_PER_PLAN,
    )
}

pub fn categorize_shopping_list_prompt(items: &[ShoppingItem]) -> String {
    let names = items
        .iter()
        .map(|item| format!("- {}", item.name))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Sort this shopping list into grocery store aisles (for example Produce, Dairy, Meat & Fish, \
         Bakery, Pantry, Frozen, Household).\n\
         Use every item exactly once and keep each item name exactly as written.\n\
         Items:\n\
         {names}\n\
         Return ONLY a JSON array of objects: [{{ \"category\": \"Aisle\", \"items\": [\"item name\"] }}]\n\
         Do not add markdown formatting."
    )
}

pub fn analyze_meal_prompt() -> String {
    format!(
        "You are a nutritionist applying Dr. William Davis' Super Gut protocol.\n\
         Estimate the net carbs (total carbs minus fiber, in grams) of the meal in this photo.\n\
         A meal is compliant when it has at most {NET_CARB_LIMIT_GRAMS} g net carbs.\n\
         In notes, name the main carb sources and suggest a swap when the meal is not compliant.\n\
         Return ONLY a JSON object: {{ \"netCarbs\": 12, \"compliant\": true, \"notes\": \"...\" }}\n\
         Do not add markdown formatting."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::entities::default_profiles;

    #[test]
    fn meal_plan_prompt_carries_household_context() {
        let inventory = vec![
            Ingredient::manual("Eggs", Some("6".to_string())),
            Ingredient {
                name: "Spinach".to_string(),
                quantity: None,
                category: None,
            },
        ];
        let prompt = meal_plan_prompt(
            &inventory,
            &default_profiles(),
            &["Pasta Bake".to_string()],
        );

        assert!(prompt.contains("Inventory: Eggs (6), Spinach"));
        assert!(prompt.contains("Vera (Wife) [wife]: Low carb"));
        assert!(prompt.contains("No microwave"));
        assert!(prompt.contains("15 g net carbs"));
        assert!(prompt.contains("Pasta Bake"));
        assert!(prompt.contains("Suggest 3 distinct dinner recipes"));
    }

    #[test]
    fn identify_prompt_lists_known_items() {
        let prompt = identify_ingredients_prompt(2, &[Ingredient::manual("Milk", None)]);
        assert!(prompt.contains("2 image(s)"));
        assert!(prompt.contains("Milk (some)"));

        assert!(identify_ingredients_prompt(1, &[]).contains("currently empty"));
    }
}
