pub mod add_item;
pub mod add_recipe_ingredients;
pub mod categorize;
pub mod clear_checked;
pub mod get_shopping_list;
pub mod remove_item;
pub mod toggle_item;
