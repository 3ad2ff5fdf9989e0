pub mod cook_recipe;
pub mod generate_recipes;
pub mod get_recipes;
pub mod get_rejected_recipes;
pub mod reject_recipe;
