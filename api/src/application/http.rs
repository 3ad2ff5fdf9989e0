pub mod feedback;
pub mod health;
pub mod household;
pub mod inventory;
pub mod meal_log;
pub mod profile;
pub mod recipe;
pub mod schedule;
pub mod server;
pub mod settings;
pub mod shopping_list;
