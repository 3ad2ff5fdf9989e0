pub mod authentication;
pub mod common;
pub mod document;
pub mod feedback;
pub mod health;
pub mod household;
pub mod inventory;
pub mod llm;
pub mod meal_log;
pub mod profile;
pub mod recipe;
pub mod schedule;
pub mod settings;
pub mod shopping_list;
pub mod storage;
