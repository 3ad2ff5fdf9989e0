pub mod analyze_meal;
pub mod get_history;
pub mod log_meal;
