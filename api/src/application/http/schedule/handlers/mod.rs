pub mod get_schedule;
pub mod get_week;
pub mod remove_meal;
pub mod schedule_meal;
