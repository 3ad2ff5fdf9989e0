pub mod get_profiles;
pub mod update_profiles;
