pub mod get_onboarding;
pub mod get_settings;
pub mod update_settings;
