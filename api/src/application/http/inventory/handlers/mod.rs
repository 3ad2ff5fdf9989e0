pub mod add_ingredient;
pub mod clear_inventory;
pub mod get_inventory;
pub mod remove_ingredient;
pub mod scan_inventory;
