pub mod get_household;
pub mod invite_member;
