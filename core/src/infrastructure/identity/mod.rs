pub mod google;

pub use google::GoogleIdTokenVerifier;
