pub mod errors;
pub mod helpers;
pub mod ports;
pub mod prompts;
pub mod schema;
