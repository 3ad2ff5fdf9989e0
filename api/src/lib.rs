#![recursion_limit = "256"]

pub mod application;
pub mod args;
