pub mod identity;
pub mod llm;
pub mod object_storage;
