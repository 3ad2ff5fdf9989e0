pub mod get_feedback;
pub mod submit_feedback;
