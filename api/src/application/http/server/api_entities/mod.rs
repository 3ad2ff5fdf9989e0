pub mod api_error;
pub mod response;
pub mod image_upload;
