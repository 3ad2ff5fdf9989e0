use scantry_core::domain::feedback::entities::FeedbackKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitFeedbackValidator {
    #[serde(rename = "type", default)]
    pub kind: FeedbackKind,

    #[validate(length(min = 1, max = 5000, message = "message must be 1 to 5000 characters"))]
    pub message: String,
}
