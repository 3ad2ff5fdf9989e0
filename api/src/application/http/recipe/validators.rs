use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RejectRecipeValidator {
    #[serde(default)]
    #[validate(length(max = 500, message = "reason is too long"))]
    pub reason: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CookRecipeValidator {
    /// 1 to 5 stars, 3 when omitted
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<u8>,

    #[serde(default)]
    pub notes: Option<String>,
}
