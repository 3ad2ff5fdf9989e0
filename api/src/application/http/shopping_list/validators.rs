use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddShoppingItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}
