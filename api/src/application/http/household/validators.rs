use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct InviteMemberValidator {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}
