use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{entities::app_errors::CoreError, hash_identity};

/// Authenticated caller, identified by the e-mail the OAuth provider vouched for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    email: String,
}

impl Identity {
    /// Builds an identity from an optional e-mail; blank or missing means the
    /// caller is not authenticated.
    pub fn from_email(email: Option<&str>) -> Result<Self, CoreError> {
        let email = email
            .map(normalize_email)
            .filter(|e| !e.is_empty())
            .ok_or(CoreError::Unauthenticated)?;

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Digest used in log fields instead of the raw address.
    pub fn log_id(&self) -> String {
        hash_identity(&self.email)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
