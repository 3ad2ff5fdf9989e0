use thiserror::Error;

use crate::domain::llm::errors::AiGatewayError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Household registry missing")]
    RegistryMissing,

    #[error("Current user has no household")]
    NoHousehold,

    #[error("Failed to save {0}")]
    SaveFailed(String),

    #[error("Object storage error: {0}")]
    ObjectStorageError(String),

    #[error("AI gateway error: {0}")]
    AiGateway(#[from] AiGatewayError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalServerError,
}
