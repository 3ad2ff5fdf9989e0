use thiserror::Error;

/// Why a call to the generative model produced no usable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiGatewayError {
    #[error("model request failed: {0}")]
    Request(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("model response does not match the expected shape: {0}")]
    SchemaMismatch(String),
}
