use std::future::Future;

use bytes::Bytes;

use crate::domain::llm::errors::AiGatewayError;

/// Image sent inline with a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Bytes,
}

impl ImagePayload {
    pub fn new(mime_type: Option<&str>, data: Bytes) -> Self {
        let mime_type = mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or("image/jpeg")
            .to_string();

        Self { mime_type, data }
    }
}

/// LLM Client trait for calling AI models
///
/// Implementations return the model's raw text; callers parse it.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Send an instruction plus zero or more inline images, hinting the
    /// expected JSON shape with `response_schema`.
    fn generate(
        &self,
        prompt: String,
        images: Vec<ImagePayload>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, AiGatewayError>> + Send;
}
