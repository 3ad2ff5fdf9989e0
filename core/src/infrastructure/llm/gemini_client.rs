use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{
    common::LLMConfig,
    llm::{
        errors::AiGatewayError,
        ports::{ImagePayload, LLMClient},
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiRequest {
    fn new(prompt: String, images: Vec<ImagePayload>, response_schema: serde_json::Value) -> Self {
        let mut parts = vec![Part::Text { text: prompt }];
        parts.extend(images.into_iter().map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type,
                data: general_purpose::STANDARD.encode(&image.data),
            },
        }));

        Self {
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }
}

impl GeminiResponse {
    /// Text of the first candidate, its parts joined together.
    fn into_text(self) -> Result<String, AiGatewayError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiGatewayError::EmptyResponse);
        }

        Ok(text)
    }
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Self {
        if config.gemini_api_key.is_empty() {
            tracing::warn!("GEMINI_API_KEY is not set, AI features will fail");
        }

        Self {
            api_key: config.gemini_api_key,
            model_name: config.gemini_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, AiGatewayError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                AiGatewayError::Request(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(AiGatewayError::Request(format!(
                "model API returned {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            AiGatewayError::Request(format!("unreadable model API response: {}", e))
        })?;

        gemini_response.into_text()
    }
}

impl LLMClient for GeminiLLMClient {
    #[instrument(skip(self, prompt, images, response_schema), fields(model = %self.model_name, images = images.len()))]
    async fn generate(
        &self,
        prompt: String,
        images: Vec<ImagePayload>,
        response_schema: serde_json::Value,
    ) -> Result<String, AiGatewayError> {
        self.call_gemini_api(GeminiRequest::new(prompt, images, response_schema))
            .await
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_inlines_every_image_after_the_prompt() {
        let request = GeminiRequest::new(
            "List the food".to_string(),
            vec![
                ImagePayload::new(Some("image/png"), Bytes::from_static(b"one")),
                ImagePayload::new(None, Bytes::from_static(b"two")),
            ],
            json!({ "type": "array" }),
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{
                    "parts": [
                        { "text": "List the food" },
                        { "inlineData": { "mimeType": "image/png", "data": "b25l" } },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "dHdv" } }
                    ]
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "array" }
                }
            })
        );
    }

    #[test]
    fn response_text_joins_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "[{\"name\":" }, { "text": "\"kale\"}]" }] } }]
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "[{\"name\":\"kale\"}]");
    }

    #[test]
    fn blocked_or_empty_responses_are_empty() {
        let blocked: GeminiResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert_eq!(blocked.into_text(), Err(AiGatewayError::EmptyResponse));

        let no_content: GeminiResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .unwrap();
        assert_eq!(no_content.into_text(), Err(AiGatewayError::EmptyResponse));
    }
}
