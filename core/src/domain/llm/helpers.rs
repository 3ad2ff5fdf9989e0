use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::domain::llm::errors::AiGatewayError;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:[A-Za-z]+)?").expect("code fence pattern is valid"));

/// Removes Markdown code fences the model sometimes wraps its JSON in.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Parses a model response into `T`.
///
/// Syntax errors and shape errors are reported separately so callers and logs
/// can tell a truncated answer from a well-formed answer to the wrong question.
pub fn parse_llm_json<T>(raw: &str) -> Result<T, AiGatewayError>
where
    T: DeserializeOwned,
{
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(AiGatewayError::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse LLM response");
        AiGatewayError::InvalidJson(e.to_string())
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "LLM response has unexpected shape");
        AiGatewayError::SchemaMismatch(e.to_string())
    })
}

/// Trims a model-supplied string, mapping blank to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn strips_json_fences() {
        let raw = "```json\n[{\"name\": \"eggs\"}]\n```";
        assert_eq!(strip_code_fences(raw), "[{\"name\": \"eggs\"}]");
    }

    #[test]
    fn leaves_plain_json_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1} \n"), "{\"a\": 1}");
    }

    #[test]
    fn parses_fenced_array() {
        let items: Vec<Item> = parse_llm_json("```\n[{\"name\":\"kale\"}]\n```").unwrap();
        assert_eq!(
            items,
            vec![Item {
                name: "kale".to_string()
            }]
        );
    }

    #[test]
    fn classifies_failures() {
        assert_eq!(
            parse_llm_json::<Vec<Item>>("```json\n```"),
            Err(AiGatewayError::EmptyResponse)
        );
        assert!(matches!(
            parse_llm_json::<Vec<Item>>("Sorry, I can't see any food."),
            Err(AiGatewayError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_llm_json::<Vec<Item>>("{\"name\": \"kale\"}"),
            Err(AiGatewayError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some("  2 cups ".to_string())), Some("2 cups".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
