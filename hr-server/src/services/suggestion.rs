//! External suggestion gateway
//!
//! Stateless call-out to a chat-completions endpoint for feedback
//! suggestions. This dependency never raises: every failure mode maps to a
//! fixed, human-readable fallback string.

use serde_json::json;

/// Fallback when no API key is configured
pub const FALLBACK_NOT_CONFIGURED: &str = "AI feedback assistant not configured.";
/// Fallback on any transport failure
pub const FALLBACK_UNAVAILABLE: &str = "Unable to generate feedback suggestion at this time.";
/// Fallback when the response carries no usable content
pub const FALLBACK_NO_SUGGESTION: &str = "No suggestion available";

const DEFAULT_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
const DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-1B-Instruct";
const DEFAULT_CONTEXT: &str = "their general performance";
const MAX_WORDS: usize = 100;

/// Suggestion gateway configuration
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Bearer token for the upstream API; unset disables the gateway
    pub api_key: Option<String>,
    /// Chat-completions endpoint
    pub api_url: String,
    /// Model identifier sent with each request
    pub model: String,
}

impl SuggestionConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("HUGGINGFACE_API_KEY").ok().filter(|k| !k.is_empty()),
            api_url: std::env::var("SUGGESTION_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: std::env::var("SUGGESTION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Suggestion gateway service
#[derive(Clone)]
pub struct SuggestionService {
    client: reqwest::Client,
    config: SuggestionConfig,
}

impl SuggestionService {
    pub fn new(config: SuggestionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Generate a feedback suggestion for an employee.
    ///
    /// Blocking round trip, transport-default timeout, no retry. Returns a
    /// fallback string instead of an error on every failure mode.
    pub async fn generate(&self, employee_name: &str, context: Option<&str>) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::warn!("AI feedback service not configured - missing API key");
            return FALLBACK_NOT_CONFIGURED.to_string();
        };

        let prompt = build_prompt(employee_name, context);
        tracing::debug!(model = %self.config.model, "Calling suggestion API");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "messages": [{ "role": "user", "content": prompt }],
                "model": self.config.model,
                "stream": false,
            }))
            .send()
            .await;

        let body: serde_json::Value = match response {
            Ok(resp) => match resp.json().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!(error = %e, "Suggestion API returned unparseable body");
                    return FALLBACK_UNAVAILABLE.to_string();
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to reach suggestion API");
                return FALLBACK_UNAVAILABLE.to_string();
            }
        };

        extract_content(&body)
    }
}

fn build_prompt(employee_name: &str, context: Option<&str>) -> String {
    let effective_context = match context {
        Some(c) if !c.is_empty() => c,
        _ => DEFAULT_CONTEXT,
    };
    format!(
        "Generate brief, professional feedback for employee {} about {}. \
         Be constructive and positive. Keep it under {} words.",
        employee_name, effective_context, MAX_WORDS
    )
}

fn extract_content(body: &serde_json::Value) -> String {
    let content = body["choices"][0]["message"]["content"].as_str();
    match content {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => {
            tracing::warn!("Suggestion API response carried no content");
            FALLBACK_NO_SUGGESTION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_key() -> SuggestionConfig {
        SuggestionConfig {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[tokio::test]
    async fn unconfigured_service_returns_fixed_string() {
        let service = SuggestionService::new(config_without_key());
        let suggestion = service.generate("Jane Doe", None).await;
        assert_eq!(suggestion, FALLBACK_NOT_CONFIGURED);
    }

    #[test]
    fn prompt_uses_default_context_when_absent_or_empty() {
        assert!(build_prompt("Jane", None).contains("their general performance"));
        assert!(build_prompt("Jane", Some("")).contains("their general performance"));
        assert!(build_prompt("Jane", Some("teamwork")).contains("teamwork"));
    }

    #[test]
    fn extract_content_handles_malformed_responses() {
        assert_eq!(extract_content(&serde_json::json!({})), FALLBACK_NO_SUGGESTION);
        assert_eq!(
            extract_content(&serde_json::json!({ "choices": [] })),
            FALLBACK_NO_SUGGESTION
        );
        assert_eq!(
            extract_content(&serde_json::json!({
                "choices": [{ "message": { "content": "  Great work.  " } }]
            })),
            "Great work."
        );
    }
}
