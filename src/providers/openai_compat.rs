//! OpenAI-compatible chat completions client
//!
//! Works with any API that implements the OpenAI chat completions format
//! (OpenAI itself, Groq, vLLM, LM Studio and similar local servers).

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AiConfig;

use super::ProviderError;

/// OpenAI-compatible chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// First choice's text, if the body has the expected shape and it is non-empty
    fn first_content(body: Value) -> Option<String> {
        let completion: ChatCompletionResponse = serde_json::from_value(body).ok()?;
        // Only the first choice is decoded; later ones may have any shape.
        let first = completion.choices.into_iter().next()?;
        let choice: Choice = serde_json::from_value(first).ok()?;
        choice.message.content.filter(|content| !content.is_empty())
    }
}

/// OpenAI-compatible API provider
pub struct OpenAICompatProvider {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl OpenAICompatProvider {
    /// Create a provider with the given credential and settings
    pub fn new(api_key: impl Into<String>, config: &AiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: api_key.into(),
            model: config.model.clone(),
            client,
        })
    }

    /// Send a single user message and return the first completion's text.
    ///
    /// `Ok(None)` means the API answered with JSON that carries no usable
    /// content. Transport failures and non-JSON bodies are errors.
    pub async fn complete(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "Chat completion API returned an error status");
        }

        let body: Value = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {} - Body: {}", e, body))
        })?;

        Ok(ChatCompletionResponse::first_content(body))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: vec![ChatMessage::user("Hello")],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Hello"}]
            })
        );
    }

    #[test]
    fn test_first_content() {
        let body = json!({
            "choices": [
                {"message": {"role": "assistant", "content": "First"}},
                {"message": {"role": "assistant", "content": "Second"}}
            ]
        });
        assert_eq!(ChatCompletionResponse::first_content(body).as_deref(), Some("First"));
    }

    #[test]
    fn test_first_content_ignores_later_choices() {
        let body = json!({
            "choices": [
                {"message": {"content": "First"}},
                {"delta": {}},
                "not-a-choice"
            ]
        });
        assert_eq!(ChatCompletionResponse::first_content(body).as_deref(), Some("First"));
    }

    #[test]
    fn test_first_content_missing() {
        for body in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": "nope"}),
            json!({"choices": [{"message": {"role": "assistant"}}]}),
            json!({"choices": [{"message": {"content": ""}}]}),
            json!({"error": {"message": "Invalid API key"}}),
            json!([1, 2, 3]),
        ] {
            assert!(ChatCompletionResponse::first_content(body).is_none());
        }
    }
}
