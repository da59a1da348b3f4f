//! AI analysis gateway
//!
//! Wraps a single chat-completion provider. Analysis never fails from the
//! caller's point of view: every failure turns into one of the fixed
//! fallback messages below.

mod openai_compat;

use std::sync::Arc;

use thiserror::Error;

use crate::config::AiConfig;

use openai_compat::OpenAICompatProvider;

pub const AI_DISABLED: &str = "AI not enabled.";
pub const NO_RESPONSE: &str = "No AI response.";
pub const REQUEST_FAILED: &str = "AI request failed.";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Entry point for free-text analysis
#[derive(Clone)]
pub struct AiGateway {
    provider: Option<Arc<OpenAICompatProvider>>,
}

impl AiGateway {
    /// Build the gateway; without an API key it stays disabled
    pub fn from_config(config: &AiConfig) -> Result<Self, ProviderError> {
        let provider = match &config.api_key {
            Some(key) => Some(Arc::new(OpenAICompatProvider::new(key.clone(), config)?)),
            None => None,
        };
        Ok(Self { provider })
    }

    pub fn disabled() -> Self {
        Self { provider: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn analyze(&self, prompt: &str) -> String {
        let Some(provider) = &self.provider else {
            return AI_DISABLED.to_string();
        };

        match provider.complete(prompt).await {
            Ok(Some(content)) => content,
            Ok(None) => NO_RESPONSE.to_string(),
            Err(e) => {
                tracing::error!(model = provider.model(), "AI request failed: {}", e);
                REQUEST_FAILED.to_string()
            }
        }
    }
}
