//! Application configuration
//!
//! Settings resolve from built-in defaults, then an optional TOML file named
//! by `DRAFTROOM_CONFIG`, then environment variables.

pub mod file;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use file::FileConfig;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub ai: AiConfig,
}

/// Settings for the chat-completion gateway
#[derive(Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            ai: AiConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let file = match env::var("DRAFTROOM_CONFIG") {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                FileConfig::from_file(&PathBuf::from(path))?
            }
            Err(_) => FileConfig::default(),
        };

        Ok(Self::resolve(file, |key| env::var(key).ok()))
    }

    /// Layer file settings and then environment values over the defaults.
    fn resolve(file: FileConfig, var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = file.server.host {
            config.host = host;
        }
        if let Some(port) = file.server.port {
            config.port = port;
        }
        config.ai.api_key = file.ai.api_key;
        if let Some(base_url) = file.ai.base_url {
            config.ai.base_url = base_url;
        }
        if let Some(model) = file.ai.model {
            config.ai.model = model;
        }
        if let Some(timeout) = file.ai.timeout_secs {
            config.ai.timeout_secs = timeout;
        }

        if let Some(host) = var("HOST") {
            config.host = host;
        }
        if let Some(port) = var("PORT").and_then(|p| p.parse::<u16>().ok()) {
            config.port = port;
        }
        if let Some(key) = var("OPENAI_API_KEY") {
            config.ai.api_key = Some(key);
        }
        if let Some(base_url) = var("OPENAI_BASE_URL") {
            config.ai.base_url = base_url;
        }
        if let Some(model) = var("OPENAI_MODEL") {
            config.ai.model = model;
        }
        if let Some(timeout) = var("AI_TIMEOUT_SECS")
            .and_then(|t| t.parse::<u64>().ok())
            .filter(|t| *t > 0)
        {
            config.ai.timeout_secs = timeout;
        }

        // An empty key disables analysis just like a missing one.
        config.ai.api_key = config.ai.api_key.filter(|k| !k.trim().is_empty());
        config.ai.base_url = config.ai.base_url.trim_end_matches('/').to_string();

        config
    }
}
