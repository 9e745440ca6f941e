use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::FeedbackError;

/// Deadline applied to each external stage (classifier, generative call).
pub const STAGE_TIMEOUT: Duration = Duration::from_millis(9000);

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => DeploymentMode::Development,
            _ => DeploymentMode::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: Url,
    pub deployment_mode: DeploymentMode,
    pub stage_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, FeedbackError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so callers other than
    /// the Lambda entrypoint never have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedbackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let deployment_mode = lookup("APP_ENV")
            .or_else(|| lookup("NODE_ENV"))
            .map(|m| DeploymentMode::from_label(&m))
            .unwrap_or(DeploymentMode::Production);

        let gemini_model = lookup("GEMINI_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let base = lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());
        let gemini_api_base = Url::parse(base.trim_end_matches('/'))
            .map_err(|e| FeedbackError::Config(format!("GEMINI_API_BASE: {}", e)))?;

        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_api_base,
            deployment_mode,
            stage_timeout: STAGE_TIMEOUT,
        })
    }

    /// True when the handler must answer from static templates only.
    pub fn offline_only(&self) -> bool {
        self.gemini_api_key.is_none() || self.deployment_mode == DeploymentMode::Development
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: Url::parse(DEFAULT_GEMINI_API_BASE)
                .expect("static Gemini base URL"),
            deployment_mode: DeploymentMode::Production,
            stage_timeout: STAGE_TIMEOUT,
        }
    }
}
