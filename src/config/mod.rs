#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_INDEX_URL: &str = "http://localhost:9200";
pub const DEFAULT_INDEX_NAME: &str = "influencer_personas";

/// Fully resolved service settings (defaults, then config file, then env/CLI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub bind_address: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub request_timeout_seconds: u64,
    pub index_url: String,
    pub index_name: String,
    pub indexing_enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            openai_api_key: String::new(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            index_url: DEFAULT_INDEX_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            indexing_enabled: false,
        }
    }
}

impl ConfigProvider for ServiceConfig {
    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn openai_api_key(&self) -> &str {
        &self.openai_api_key
    }

    fn openai_base_url(&self) -> &str {
        &self.openai_base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }

    fn index_url(&self) -> &str {
        &self.index_url
    }

    fn index_name(&self) -> &str {
        &self.index_name
    }

    fn indexing_enabled(&self) -> bool {
        self.indexing_enabled
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind", &self.bind_address)?;
        validation::validate_required_string("classifier.api_key", &self.openai_api_key)?;
        validation::validate_url("classifier.base_url", &self.openai_base_url)?;
        validation::validate_non_empty_string("classifier.model", &self.model)?;
        validation::validate_range(
            "classifier.request_timeout_seconds",
            self.request_timeout_seconds,
            1,
            600,
        )?;

        // 只有啟用索引時才檢查索引設定
        if self.indexing_enabled {
            validation::validate_url("index.url", &self.index_url)?;
            validation::validate_index_name("index.name", &self.index_name)?;
        }

        tracing::debug!("✅ Service configuration validation passed");
        Ok(())
    }
}

/// Hides the API key in log output.
pub fn redact_secret(secret: &str) -> String {
    if secret.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(3).collect();
    format!("{}****", prefix)
}
