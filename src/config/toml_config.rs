use crate::config::ServiceConfig;
use crate::utils::error::{Result, TaggerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub classifier: Option<ClassifierConfig>,
    pub index: Option<IndexConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    pub url: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TaggerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TaggerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENAI_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TaggerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays every value present in the file onto `config`.
    pub fn apply_to(&self, config: &mut ServiceConfig) {
        if let Some(server) = &self.server {
            if let Some(bind) = &server.bind {
                config.bind_address = bind.clone();
            }
        }

        if let Some(classifier) = &self.classifier {
            if let Some(api_key) = &classifier.api_key {
                config.openai_api_key = api_key.clone();
            }
            if let Some(base_url) = &classifier.base_url {
                config.openai_base_url = base_url.clone();
            }
            if let Some(model) = &classifier.model {
                config.model = model.clone();
            }
            if let Some(timeout) = classifier.request_timeout_seconds {
                config.request_timeout_seconds = timeout;
            }
        }

        if let Some(index) = &self.index {
            if let Some(url) = &index.url {
                config.index_url = url.clone();
            }
            if let Some(name) = &index.name {
                config.index_name = name.clone();
            }
            if let Some(enabled) = index.enabled {
                config.indexing_enabled = enabled;
            }
        }
    }

    pub fn into_service_config(self) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        self.apply_to(&mut config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"

[classifier]
api_key = "sk-file-key"
base_url = "https://llm.internal/v1"
model = "gpt-4o-mini"
request_timeout_seconds = 15

[index]
url = "http://search:9200"
name = "adverts"
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_service_config();

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.openai_api_key, "sk-file-key");
        assert_eq!(config.openai_base_url, "https://llm.internal/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.request_timeout_seconds, 15);
        assert_eq!(config.index_url, "http://search:9200");
        assert_eq!(config.index_name, "adverts");
        assert!(config.indexing_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str("[classifier]\nmodel = \"gpt-4.1\"\n")
            .unwrap()
            .into_service_config();

        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.bind_address, crate::config::DEFAULT_BIND_ADDRESS);
        assert!(!config.indexing_enabled);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PERSONA_TAGGER_TEST_KEY", "sk-from-env");

        let toml_content = r#"
[classifier]
api_key = "${PERSONA_TAGGER_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content)
            .unwrap()
            .into_service_config();
        assert_eq!(config.openai_api_key, "sk-from-env");

        std::env::remove_var("PERSONA_TAGGER_TEST_KEY");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            "[classifier]\napi_key = \"${PERSONA_TAGGER_SURELY_UNSET_VAR}\"\n",
        )
        .unwrap()
        .into_service_config();
        assert_eq!(config.openai_api_key, "${PERSONA_TAGGER_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[classifier\nmodel = 1").unwrap_err();
        assert!(matches!(err, TaggerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[index]\nname = \"file_index\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.index.and_then(|index| index.name).as_deref(),
            Some("file_index")
        );
    }
}
