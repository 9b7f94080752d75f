use crate::config::toml_config::TomlConfig;
use crate::config::ServiceConfig;
use crate::utils::error::Result;
use clap::Parser;

/// Flags left unset fall through to the config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "persona-tagger")]
#[command(about = "Classifies adverts and influencer personas into a fixed content taxonomy")]
pub struct CliConfig {
    #[arg(long, env = "PERSONA_TAGGER_CONFIG", help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, env = "PERSONA_TAGGER_BIND")]
    pub bind: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    #[arg(long, env = "OPENAI_MODEL")]
    pub model: Option<String>,

    #[arg(long, env = "PERSONA_TAGGER_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,

    #[arg(long, env = "ELASTICSEARCH_URL")]
    pub index_url: Option<String>,

    #[arg(long, env = "PERSONA_TAGGER_INDEX")]
    pub index_name: Option<String>,

    /// Write classified adverts to the document index (`--enable-indexing=false` turns it off)
    #[arg(
        long,
        env = "PERSONA_TAGGER_ENABLE_INDEXING",
        value_parser = clap::builder::BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub enable_indexing: Option<bool>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path);
                TomlConfig::from_file(path)?.into_service_config()
            }
            None => ServiceConfig::default(),
        };

        self.apply_to(&mut config);
        Ok(config)
    }

    fn apply_to(&self, config: &mut ServiceConfig) {
        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(api_key) = &self.openai_api_key {
            config.openai_api_key = api_key.clone();
        }
        if let Some(base_url) = &self.openai_base_url {
            config.openai_base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout_seconds = timeout;
        }
        if let Some(url) = &self.index_url {
            config.index_url = url.clone();
        }
        if let Some(name) = &self.index_name {
            config.index_name = name.clone();
        }
        if let Some(enabled) = self.enable_indexing {
            config.indexing_enabled = enabled;
        }
    }
}
