pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ElasticsearchIndex, OpenAiClassifier};
pub use app::{router, AppState};
pub use config::ServiceConfig;
pub use core::gateway::ClassificationGateway;
pub use utils::error::{Result, TaggerError};
