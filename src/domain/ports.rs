use crate::domain::model::{BackendReply, PersonaDocument};
use crate::domain::prompt::ClassificationPrompt;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Hosted model that turns a prompt into a category label.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, prompt: &ClassificationPrompt) -> Result<BackendReply>;
}

/// Search/document store holding categorized content.
#[async_trait]
pub trait DocumentIndex: Send + Sync {
    /// Creates the collection if it does not exist yet.
    async fn ensure_collection(&self, name: &str) -> Result<()>;
    async fn index_document(&self, collection: &str, document: &PersonaDocument) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn openai_api_key(&self) -> &str;
    fn openai_base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn index_url(&self) -> &str;
    fn index_name(&self) -> &str;
    fn indexing_enabled(&self) -> bool;
}
