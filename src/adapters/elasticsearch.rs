use crate::domain::model::PersonaDocument;
use crate::domain::ports::{ConfigProvider, DocumentIndex};
use crate::utils::error::{Result, TaggerError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Document index over the Elasticsearch REST API.
#[derive(Debug, Clone)]
pub struct ElasticsearchIndex {
    client: Client,
    base_url: String,
}

impl ElasticsearchIndex {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TaggerError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.index_url(),
            Duration::from_secs(config.request_timeout_seconds()),
        )
    }

    fn collection_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

#[async_trait]
impl DocumentIndex for ElasticsearchIndex {
    async fn ensure_collection(&self, name: &str) -> Result<()> {
        let url = self.collection_url(name);

        let exists = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(|e| TaggerError::index(format!("HEAD {} failed: {}", url, e)))?;

        match exists.status() {
            status if status.is_success() => {
                tracing::debug!("Index '{}' already exists", name);
                return Ok(());
            }
            StatusCode::NOT_FOUND => {}
            status => {
                return Err(TaggerError::index(format!(
                    "unexpected status {} checking index '{}'",
                    status, name
                )))
            }
        }

        tracing::info!("📁 Creating index '{}'", name);
        let created = self
            .client
            .put(&url)
            .send()
            .await
            .map_err(|e| TaggerError::index(format!("PUT {} failed: {}", url, e)))?;

        let status = created.status();
        if status.is_success() {
            return Ok(());
        }

        // 另一個實例可能剛好先建立了索引
        let body = created.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST && body.contains("resource_already_exists_exception") {
            return Ok(());
        }

        Err(TaggerError::index(format!(
            "creating index '{}' returned {}: {}",
            name, status, body
        )))
    }

    async fn index_document(&self, collection: &str, document: &PersonaDocument) -> Result<()> {
        let url = format!("{}/_doc", self.collection_url(collection));

        let response = self
            .client
            .post(&url)
            .json(document)
            .send()
            .await
            .map_err(|e| TaggerError::index(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaggerError::index(format!(
                "indexing into '{}' returned {}: {}",
                collection, status, body
            )));
        }

        tracing::debug!("Indexed document into '{}'", collection);
        Ok(())
    }
}
