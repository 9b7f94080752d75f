use crate::domain::model::BackendReply;
use crate::domain::ports::{Classifier, ConfigProvider};
use crate::domain::prompt::ClassificationPrompt;
use crate::utils::error::{Result, TaggerError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Responses API request types
// ============================================================================

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: Vec<InputMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'static str,
    content: Vec<InputContent<'a>>,
}

#[derive(Debug, Serialize)]
struct InputContent<'a> {
    #[serde(rename = "type")]
    content_type: &'static str, // "input_text"
    text: &'a str,
}

impl<'a> InputMessage<'a> {
    fn text(role: &'static str, text: &'a str) -> Self {
        Self {
            role,
            content: vec![InputContent {
                content_type: "input_text",
                text,
            }],
        }
    }
}

// ============================================================================
// Responses API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type", default)]
    item_type: Option<String>,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesResponse {
    /// Text of the first content part of the first message item.
    /// Reasoning items that precede the message are skipped.
    fn first_text(&self) -> Option<&str> {
        self.output
            .iter()
            .find(|item| item.item_type.as_deref().map_or(true, |t| t == "message"))
            .and_then(|item| item.content.first())
            .and_then(|part| part.text.as_deref())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Classifier backed by the OpenAI Responses API.
pub struct OpenAiClassifier {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClassifier {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TaggerError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.openai_api_key(),
            config.openai_base_url(),
            config.model(),
            Duration::from_secs(config.request_timeout_seconds()),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    async fn classify(&self, prompt: &ClassificationPrompt) -> Result<BackendReply> {
        let body = ResponsesRequest {
            model: &self.model,
            input: vec![
                InputMessage::text("system", prompt.system_instruction()),
                InputMessage::text("user", prompt.user_content()),
            ],
        };

        tracing::debug!(
            "Calling classification backend: {} (model {})",
            self.endpoint(),
            self.model
        );
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TaggerError::backend_unavailable(format!("request timed out: {}", e))
                } else {
                    TaggerError::backend_unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        tracing::debug!("Classification backend status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TaggerError::backend_unavailable(format!(
                "backend returned {}: {}",
                status, detail
            )));
        }

        let raw: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TaggerError::backend_unavailable(format!("request timed out: {}", e))
            } else {
                TaggerError::unexpected_shape(format!("body is not JSON: {}", e))
            }
        })?;

        let parsed: ResponsesResponse = serde_json::from_value(raw.clone())
            .map_err(|e| TaggerError::unexpected_shape(e.to_string()))?;

        let text = parsed
            .first_text()
            .ok_or_else(|| TaggerError::unexpected_shape("no message text in response output"))?
            .to_string();

        Ok(BackendReply { text, raw })
    }
}
