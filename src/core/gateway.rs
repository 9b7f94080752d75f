use crate::domain::model::{
    AdvertResponse, CategoriesResponse, Category, ClassificationResult, HomeResponse,
    PersonaDocument, ADVERT_CATEGORY_ASSIGNED, HOME_MESSAGE,
};
use crate::domain::ports::{Classifier, DocumentIndex};
use crate::domain::prompt::ClassificationPrompt;
use crate::utils::error::{Result, TaggerError};
use serde_json::Value;
use std::sync::Arc;

const ADVERT_TEXT_FIELDS: &[&str] = &["advert_text", "text"];
const PERSONA_TEXT_FIELDS: &[&str] = &["influencer_persona", "text"];

struct IndexTarget {
    index: Arc<dyn DocumentIndex>,
    collection: String,
}

/// Builds the classification prompt, calls the backend and shapes the response.
pub struct ClassificationGateway {
    classifier: Arc<dyn Classifier>,
    index: Option<IndexTarget>,
}

impl ClassificationGateway {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            index: None,
        }
    }

    /// Enables writing classified adverts to `collection`.
    pub fn with_index(
        mut self,
        index: Arc<dyn DocumentIndex>,
        collection: impl Into<String>,
    ) -> Self {
        self.index = Some(IndexTarget {
            index,
            collection: collection.into(),
        });
        self
    }

    pub fn indexing_enabled(&self) -> bool {
        self.index.is_some()
    }

    /// Creates the target collection when indexing is on. Called once at startup.
    pub async fn prepare(&self) -> Result<()> {
        if let Some(target) = &self.index {
            target.index.ensure_collection(&target.collection).await?;
            tracing::info!("✅ Document index '{}' ready", target.collection);
        }
        Ok(())
    }

    pub fn home(&self) -> HomeResponse {
        HomeResponse {
            message: HOME_MESSAGE.to_string(),
        }
    }

    pub fn categories(&self) -> CategoriesResponse {
        CategoriesResponse {
            categories: Category::ALL
                .iter()
                .map(|category| category.label().to_string())
                .collect(),
        }
    }

    pub async fn classify_text(&self, text: &str) -> Result<ClassificationResult> {
        let prompt = ClassificationPrompt::new(text);
        let reply = self.classifier.classify(&prompt).await?;
        tracing::debug!("Raw classification response: {}", reply.raw);

        let result = ClassificationResult::from_reply(&reply);
        if result.known_category().is_none() {
            tracing::warn!("⚠️ Label '{}' is outside the taxonomy", result.category);
        }
        Ok(result)
    }

    /// Classifies the persona text and echoes the request body unchanged.
    pub async fn create_persona(&self, request: Value) -> Result<Value> {
        let persona = text_field(&request, PERSONA_TEXT_FIELDS)?;

        let prompt = ClassificationPrompt::new(persona);
        let reply = self.classifier.classify(&prompt).await?;
        tracing::info!(raw = %reply.raw, "Persona classification response");
        tracing::info!("Persona classified as '{}'", reply.text);

        Ok(request)
    }

    pub async fn create_advert(&self, request: Value) -> Result<AdvertResponse> {
        let advert_text = text_field(&request, ADVERT_TEXT_FIELDS)?;

        let result = self.classify_text(&advert_text).await?;
        tracing::info!("🏷️ Advert category: {}", result.category);

        if let Some(target) = &self.index {
            // persona 只是附帶資訊，非字串時存成空字串
            let persona = request
                .get(PERSONA_TEXT_FIELDS[0])
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let document = PersonaDocument::new(advert_text, persona, result.category.clone());
            target
                .index
                .index_document(&target.collection, &document)
                .await?;
        }

        Ok(AdvertResponse {
            category: result.category,
            message: ADVERT_CATEGORY_ASSIGNED.to_string(),
        })
    }
}

/// First present text field among `keys`; absent fields and non-object bodies yield "".
fn text_field(request: &Value, keys: &[&str]) -> Result<String> {
    let Some(object) = request.as_object() else {
        return Ok(String::new());
    };

    for key in keys {
        match object.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(text)) => return Ok(text.clone()),
            Some(other) => {
                return Err(TaggerError::invalid_request(format!(
                    "field '{}' must be a string, got {}",
                    key,
                    json_type(other)
                )))
            }
        }
    }

    Ok(String::new())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
