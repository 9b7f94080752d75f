use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HOME_MESSAGE: &str = "Hello, Flask!";
pub const ADVERT_CATEGORY_ASSIGNED: &str = "Advert category assigned successfully.";

/// The closed taxonomy the classifier is instructed to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Lifestyle,
    Beauty,
    #[serde(rename = "Fitness & Health")]
    FitnessHealth,
    Tech,
    Travel,
    Food,
    Gaming,
    #[serde(rename = "Business/Finance")]
    BusinessFinance,
    Parenting,
    Education,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Lifestyle,
        Category::Beauty,
        Category::FitnessHealth,
        Category::Tech,
        Category::Travel,
        Category::Food,
        Category::Gaming,
        Category::BusinessFinance,
        Category::Parenting,
        Category::Education,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Lifestyle => "Lifestyle",
            Category::Beauty => "Beauty",
            Category::FitnessHealth => "Fitness & Health",
            Category::Tech => "Tech",
            Category::Travel => "Travel",
            Category::Food => "Food",
            Category::Gaming => "Gaming",
            Category::BusinessFinance => "Business/Finance",
            Category::Parenting => "Parenting",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Matches a label returned by the model. Case and whitespace around `/` and `&` are ignored.
    pub fn parse(label: &str) -> Option<Category> {
        let normalized = normalize(label);
        Category::ALL
            .into_iter()
            .find(|category| normalize(category.label()) == normalized)
    }
}

fn normalize(label: &str) -> String {
    label
        .trim()
        .trim_end_matches('.')
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text returned by the classification backend, plus the raw payload for diagnostics.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub text: String,
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
}

impl ClassificationResult {
    pub fn from_reply(reply: &BackendReply) -> Self {
        Self {
            category: reply.text.trim().to_string(),
        }
    }

    /// `None` when the model answered with a label outside the taxonomy.
    pub fn known_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaDocument {
    pub advert_text: String,
    pub influencer_persona: String,
    pub category: String,
    pub classified_at: DateTime<Utc>,
}

impl PersonaDocument {
    pub fn new(advert_text: String, influencer_persona: String, category: String) -> Self {
        Self {
            advert_text,
            influencer_persona,
            category,
            classified_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertResponse {
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}
