// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod elasticsearch;
pub mod openai;

pub use elasticsearch::ElasticsearchIndex;
pub use openai::OpenAiClassifier;
