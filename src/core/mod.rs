pub mod gateway;

pub use crate::domain::model::{
    AdvertResponse, BackendReply, Category, ClassificationResult, PersonaDocument,
};
pub use crate::domain::ports::{Classifier, ConfigProvider, DocumentIndex};
pub use crate::domain::prompt::ClassificationPrompt;
pub use crate::utils::error::Result;
