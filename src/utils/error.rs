use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Classification backend unavailable: {message}")]
    BackendUnavailable { message: String },

    #[error("Unexpected response from classification backend: {message}")]
    UnexpectedResponseShape { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Document index error: {message}")]
    IndexError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TaggerError {
    pub fn backend_unavailable(message: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            message: message.into(),
        }
    }

    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        Self::UnexpectedResponseShape {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::IndexError {
            message: message.into(),
        }
    }

    /// Stable machine-readable code, rendered into error response bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BackendUnavailable { .. } => "BACKEND_UNAVAILABLE",
            Self::UnexpectedResponseShape { .. } => "UNEXPECTED_RESPONSE_SHAPE",
            Self::InvalidRequest { .. } => "INVALID_REQUEST",
            Self::IndexError { .. } => "INDEX_ERROR",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "CONFIG_ERROR",
            Self::IoError(_) | Self::SerializationError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidRequest { .. } => ErrorSeverity::Low,
            Self::BackendUnavailable { .. } | Self::IndexError { .. } => ErrorSeverity::Medium,
            Self::UnexpectedResponseShape { .. } | Self::SerializationError(_) => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::BackendUnavailable { .. } => {
                "Check network access to the model API and that the API key is valid".to_string()
            }
            Self::UnexpectedResponseShape { .. } => {
                "Verify the configured model supports the Responses API".to_string()
            }
            Self::InvalidRequest { .. } => {
                "Send a JSON body; text fields must be JSON strings".to_string()
            }
            Self::IndexError { .. } => {
                "Check that the document index is reachable, or disable indexing".to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Provide '{}' via CLI flag, environment variable or config file", field)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            Self::ConfigError { .. } => "Review the configuration file".to_string(),
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::SerializationError(_) => "Check the JSON payload".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::BackendUnavailable { .. } => {
                "無法連線到分類服務 (classification backend unavailable)".to_string()
            }
            Self::MissingConfigError { field } => format!("缺少必要設定: {}", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TaggerError>;
