use crate::utils::error::TaggerError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl TaggerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TaggerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            TaggerError::BackendUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            TaggerError::UnexpectedResponseShape { .. } | TaggerError::IndexError { .. } => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TaggerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("❌ Request failed: {} (code: {})", self, self.error_code());
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        let body = json!({
            "error": true,
            "message": self.to_string(),
            "status": status.as_u16(),
            "error_code": self.error_code(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for TaggerError {
    fn from(rejection: JsonRejection) -> Self {
        TaggerError::invalid_request(rejection.body_text())
    }
}
