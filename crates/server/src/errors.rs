use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// HTTP projection of a failure: a status, the client-facing message, and an
/// optional detail that is logged server-side and never echoed back.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    message: String,
    detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    /// Opaque 500; the cause goes to the log only.
    pub fn server_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if let Some(detail) = &self.detail {
            error!(status = %self.status, detail = %detail, "request failed");
        }
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg, None),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg, None),
            ServiceError::Upload(_) | ServiceError::Db(_) | ServiceError::Model(_) => {
                Self::server_error(e.to_string())
            }
        }
    }
}
