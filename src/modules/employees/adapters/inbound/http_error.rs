// Map handler failures onto HTTP responses.
//
// - Domain rejections and misrouted commands: 400.
// - Unknown employee: 404.
// - Lost an optimistic-concurrency race: 409, the client may re-read and retry.
// - Malformed projection or unavailable store: 500.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;

use crate::modules::employees::use_cases::handler::ApplicationError;

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::InvalidCommand(_) | ApplicationError::InvariantViolation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::ConcurrencyConflict { .. } => StatusCode::CONFLICT,
            ApplicationError::SchemaViolation(_) | ApplicationError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match status {
            StatusCode::INTERNAL_SERVER_ERROR => "internal server error".to_string(),
            _ => self.to_string(),
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
