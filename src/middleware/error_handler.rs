use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::AppError;

/// Map malformed JSON bodies onto the standard error response
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    AppError::validation(format!("Invalid request body: {}", err)).into()
}
