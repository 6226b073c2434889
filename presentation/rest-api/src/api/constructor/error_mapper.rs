use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::composer::errors::ComposerError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ComposerError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            ComposerError::SelectionEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "composer.selection_empty",
            ),
            ComposerError::UnknownFlower => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "composer.unknown_flower",
            ),
            ComposerError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "composer.generation_failed",
            ),
            // A bad composed line carries the cart's own error code.
            ComposerError::Cart(inner) => return inner.into_error_response(),
            ComposerError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.storage",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
