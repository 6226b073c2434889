use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::view::errors::ViewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ViewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ViewError::Repository(_) => (
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
