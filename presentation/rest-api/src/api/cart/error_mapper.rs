use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.name_empty",
            ),
            CartError::PriceZero => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.price_zero",
            ),
            CartError::UnknownItem => (StatusCode::NOT_FOUND, "NotFound", "cart.unknown_item"),
            CartError::Repository(_) => (
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
