use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::CartEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.cart_empty",
            ),
            OrderError::CustomerNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.customer_name_empty",
            ),
            OrderError::CustomerPhoneEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.customer_phone_empty",
            ),
            OrderError::CustomerAddressEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.customer_address_empty",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::IllegalTransition => (
                StatusCode::CONFLICT,
                "Conflict",
                "order.illegal_transition",
            ),
            OrderError::Repository(_) => (
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
