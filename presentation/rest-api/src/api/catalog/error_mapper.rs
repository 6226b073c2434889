use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::FlowerNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.flower_not_found",
            ),
            CatalogError::BouquetNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.bouquet_not_found",
            ),
            CatalogError::Repository(_) => (
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
