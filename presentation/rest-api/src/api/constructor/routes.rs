use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::composer::use_cases::add_to_cart::AddComposedBouquetUseCase;
use business::domain::composer::use_cases::generate_preview::{
    GeneratePreviewParams, GeneratePreviewUseCase,
};
use business::domain::composer::use_cases::get_composer::GetComposerUseCase;
use business::domain::composer::use_cases::toggle_flower::{
    ToggleFlowerParams, ToggleFlowerUseCase,
};

use crate::api::cart::dto::CartResponse;
use crate::api::constructor::dto::{
    ConstructorResponse, ConstructorStateResponse, GeneratePreviewRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ConstructorApi {
    get_composer_use_case: Arc<dyn GetComposerUseCase>,
    toggle_flower_use_case: Arc<dyn ToggleFlowerUseCase>,
    generate_preview_use_case: Arc<dyn GeneratePreviewUseCase>,
    add_to_cart_use_case: Arc<dyn AddComposedBouquetUseCase>,
}

impl ConstructorApi {
    pub fn new(
        get_composer_use_case: Arc<dyn GetComposerUseCase>,
        toggle_flower_use_case: Arc<dyn ToggleFlowerUseCase>,
        generate_preview_use_case: Arc<dyn GeneratePreviewUseCase>,
        add_to_cart_use_case: Arc<dyn AddComposedBouquetUseCase>,
    ) -> Self {
        Self {
            get_composer_use_case,
            toggle_flower_use_case,
            generate_preview_use_case,
            add_to_cart_use_case,
        }
    }
}

/// Bouquet constructor API
///
/// Pick flowers, generate a preview, and add the composed bouquet to the
/// cart.
#[OpenApi]
impl ConstructorApi {
    /// Read the constructor state
    ///
    /// Includes the current composed price: the sum of the selected stems,
    /// each at five times its catalog price.
    #[oai(path = "/constructor", method = "get", tag = "ApiTags::Constructor")]
    async fn get_constructor(&self) -> GetConstructorResponse {
        match self.get_composer_use_case.execute().await {
            Ok(summary) => GetConstructorResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetConstructorResponse::InternalError(json)
            }
        }
    }

    /// Toggle a flower
    ///
    /// Selecting an already-selected flower deselects it.
    #[oai(
        path = "/constructor/flowers/:id/toggle",
        method = "post",
        tag = "ApiTags::Constructor"
    )]
    async fn toggle_flower(&self, id: Path<u32>) -> ToggleFlowerResponse {
        match self
            .toggle_flower_use_case
            .execute(ToggleFlowerParams { flower_id: id.0 })
            .await
        {
            Ok(state) => ToggleFlowerResponse::Ok(Json(state.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleFlowerResponse::NotFound(json),
                    _ => ToggleFlowerResponse::InternalError(json),
                }
            }
        }
    }

    /// Generate a preview
    ///
    /// Refused while no flowers are selected. The same selection always
    /// yields the same image.
    #[oai(
        path = "/constructor/preview",
        method = "post",
        tag = "ApiTags::Constructor"
    )]
    async fn generate_preview(&self, body: Json<GeneratePreviewRequest>) -> GeneratePreviewResponse {
        match self
            .generate_preview_use_case
            .execute(GeneratePreviewParams {
                prompt: body.0.prompt.unwrap_or_default(),
            })
            .await
        {
            Ok(state) => GeneratePreviewResponse::Ok(Json(state.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GeneratePreviewResponse::BadRequest(json),
                    404 => GeneratePreviewResponse::NotFound(json),
                    _ => GeneratePreviewResponse::InternalError(json),
                }
            }
        }
    }

    /// Add the composed bouquet to the cart
    ///
    /// Prices the current selection, adds it as its own cart line, and
    /// opens the cart dialog.
    #[oai(path = "/constructor/cart", method = "post", tag = "ApiTags::Constructor")]
    async fn add_to_cart(&self) -> AddComposedToCartResponse {
        match self.add_to_cart_use_case.execute().await {
            Ok(cart) => AddComposedToCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddComposedToCartResponse::BadRequest(json),
                    _ => AddComposedToCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetConstructorResponse {
    #[oai(status = 200)]
    Ok(Json<ConstructorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleFlowerResponse {
    #[oai(status = 200)]
    Ok(Json<ConstructorStateResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GeneratePreviewResponse {
    #[oai(status = 200)]
    Ok(Json<ConstructorStateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddComposedToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
