use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::model::ItemRef;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use business::domain::catalog::model::CatalogRef;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
        }
    }
}

/// Shopping cart API
///
/// The cart always answers with its full updated contents, so the client
/// never has to recompute totals.
#[OpenApi]
impl CartApi {
    /// Read the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_cart_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a catalog item
    ///
    /// Adds one unit of the referenced flower or bouquet. A reference
    /// already in the cart gains a unit instead of a second line.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let reference: CatalogRef = match body.0.reference.parse() {
            Ok(reference) => reference,
            Err(_) => {
                return AddCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_reference".to_string(),
                }));
            }
        };

        match self
            .add_item_use_case
            .execute(AddCartItemParams { reference })
            .await
        {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Change a line's quantity
    ///
    /// Applies a signed delta. A quantity reaching zero removes the line;
    /// an unknown reference leaves the cart as it is.
    #[oai(path = "/cart/items/:reference", method = "patch", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        reference: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> UpdateQuantityResponse {
        let item: ItemRef = match reference.0.parse() {
            Ok(item) => item,
            Err(_) => {
                return UpdateQuantityResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_reference".to_string(),
                }));
            }
        };

        match self
            .update_quantity_use_case
            .execute(UpdateQuantityParams {
                item,
                delta: body.0.delta,
            })
            .await
        {
            Ok(cart) => UpdateQuantityResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateQuantityResponse::InternalError(json)
            }
        }
    }

    /// Remove a line
    ///
    /// Removes the referenced line if present; removing an absent
    /// reference is not an error.
    #[oai(path = "/cart/items/:reference", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, reference: Path<String>) -> RemoveCartItemResponse {
        let item: ItemRef = match reference.0.parse() {
            Ok(item) => item,
            Err(_) => {
                return RemoveCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_reference".to_string(),
                }));
            }
        };

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams { item })
            .await
        {
            Ok(cart) => RemoveCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveCartItemResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
