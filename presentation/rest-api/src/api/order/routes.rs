use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::order::use_cases::choose_fulfillment::{
    ChooseFulfillmentParams, ChooseFulfillmentUseCase,
};
use business::domain::order::use_cases::get_current::GetCurrentOrderUseCase;
use business::domain::order::value_objects::FulfillmentMethod;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{CheckoutRequest, FulfillmentRequest, OrderResponse};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    get_current_use_case: Arc<dyn GetCurrentOrderUseCase>,
    choose_fulfillment_use_case: Arc<dyn ChooseFulfillmentUseCase>,
}

impl OrderApi {
    pub fn new(
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        get_current_use_case: Arc<dyn GetCurrentOrderUseCase>,
        choose_fulfillment_use_case: Arc<dyn ChooseFulfillmentUseCase>,
    ) -> Self {
        Self {
            checkout_use_case,
            get_current_use_case,
            choose_fulfillment_use_case,
        }
    }
}

/// Order API
///
/// Checkout and tracking of the single open order.
#[OpenApi]
impl OrderApi {
    /// Check out the cart
    ///
    /// Requires a non-empty cart and complete customer details. On success
    /// the cart is cleared, the tracking view opens, and the preparation
    /// timeline starts; a previously open order is replaced and its timers
    /// cancelled.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn checkout(&self, body: Json<CheckoutRequest>) -> CheckoutResponse {
        let params = CheckoutParams {
            name: body.0.name,
            phone: body.0.phone,
            address: body.0.address,
        };

        match self.checkout_use_case.execute(params).await {
            Ok(order) => CheckoutResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }

    /// Read the open order
    #[oai(path = "/orders/current", method = "get", tag = "ApiTags::Orders")]
    async fn get_current(&self) -> GetCurrentOrderResponse {
        match self.get_current_use_case.execute().await {
            Ok(order) => GetCurrentOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCurrentOrderResponse::NotFound(json),
                    _ => GetCurrentOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Choose how to take a ready order
    ///
    /// "pickup" completes the order, "delivery" hands it to the courier.
    /// Only legal while the order is ready.
    #[oai(
        path = "/orders/current/fulfillment",
        method = "post",
        tag = "ApiTags::Orders"
    )]
    async fn choose_fulfillment(&self, body: Json<FulfillmentRequest>) -> ChooseFulfillmentResponse {
        let method: FulfillmentMethod = match body.0.method.parse() {
            Ok(method) => method,
            Err(_) => {
                return ChooseFulfillmentResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.invalid_fulfillment_method".to_string(),
                }));
            }
        };

        match self
            .choose_fulfillment_use_case
            .execute(ChooseFulfillmentParams { method })
            .await
        {
            Ok(order) => ChooseFulfillmentResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ChooseFulfillmentResponse::NotFound(json),
                    409 => ChooseFulfillmentResponse::Conflict(json),
                    _ => ChooseFulfillmentResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCurrentOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChooseFulfillmentResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
