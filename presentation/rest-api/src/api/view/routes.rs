use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::view::model::ActiveView;
use business::domain::view::use_cases::get_view::GetViewUseCase;
use business::domain::view::use_cases::navigate::{NavigateParams, NavigateUseCase};
use business::domain::view::use_cases::set_cart_dialog::{
    SetCartDialogParams, SetCartDialogUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::view::dto::{CartDialogRequest, NavigateRequest, ViewStateResponse};

pub struct ViewApi {
    get_view_use_case: Arc<dyn GetViewUseCase>,
    navigate_use_case: Arc<dyn NavigateUseCase>,
    set_cart_dialog_use_case: Arc<dyn SetCartDialogUseCase>,
}

impl ViewApi {
    pub fn new(
        get_view_use_case: Arc<dyn GetViewUseCase>,
        navigate_use_case: Arc<dyn NavigateUseCase>,
        set_cart_dialog_use_case: Arc<dyn SetCartDialogUseCase>,
    ) -> Self {
        Self {
            get_view_use_case,
            navigate_use_case,
            set_cart_dialog_use_case,
        }
    }
}

/// View state API
///
/// The single active-screen selector plus the cart dialog flag. Switching
/// screens is unconditional and loses no state.
#[OpenApi]
impl ViewApi {
    /// Read the view state
    #[oai(path = "/view", method = "get", tag = "ApiTags::View")]
    async fn get_view(&self) -> GetViewResponse {
        match self.get_view_use_case.execute().await {
            Ok(state) => GetViewResponse::Ok(Json(state.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetViewResponse::InternalError(json)
            }
        }
    }

    /// Switch the active screen
    #[oai(path = "/view", method = "put", tag = "ApiTags::View")]
    async fn navigate(&self, body: Json<NavigateRequest>) -> NavigateResponse {
        let view: ActiveView = match body.0.view.parse() {
            Ok(view) => view,
            Err(_) => {
                return NavigateResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "view.invalid_view".to_string(),
                }));
            }
        };

        match self.navigate_use_case.execute(NavigateParams { view }).await {
            Ok(state) => NavigateResponse::Ok(Json(state.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                NavigateResponse::InternalError(json)
            }
        }
    }

    /// Open or close the cart dialog
    #[oai(path = "/view/cart-dialog", method = "put", tag = "ApiTags::View")]
    async fn set_cart_dialog(&self, body: Json<CartDialogRequest>) -> SetCartDialogResponse {
        match self
            .set_cart_dialog_use_case
            .execute(SetCartDialogParams { open: body.0.open })
            .await
        {
            Ok(state) => SetCartDialogResponse::Ok(Json(state.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SetCartDialogResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetViewResponse {
    #[oai(status = 200)]
    Ok(Json<ViewStateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum NavigateResponse {
    #[oai(status = 200)]
    Ok(Json<ViewStateResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SetCartDialogResponse {
    #[oai(status = 200)]
    Ok(Json<ViewStateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
