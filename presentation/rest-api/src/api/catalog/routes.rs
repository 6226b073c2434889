use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_bouquets::GetBouquetsUseCase;
use business::domain::catalog::use_cases::get_flowers::GetFlowersUseCase;

use crate::api::catalog::dto::{BouquetResponse, FlowerResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_flowers_use_case: Arc<dyn GetFlowersUseCase>,
    get_bouquets_use_case: Arc<dyn GetBouquetsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_flowers_use_case: Arc<dyn GetFlowersUseCase>,
        get_bouquets_use_case: Arc<dyn GetBouquetsUseCase>,
    ) -> Self {
        Self {
            get_flowers_use_case,
            get_bouquets_use_case,
        }
    }
}

/// Showcase catalog API
///
/// Read-only endpoints for the flowers and bouquets on display.
#[OpenApi]
impl CatalogApi {
    /// List all flowers
    #[oai(path = "/catalog/flowers", method = "get", tag = "ApiTags::Catalog")]
    async fn get_flowers(&self) -> GetFlowersResponse {
        match self.get_flowers_use_case.execute().await {
            Ok(flowers) => {
                let responses: Vec<FlowerResponse> =
                    flowers.into_iter().map(|f| f.into()).collect();
                GetFlowersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetFlowersResponse::InternalError(json)
            }
        }
    }

    /// List all showcase bouquets
    #[oai(path = "/catalog/bouquets", method = "get", tag = "ApiTags::Catalog")]
    async fn get_bouquets(&self) -> GetBouquetsResponse {
        match self.get_bouquets_use_case.execute().await {
            Ok(bouquets) => {
                let responses: Vec<BouquetResponse> =
                    bouquets.into_iter().map(|b| b.into()).collect();
                GetBouquetsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetBouquetsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFlowersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<FlowerResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBouquetsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BouquetResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
