use std::sync::Arc;

use logger::TracingLogger;

use imagegen::BouquetPreviewStub;
use scheduler::{TimelineDelays, TokioOrderTimeline};
use store::cart::repository::CartRepositoryInMemory;
use store::catalog::repository::CatalogRepositoryInMemory;
use store::composer::repository::ComposerRepositoryInMemory;
use store::order::repository::OrderRepositoryInMemory;
use store::view::repository::ViewRepositoryInMemory;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::catalog::get_bouquets::GetBouquetsUseCaseImpl;
use business::application::catalog::get_flowers::GetFlowersUseCaseImpl;
use business::application::composer::add_to_cart::AddComposedBouquetUseCaseImpl;
use business::application::composer::generate_preview::GeneratePreviewUseCaseImpl;
use business::application::composer::get_composer::GetComposerUseCaseImpl;
use business::application::composer::toggle_flower::ToggleFlowerUseCaseImpl;
use business::application::order::advance_status::AdvanceOrderStatusUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::choose_fulfillment::ChooseFulfillmentUseCaseImpl;
use business::application::order::get_current::GetCurrentOrderUseCaseImpl;
use business::application::view::get_view::GetViewUseCaseImpl;
use business::application::view::navigate::NavigateUseCaseImpl;
use business::application::view::set_cart_dialog::SetCartDialogUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub constructor_api: crate::api::constructor::routes::ConstructorApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub view_api: crate::api::view::routes::ViewApi,
}

impl DependencyContainer {
    pub fn new(timeline_delays: TimelineDelays) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryInMemory::with_seed());
        let cart_repository = Arc::new(CartRepositoryInMemory::new());
        let composer_repository = Arc::new(ComposerRepositoryInMemory::new());
        let order_repository = Arc::new(OrderRepositoryInMemory::new());
        let view_repository = Arc::new(ViewRepositoryInMemory::new());
        let preview_service = Arc::new(BouquetPreviewStub::new());

        // Catalog use cases
        let get_flowers_use_case = Arc::new(GetFlowersUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_bouquets_use_case = Arc::new(GetBouquetsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Constructor use cases
        let get_composer_use_case = Arc::new(GetComposerUseCaseImpl {
            repository: composer_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_flower_use_case = Arc::new(ToggleFlowerUseCaseImpl {
            repository: composer_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let generate_preview_use_case = Arc::new(GeneratePreviewUseCaseImpl {
            repository: composer_repository.clone(),
            catalog_repository: catalog_repository.clone(),
            preview_service,
            logger: logger.clone(),
        });
        let add_composed_use_case = Arc::new(AddComposedBouquetUseCaseImpl {
            repository: composer_repository,
            catalog_repository: catalog_repository.clone(),
            cart_repository: cart_repository.clone(),
            view_repository: view_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases and the preparation timeline
        let advance_status_use_case = Arc::new(AdvanceOrderStatusUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let timeline = Arc::new(TokioOrderTimeline::new(
            advance_status_use_case,
            timeline_delays,
            logger.clone(),
        ));
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository: order_repository.clone(),
            cart_repository,
            view_repository: view_repository.clone(),
            timeline,
            logger: logger.clone(),
        });
        let get_current_use_case = Arc::new(GetCurrentOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let choose_fulfillment_use_case = Arc::new(ChooseFulfillmentUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // View use cases
        let get_view_use_case = Arc::new(GetViewUseCaseImpl {
            repository: view_repository.clone(),
            logger: logger.clone(),
        });
        let navigate_use_case = Arc::new(NavigateUseCaseImpl {
            repository: view_repository.clone(),
            logger: logger.clone(),
        });
        let set_cart_dialog_use_case = Arc::new(SetCartDialogUseCaseImpl {
            repository: view_repository,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_flowers_use_case,
            get_bouquets_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
        );

        let constructor_api = crate::api::constructor::routes::ConstructorApi::new(
            get_composer_use_case,
            toggle_flower_use_case,
            generate_preview_use_case,
            add_composed_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            checkout_use_case,
            get_current_use_case,
            choose_fulfillment_use_case,
        );

        let view_api = crate::api::view::routes::ViewApi::new(
            get_view_use_case,
            navigate_use_case,
            set_cart_dialog_use_case,
        );

        Self {
            health_api,
            catalog_api,
            cart_api,
            constructor_api,
            order_api,
            view_api,
        }
    }
}
