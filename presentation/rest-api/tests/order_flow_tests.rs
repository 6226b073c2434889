//! End-to-end order flow over the real in-memory adapters and the tokio
//! timeline, with the clock paused.

use std::sync::Arc;
use std::time::Duration;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::order::advance_status::AdvanceOrderStatusUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::choose_fulfillment::ChooseFulfillmentUseCaseImpl;
use business::domain::cart::repository::CartRepository;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::catalog::model::CatalogRef;
use business::domain::logger::Logger;
use business::domain::order::errors::OrderError;
use business::domain::order::repository::OrderRepository;
use business::domain::order::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::order::use_cases::choose_fulfillment::{
    ChooseFulfillmentParams, ChooseFulfillmentUseCase,
};
use business::domain::order::value_objects::{FulfillmentMethod, OrderStatus};
use business::domain::view::model::ActiveView;
use business::domain::view::repository::ViewRepository;
use scheduler::{TimelineDelays, TokioOrderTimeline};
use store::cart::repository::CartRepositoryInMemory;
use store::catalog::repository::CatalogRepositoryInMemory;
use store::order::repository::OrderRepositoryInMemory;
use store::view::repository::ViewRepositoryInMemory;

struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

struct Storefront {
    cart_repository: Arc<CartRepositoryInMemory>,
    order_repository: Arc<OrderRepositoryInMemory>,
    view_repository: Arc<ViewRepositoryInMemory>,
    add_item: Arc<dyn AddCartItemUseCase>,
    checkout: Arc<dyn CheckoutUseCase>,
    choose_fulfillment: Arc<dyn ChooseFulfillmentUseCase>,
}

fn storefront() -> Storefront {
    let logger: Arc<dyn Logger> = Arc::new(NullLogger);

    let catalog_repository = Arc::new(CatalogRepositoryInMemory::with_seed());
    let cart_repository = Arc::new(CartRepositoryInMemory::new());
    let order_repository = Arc::new(OrderRepositoryInMemory::new());
    let view_repository = Arc::new(ViewRepositoryInMemory::new());

    let add_item = Arc::new(AddCartItemUseCaseImpl {
        repository: cart_repository.clone(),
        catalog_repository,
        logger: logger.clone(),
    });

    let advance_status = Arc::new(AdvanceOrderStatusUseCaseImpl {
        repository: order_repository.clone(),
        logger: logger.clone(),
    });
    let timeline = Arc::new(TokioOrderTimeline::new(
        advance_status,
        TimelineDelays::default(),
        logger.clone(),
    ));

    let checkout = Arc::new(CheckoutUseCaseImpl {
        repository: order_repository.clone(),
        cart_repository: cart_repository.clone(),
        view_repository: view_repository.clone(),
        timeline,
        logger: logger.clone(),
    });

    let choose_fulfillment = Arc::new(ChooseFulfillmentUseCaseImpl {
        repository: order_repository.clone(),
        logger,
    });

    Storefront {
        cart_repository,
        order_repository,
        view_repository,
        add_item,
        checkout,
        choose_fulfillment,
    }
}

fn anna() -> CheckoutParams {
    CheckoutParams {
        name: "Анна".to_string(),
        phone: "+7 900 000-00-00".to_string(),
        address: "ул. Садовая, 1".to_string(),
    }
}

async fn fill_cart(app: &Storefront) {
    app.add_item
        .execute(AddCartItemParams {
            reference: CatalogRef::Flower(1),
        })
        .await
        .unwrap();
    app.add_item
        .execute(AddCartItemParams {
            reference: CatalogRef::Flower(1),
        })
        .await
        .unwrap();
    app.add_item
        .execute(AddCartItemParams {
            reference: CatalogRef::Bouquet(1),
        })
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn order_walks_the_whole_timeline_to_pickup() {
    let app = storefront();

    fill_cart(&app).await;
    let cart_total = app.cart_repository.get().await.unwrap().total();
    assert_eq!(cart_total, 150 * 2 + 2500);

    let order = app.checkout.execute(anna()).await.unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, cart_total);

    // Checkout empties the cart, closes the dialog and opens tracking.
    assert!(app.cart_repository.get().await.unwrap().is_empty());
    let view = app.view_repository.get().await.unwrap();
    assert_eq!(view.active, ActiveView::Tracking);
    assert!(!view.cart_open);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    let current = app.order_repository.current().await.unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Assembling);

    tokio::time::sleep(Duration::from_millis(15000)).await;
    let current = app.order_repository.current().await.unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Ready);
    assert!(current.ready_at.is_some());

    let completed = app
        .choose_fulfillment
        .execute(ChooseFulfillmentParams {
            method: FulfillmentMethod::Pickup,
        })
        .await
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn ready_order_can_go_out_for_delivery_instead() {
    let app = storefront();

    fill_cart(&app).await;
    app.checkout.execute(anna()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(17100)).await;

    let delivering = app
        .choose_fulfillment
        .execute(ChooseFulfillmentParams {
            method: FulfillmentMethod::Delivery,
        })
        .await
        .unwrap();

    assert_eq!(delivering.status, OrderStatus::Delivering);
}

#[tokio::test]
async fn checkout_with_blank_name_changes_nothing() {
    let app = storefront();

    fill_cart(&app).await;
    let result = app
        .checkout
        .execute(CheckoutParams {
            name: "".to_string(),
            phone: "x".to_string(),
            address: "y".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        OrderError::CustomerNameEmpty
    ));
    assert!(app.order_repository.current().await.unwrap().is_none());
    assert_eq!(app.cart_repository.get().await.unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn later_cart_changes_leave_the_placed_order_alone() {
    let app = storefront();

    fill_cart(&app).await;
    let order = app.checkout.execute(anna()).await.unwrap();
    let frozen_total = order.total;
    let frozen_lines = order.items.len();

    // Shop on after checkout.
    app.add_item
        .execute(AddCartItemParams {
            reference: CatalogRef::Bouquet(3),
        })
        .await
        .unwrap();

    let current = app.order_repository.current().await.unwrap().unwrap();
    assert_eq!(current.total, frozen_total);
    assert_eq!(current.items.len(), frozen_lines);
}

#[tokio::test(start_paused = true)]
async fn second_checkout_replaces_the_order_and_silences_old_timers() {
    let app = storefront();

    fill_cart(&app).await;
    let first = app.checkout.execute(anna()).await.unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;

    fill_cart(&app).await;
    let second = app.checkout.execute(anna()).await.unwrap();
    assert_ne!(first.id, second.id);

    // Past the first order's assembling mark, before the second's: the
    // replacement must still be pending.
    tokio::time::sleep(Duration::from_millis(1700)).await;
    let current = app.order_repository.current().await.unwrap().unwrap();
    assert_eq!(current.id, second.id);
    assert_eq!(current.status, OrderStatus::Pending);

    tokio::time::sleep(Duration::from_millis(500)).await;
    let current = app.order_repository.current().await.unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Assembling);
}
