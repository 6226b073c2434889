use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartLine, ItemRef};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::model::CatalogRef;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog_repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Adding {} to cart", params.reference));

        let unknown = |e| match e {
            RepositoryError::NotFound => CartError::UnknownItem,
            other => CartError::Repository(other),
        };

        let line = match params.reference {
            CatalogRef::Flower(id) => {
                let flower = self
                    .catalog_repository
                    .flower_by_id(id)
                    .await
                    .map_err(unknown)?;
                CartLine::new(
                    ItemRef::Catalog(params.reference),
                    flower.name,
                    flower.price,
                )?
            }
            CatalogRef::Bouquet(id) => {
                let bouquet = self
                    .catalog_repository
                    .bouquet_by_id(id)
                    .await
                    .map_err(unknown)?;
                CartLine::new(
                    ItemRef::Catalog(params.reference),
                    bouquet.name,
                    bouquet.price,
                )?
            }
        };

        let mut cart = self.repository.get().await?;
        cart.add(line);
        self.repository.put(&cart).await?;

        self.logger
            .info(&format!("Cart now holds {} lines", cart.len()));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{Bouquet, Flower};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self) -> Result<Cart, RepositoryError>;
            async fn put(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn flowers(&self) -> Result<Vec<Flower>, RepositoryError>;
            async fn bouquets(&self) -> Result<Vec<Bouquet>, RepositoryError>;
            async fn flower_by_id(&self, id: u32) -> Result<Flower, RepositoryError>;
            async fn bouquet_by_id(&self, id: u32) -> Result<Bouquet, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn red_rose() -> Flower {
        Flower {
            id: 1,
            name: "Роза красная".to_string(),
            price: 150,
            image: "img".to_string(),
            available: 50,
        }
    }

    #[tokio::test]
    async fn should_append_new_line_with_quantity_one() {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_flower_by_id().returning(|_| Ok(red_rose()));

        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_get().returning(|| Ok(Cart::default()));
        cart_repo
            .expect_put()
            .withf(|cart| cart.len() == 1 && cart.lines()[0].quantity == 1)
            .returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            catalog_repository: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                reference: CatalogRef::Flower(1),
            })
            .await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.lines()[0].name, "Роза красная");
        assert_eq!(cart.lines()[0].unit_price, 150);
    }

    #[tokio::test]
    async fn should_merge_repeated_addition_into_existing_line() {
        let mut catalog = MockCatalogRepo::new();
        catalog.expect_flower_by_id().returning(|_| Ok(red_rose()));

        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_get().returning(|| {
            let mut cart = Cart::default();
            cart.add(
                CartLine::new(ItemRef::Catalog(CatalogRef::Flower(1)), "Роза красная", 150)
                    .unwrap(),
            );
            Ok(cart)
        });
        cart_repo
            .expect_put()
            .withf(|cart| cart.len() == 1 && cart.lines()[0].quantity == 2)
            .returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            catalog_repository: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                reference: CatalogRef::Flower(1),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().lines()[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_reject_reference_missing_from_catalog() {
        let mut catalog = MockCatalogRepo::new();
        catalog
            .expect_bouquet_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let cart_repo = MockCartRepo::new();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            catalog_repository: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                reference: CatalogRef::Bouquet(99),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::UnknownItem));
    }
}
