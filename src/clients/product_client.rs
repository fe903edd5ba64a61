//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the stock actions as
//! plain methods returning the resulting stock level.
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    async fn act(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => ProductError::NotFound(id),
                other => Self::map_error(other),
            })
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.act(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Set the stock level to an absolute value.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, stock: u32) -> Result<u32, ProductError> {
        match self.act(id, ProductAction::SetStock(stock)).await? {
            ProductActionResult::SetStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Atomically take `quantity` units out of stock.
    ///
    /// Returns the remaining stock, or `InsufficientStock` with nothing changed.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Reserving stock");
        match self.act(id, ProductAction::ReserveStock(quantity)).await? {
            ProductActionResult::ReserveStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Put `quantity` units back into stock.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Releasing stock");
        match self.act(id, ProductAction::ReleaseStock(quantity)).await? {
            ProductActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert!(matches!(action, ProductAction::CheckStock));
        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn reserve_stock_sends_quantity() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task =
            tokio::spawn(async move { product_client.reserve_stock(ProductId(1), 5).await });

        let (_, action, responder) = expect_action(&mut receiver).await.unwrap();
        match action {
            ProductAction::ReserveStock(amount) => assert_eq!(amount, 5),
            other => panic!("Expected ReserveStock, got {other:?}"),
        }
        responder
            .send(Ok(ProductActionResult::ReserveStock(3)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn insufficient_stock_is_recovered_by_type() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                ProductError::InsufficientStock {
                    requested: 100,
                    available: 8,
                },
            )));
        let client = ProductClient::new(mock.client());

        assert_eq!(
            client.reserve_stock(ProductId(1), 100).await,
            Err(ProductError::InsufficientStock {
                requested: 100,
                available: 8
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(7))
            .return_err(FrameworkError::NotFound("product_7".into()));
        mock.expect_get(ProductId(7)).return_ok(None);
        let client = ProductClient::new(mock.client());

        assert_eq!(
            client.release_stock(ProductId(7), 1).await,
            Err(ProductError::NotFound(ProductId(7)))
        );
        assert_eq!(
            client.get_product(ProductId(7)).await,
            Err(ProductError::NotFound(ProductId(7)))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_result_is_an_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(1))
            .return_ok(ProductActionResult::CheckStock(1));
        let client = ProductClient::new(mock.client());

        assert!(matches!(
            client.set_stock(ProductId(1), 4).await,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
