//! # Product Client
//!
//! High-level API for the `Product` actor. [`ProductClient::list_products`] is the
//! snapshot the replenishment engine runs on.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::replenishment::StockStatus;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self), fields(sku = %params.sku))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(ProductError::from_framework)
    }

    /// Edits the product `id`. On error the stored product is unchanged.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(?update, "Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(ProductError::from_framework)
    }

    /// All products, oldest first.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await.inspect_err(|e| {
            warn!(error = %e, "Could not fetch products");
        })?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn stock_status(&self, id: ProductId) -> Result<StockStatus, ProductError> {
        match self.action(id, ProductAction::StockStatus).await? {
            ProductActionResult::StockStatus(status) => Ok(status),
            other => Err(unexpected(other)),
        }
    }

    /// Re-reads the product's category and sub-category by id so their renamed
    /// names show up on the product.
    #[instrument(skip(self))]
    pub async fn refresh_links(&self, id: ProductId) -> Result<(), ProductError> {
        match self.action(id, ProductAction::RefreshLinks).await? {
            ProductActionResult::RefreshLinks(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(ProductError::from_framework)
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from_framework(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn stock_status_returns_classification() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.stock_status(ProductId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(3));
        assert!(matches!(action, ProductAction::StockStatus));
        responder
            .send(Ok(ProductActionResult::StockStatus(StockStatus::Low)))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), StockStatus::Low);
    }

    #[tokio::test]
    async fn mismatched_action_result_is_an_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(3))
            .return_ok(ProductActionResult::RefreshLinks(()));
        let client = ProductClient::new(mock.client());

        let result = client.stock_status(ProductId(3)).await;

        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_update(ProductId(9))
            .return_err(FrameworkError::NotFound("product_9".into()));
        let client = ProductClient::new(mock.client());

        let result = client.update_product(ProductId(9), ProductUpdate::default()).await;

        assert_eq!(result, Err(ProductError::NotFound("product_9".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(1);
        drop(receiver);

        let result = ProductClient::new(client).list_products().await;

        assert!(matches!(result, Err(ProductError::ActorCommunicationError(_))));
    }
}
