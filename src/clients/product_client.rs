//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and turns framework errors into [`ProductError`].
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_actor::ProductError;
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

/// Maps a failure on an operation that targeted `id`.
fn map_targeted_error(id: ProductId, e: FrameworkError) -> ProductError {
    if e.is_not_found() {
        ProductError::NotFound(id)
    } else {
        ProductClient::map_error(e)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner
            .delete(id)
            .await
            .map_err(|e| map_targeted_error(id, e))
    }
}

impl ProductClient {
    /// Stores a new product and returns it with its assigned ID.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Replaces every field of product `id`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, draft)
            .await
            .map_err(|e| map_targeted_error(id, e))
    }

    /// Fetches product `id`, treating absence as an error.
    pub async fn require(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, expect_update, MockClient};

    fn draft(name: &str) -> ProductDraft {
        ProductDraft::new(name, 2.5, 3).unwrap()
    }

    #[tokio::test]
    async fn test_create_product_returns_stored_record() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task =
            tokio::spawn(async move { product_client.create_product(draft("Widget")).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name(), "Widget");

        responder
            .send(Ok(Product::from_draft(ProductId(1), params)))
            .unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, ProductId(1));
        assert_eq!(created.quantity, 3);
    }

    #[tokio::test]
    async fn test_update_product_maps_missing_id() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let update_task = tokio::spawn(async move {
            product_client
                .update_product(ProductId(9), draft("Gadget"))
                .await
        });

        let (id, _update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, ProductId(9));

        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound(ProductId(9))));
    }

    #[tokio::test]
    async fn test_delete_maps_missing_id() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_delete(ProductId(3))
            .return_err(FrameworkError::NotFound("3".to_string()));

        let product_client = ProductClient::new(mock.client());
        let result = product_client.delete(ProductId(3)).await;

        assert_eq!(result, Err(ProductError::NotFound(ProductId(3))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_get(ProductId(1))
            .return_err(FrameworkError::ActorDropped);

        let product_client = ProductClient::new(mock.client());

        assert!(matches!(
            product_client.list().await,
            Err(ProductError::ActorCommunicationError(msg)) if msg == "Actor closed"
        ));
        assert!(matches!(
            product_client.require(ProductId(1)).await,
            Err(ProductError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_require_reports_absent_product() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(5)).return_ok(None);

        let product_client = ProductClient::new(mock.client());
        let result = product_client.require(ProductId(5)).await;

        assert_eq!(result, Err(ProductError::NotFound(ProductId(5))));
        mock.verify();
    }
}
