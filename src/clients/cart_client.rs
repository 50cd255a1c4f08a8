//! # Cart Client
//!
//! The handle views hold to read and change the cart. It is cheap to clone;
//! every clone talks to the same [`CartActor`](crate::cart_actor::CartActor).
use crate::cart_actor::{CartError, CartRequest, QuantityChange};
use crate::model::{CartState, CatalogItem};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
    updates: watch::Receiver<CartState>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>, updates: watch::Receiver<CartState>) -> Self {
        Self { sender, updates }
    }

    /// Adds one unit of a catalog item.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(&self, item: CatalogItem) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::AddItem { item, respond_to })
            .await
    }

    /// Sets a line's quantity. A quantity below 1 is rejected and reported as
    /// [`QuantityChange::BelowMinimum`]; the cart is returned unchanged.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: impl Into<String> + std::fmt::Debug,
        quantity: u32,
    ) -> Result<(QuantityChange, CartState), CartError> {
        debug!("Sending request");
        let id = id.into();
        self.request(|respond_to| CartRequest::UpdateQuantity {
            id,
            quantity,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        id: impl Into<String> + std::fmt::Debug,
    ) -> Result<CartState, CartError> {
        debug!("Sending request");
        let id = id.into();
        self.request(|respond_to| CartRequest::RemoveItem { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::Clear { respond_to })
            .await
    }

    /// Empties the cart and returns what it held. Requests sent after this one
    /// land in the fresh cart.
    #[instrument(skip(self))]
    pub async fn take_for_order(&self) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.request(|respond_to| CartRequest::TakeForOrder { respond_to })
            .await
    }

    /// Reads the current cart.
    pub async fn snapshot(&self) -> Result<CartState, CartError> {
        self.request(|respond_to| CartRequest::Snapshot { respond_to })
            .await
    }

    /// A receiver that sees every state the cart publishes after a mutation.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.updates.clone()
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> CartRequest,
    ) -> Result<T, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CartError::Closed)?;
        response.await.map_err(|_| CartError::Dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::mock::{create_mock_client, expect_add_item, expect_update_quantity};
    use crate::model::Menu;

    #[tokio::test]
    async fn test_add_item_forwards_catalog_item() {
        let (client, mut receiver) = create_mock_client(10);
        let item = Menu::standard().find("starter-2").cloned().unwrap();

        let add_task = tokio::spawn(async move { client.add_item(item).await });

        let (item, responder) = expect_add_item(&mut receiver)
            .await
            .expect("Expected AddItem request");
        assert_eq!(item.id, "starter-2");
        responder.send(CartState::default()).unwrap();

        let result = add_task.await.unwrap();
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_quantity_reports_floor_rejection() {
        let (client, mut receiver) = create_mock_client(10);

        let update_task =
            tokio::spawn(async move { client.update_quantity("main-1", 0).await });

        let (id, quantity, responder) = expect_update_quantity(&mut receiver)
            .await
            .expect("Expected UpdateQuantity request");
        assert_eq!(id, "main-1");
        assert_eq!(quantity, 0);
        responder
            .send((QuantityChange::BelowMinimum, CartState::default()))
            .unwrap();

        let (change, _) = update_task.await.unwrap().unwrap();
        assert_eq!(change, QuantityChange::BelowMinimum);
    }

    #[tokio::test]
    async fn test_closed_cart_reports_error() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);
        assert_eq!(client.snapshot().await, Err(CartError::Closed));
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_error() {
        let (client, mut receiver) = create_mock_client(1);
        let task = tokio::spawn(async move { client.clear().await });
        // Receive and drop the request without answering.
        drop(receiver.recv().await);
        assert_eq!(task.await.unwrap(), Err(CartError::Dropped));
    }
}
