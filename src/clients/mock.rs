//! # Mock Cart
//!
//! Utilities for testing code that drives a [`CartClient`] without spawning a
//! [`CartActor`](crate::cart_actor::CartActor).
//!
//! [`create_mock_client`] returns a client wired to a receiver the test owns.
//! The test pulls requests off the receiver with the `expect_*` helpers,
//! asserts on them, and answers through the returned responder. This makes it
//! easy to script replies the real cart would never give (for example an
//! empty snapshot right after an add).
//!
//! ```rust
//! use bagdat_order::clients::mock::{create_mock_client, expect_snapshot};
//! use bagdat_order::model::CartState;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(10);
//!     let task = tokio::spawn(async move { client.snapshot().await });
//!
//!     let responder = expect_snapshot(&mut receiver).await.unwrap();
//!     responder.send(CartState::default()).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_empty());
//! }
//! ```

use crate::cart_actor::{CartRequest, QuantityChange, Response};
use crate::clients::CartClient;
use crate::model::{CartState, CatalogItem};
use tokio::sync::{mpsc, watch};

/// Creates a cart client and the receiver its requests arrive on.
///
/// The client's update subscription never changes; tests that need published
/// states should run a real actor instead.
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_published, updates) = watch::channel(CartState::default());
    (CartClient::new(sender, updates), receiver)
}

/// Helper to verify that the next message is an AddItem request
pub async fn expect_add_item(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(CatalogItem, Response<CartState>)> {
    match receiver.recv().await {
        Some(CartRequest::AddItem { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateQuantity request
pub async fn expect_update_quantity(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(String, u32, Response<(QuantityChange, CartState)>)> {
    match receiver.recv().await {
        Some(CartRequest::UpdateQuantity {
            id,
            quantity,
            respond_to,
        }) => Some((id, quantity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a RemoveItem request
pub async fn expect_remove_item(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(String, Response<CartState>)> {
    match receiver.recv().await {
        Some(CartRequest::RemoveItem { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Clear request
pub async fn expect_clear(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<Response<CartState>> {
    match receiver.recv().await {
        Some(CartRequest::Clear { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a TakeForOrder request
pub async fn expect_take_for_order(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<Response<CartState>> {
    match receiver.recv().await {
        Some(CartRequest::TakeForOrder { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<Response<CartState>> {
    match receiver.recv().await {
        Some(CartRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
