//! Requests sent from a [`CartClient`](crate::clients::CartClient) to the
//! [`CartActor`](super::CartActor).

use super::store::QuantityChange;
use crate::model::{CartState, CatalogItem};
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<T>;

/// Every operation the cart supports, one variant per operation.
///
/// Mutations answer with the cart as it stands after the change, so callers
/// never need a second round trip to read fresh totals.
#[derive(Debug)]
pub enum CartRequest {
    AddItem {
        item: CatalogItem,
        respond_to: Response<CartState>,
    },
    UpdateQuantity {
        id: String,
        quantity: u32,
        respond_to: Response<(QuantityChange, CartState)>,
    },
    RemoveItem {
        id: String,
        respond_to: Response<CartState>,
    },
    Clear {
        respond_to: Response<CartState>,
    },
    /// Empties the cart, answering with what it held before.
    TakeForOrder {
        respond_to: Response<CartState>,
    },
    Snapshot {
        respond_to: Response<CartState>,
    },
}
