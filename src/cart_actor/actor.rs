//! # Cart Actor
//!
//! The task that owns the page's [`CartStore`]. It processes requests one at a
//! time in arrival order, so mutations are applied exactly in the order views
//! dispatch them, without locks. After each mutation the new state is
//! published on a `watch` channel for views that render from it (the cart
//! section, the order summary, the nav badge).

use super::message::CartRequest;
use super::store::CartStore;
use crate::clients::CartClient;
use crate::model::CartState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

pub struct CartActor {
    receiver: mpsc::Receiver<CartRequest>,
    store: CartStore,
    published: watch::Sender<CartState>,
}

impl CartActor {
    /// Creates a new `CartActor` and the first [`CartClient`] for it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client
    ///   calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (published, updates) = watch::channel(CartState::default());
        let actor = Self {
            receiver,
            store: CartStore::new(),
            published,
        };
        (actor, CartClient::new(sender, updates))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Cart started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::AddItem { item, respond_to } => {
                    debug!(item_id = %item.id, "AddItem");
                    self.store.add_item(&item);
                    info!(item_id = %item.id, size = self.store.state().items.len(), "Added");
                    let _ = respond_to.send(self.publish());
                }
                CartRequest::UpdateQuantity {
                    id,
                    quantity,
                    respond_to,
                } => {
                    debug!(item_id = %id, quantity, "UpdateQuantity");
                    let change = self.store.update_quantity(&id, quantity);
                    let _ = respond_to.send((change, self.publish()));
                }
                CartRequest::RemoveItem { id, respond_to } => {
                    debug!(item_id = %id, "RemoveItem");
                    if self.store.remove_item(&id) {
                        info!(item_id = %id, size = self.store.state().items.len(), "Removed");
                    }
                    let _ = respond_to.send(self.publish());
                }
                CartRequest::Clear { respond_to } => {
                    self.store.clear();
                    info!("Cleared");
                    let _ = respond_to.send(self.publish());
                }
                CartRequest::TakeForOrder { respond_to } => {
                    let taken = self.store.take();
                    if !taken.is_empty() {
                        info!(size = taken.items.len(), "Taken for order");
                        self.publish();
                    }
                    let _ = respond_to.send(taken);
                }
                CartRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.store.state().clone());
                }
            }
        }

        info!(size = self.store.state().items.len(), "Cart shutdown");
    }

    fn publish(&self) -> CartState {
        let state = self.store.state().clone();
        // No subscribers is fine; the request still gets its answer.
        self.published.send_replace(state.clone());
        state
    }
}
