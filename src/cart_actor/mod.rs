//! # Cart Actor
//!
//! This module owns the shopping cart for a page session.
//!
//! ## Structure
//!
//! - [`store`] - [`CartStore`], the cart rules (add, update, remove, clear, totals)
//! - [`message`] - [`CartRequest`], one variant per cart operation
//! - [`actor`] - [`CartActor`], the task hosting the store
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use bagdat_order::cart_actor;
//! use bagdat_order::model::Menu;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, cart) = cart_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let menu = Menu::standard();
//!     let state = cart.add_item(menu.find("starter-1").unwrap().clone()).await?;
//!     assert_eq!(state.item_count(), 1);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;
pub mod store;

pub use actor::*;
pub use error::*;
pub use message::*;
pub use store::*;

use crate::clients::CartClient;

/// Default request channel capacity.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Creates a new cart actor and its client.
pub fn new() -> (CartActor, CartClient) {
    CartActor::new(DEFAULT_BUFFER_SIZE)
}
