//! Handles that views use to talk to the cart.

pub mod cart_client;
pub mod mock;

pub use cart_client::*;
