//! Error types for the cart.

use thiserror::Error;

/// Errors a [`CartClient`](crate::clients::CartClient) call can report.
///
/// The cart rules themselves never fail; the only failure is losing the
/// actor that owns the cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart actor has shut down and no longer accepts requests.
    #[error("Cart closed")]
    Closed,

    /// The cart actor dropped the request without answering.
    #[error("Cart dropped response channel")]
    Dropped,
}
