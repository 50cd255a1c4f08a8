//! Error types for form submission.

use crate::cart_actor::CartError;
use thiserror::Error;

/// Reasons a contact or order submission is aborted before anything is sent.
///
/// Each variant maps to the notification the customer sees: [`title`](Self::title)
/// is the headline and the `Display` text is the detail line.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// A required contact field is blank after trimming.
    #[error("Name, email, and message are required.")]
    MissingContactFields { missing: Vec<&'static str> },

    /// A required order field is blank after trimming, or no payment method was picked.
    #[error("Name, phone, address, and payment method are required.")]
    MissingOrderFields { missing: Vec<&'static str> },

    /// The order form was valid but there is nothing in the cart.
    #[error("Please add items to your cart before placing an order.")]
    EmptyCart,

    /// The cart could not be read or cleared.
    #[error("Cart unavailable: {0}")]
    Cart(#[from] CartError),
}

impl FormError {
    /// Notification headline.
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingContactFields { .. } => "Please fill in all fields",
            FormError::MissingOrderFields { .. } => "Please fill in all required fields",
            FormError::EmptyCart => "Your cart is empty",
            FormError::Cart(_) => "Something went wrong",
        }
    }
}
