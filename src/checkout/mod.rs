//! # Checkout
//!
//! Contact and order submission: validate, "send" through a [`Submitter`],
//! and report what the confirmation dialog shows.
//!
//! - [`validate`] - required-field checks producing [`ValidContact`] / [`ValidOrder`]
//! - [`submit`] - the [`Submitter`] seam and its simulated / instant implementations
//! - [`error`] - [`FormError`], the notifications that abort a submission
//!
//! A successful order empties the cart. Failed validation leaves both the
//! form and the cart untouched.

pub mod error;
pub mod submit;
pub mod validate;

pub use error::*;
pub use submit::*;
pub use validate::*;

use crate::clients::CartClient;
use crate::model::{CartLineItem, CartTotals, ContactForm, OrderForm, PaymentMethod};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// What the "thank you" dialog shows after a contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub name: String,
    pub email: String,
}

/// What the order confirmation dialog shows: the cart as it was when the
/// order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub customer: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

/// Form submission for one page session.
#[derive(Clone)]
pub struct Checkout {
    cart: CartClient,
    submitter: Arc<dyn Submitter>,
}

impl Checkout {
    pub fn new(cart: CartClient, submitter: Arc<dyn Submitter>) -> Self {
        Self { cart, submitter }
    }

    /// Validates and sends a contact message.
    #[instrument(skip(self, form))]
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactReceipt, FormError> {
        let contact = form.validate().inspect_err(|e| {
            warn!(error = %e, "Contact form rejected");
        })?;

        self.submitter.submit(SubmissionKind::Contact).await;
        info!("Contact message sent");
        Ok(ContactReceipt {
            name: contact.name,
            email: contact.email,
        })
    }

    /// Validates the order form, empties the cart and sends what it held.
    ///
    /// The form is checked before the cart, so an empty form on an empty cart
    /// reports the missing fields. The cart is emptied before the submit delay
    /// starts, so anything added meanwhile stays in the cart.
    #[instrument(skip(self, form))]
    pub async fn place_order(&self, form: &OrderForm) -> Result<OrderConfirmation, FormError> {
        let order = form.validate().inspect_err(|e| {
            warn!(error = %e, "Order form rejected");
        })?;

        // Items added while the order is in flight belong to the next order.
        let cart = self.cart.take_for_order().await?;
        if cart.is_empty() {
            warn!("Order rejected: cart is empty");
            return Err(FormError::EmptyCart);
        }

        self.submitter.submit(SubmissionKind::Order).await;
        info!(
            items = cart.item_count(),
            grand_total = %cart.totals.grand_total,
            payment = %order.payment_method,
            "Order placed"
        );

        Ok(OrderConfirmation {
            customer: order.name,
            phone: order.phone,
            address: order.address,
            payment_method: order.payment_method,
            special_instructions: order.special_instructions,
            items: cart.items,
            totals: cart.totals,
        })
    }
}
