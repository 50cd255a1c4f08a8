//! Required-field checks for the contact and order forms.
//!
//! A field counts as filled when it is non-empty after trimming. Nothing else
//! is checked: emails and phone numbers are taken as typed.

use super::error::FormError;
use crate::model::{ContactForm, OrderForm, PaymentMethod};

/// A contact form whose required fields are present, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// An order form whose required fields are present, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub special_instructions: Option<String>,
}

fn filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ContactForm {
    pub fn validate(&self) -> Result<ValidContact, FormError> {
        let name = filled(&self.name);
        let email = filled(&self.email);
        let message = filled(&self.message);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(ValidContact {
                name,
                email,
                message,
            }),
            (name, email, message) => {
                let missing = [("name", name), ("email", email), ("message", message)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field)
                    .collect();
                Err(FormError::MissingContactFields { missing })
            }
        }
    }
}

impl OrderForm {
    pub fn validate(&self) -> Result<ValidOrder, FormError> {
        let name = filled(&self.name);
        let phone = filled(&self.phone);
        let address = filled(&self.address);

        match (name, phone, address, self.payment_method) {
            (Some(name), Some(phone), Some(address), Some(payment_method)) => Ok(ValidOrder {
                name,
                phone,
                address,
                payment_method,
                special_instructions: filled(&self.special_instructions),
            }),
            (name, phone, address, payment_method) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if phone.is_none() {
                    missing.push("phone");
                }
                if address.is_none() {
                    missing.push("address");
                }
                if payment_method.is_none() {
                    missing.push("payment method");
                }
                Err(FormError::MissingOrderFields { missing })
            }
        }
    }
}
