use crate::cart_actor::CartActor;
use crate::checkout::{Checkout, Submitter};
use crate::clients::CartClient;
use crate::delivery::DeliverySimulator;
use crate::lifecycle::SiteConfig;
use crate::model::{ContactInfo, Menu};
use crate::navigation::Navigator;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Cart task failed: {0}")]
    CartTask(#[from] JoinError),
}

/// One page session: the cart and everything that reads or changes it.
///
/// `Site` is responsible for:
/// - **Startup**: spawning the cart actor with the configured channel size
/// - **Wiring**: handing cart clients to checkout
/// - **Shutdown**: dropping every client and waiting for the actor to drain
///
/// # Example
///
/// ```no_run
/// use bagdat_order::lifecycle::{Site, SiteConfig};
/// use bagdat_order::model::{OrderForm, PaymentMethod};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut site = Site::new(&SiteConfig::load()?);
///
///     if let Some(item) = site.menu.find("starter-1") {
///         site.cart.add_item(item.clone()).await?;
///     }
///     let form = OrderForm {
///         name: "Aida".to_string(),
///         phone: "(204) 555-0142".to_string(),
///         address: "123 Portage Avenue".to_string(),
///         payment_method: Some(PaymentMethod::CreditCard),
///         special_instructions: String::new(),
///     };
///     let confirmation = site.checkout.place_order(&form).await?;
///     println!("{} item(s) ordered", confirmation.items.len());
///     site.delivery.start();
///
///     site.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct Site {
    pub menu: Menu,
    pub contact: ContactInfo,
    pub cart: CartClient,
    pub checkout: Checkout,
    pub delivery: DeliverySimulator,
    pub navigator: Navigator,

    handles: Vec<JoinHandle<()>>,
}

impl Site {
    /// Starts a session whose forms wait the configured submit delays.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_submitter(config, Arc::new(config.submit))
    }

    /// Starts a session that sends forms through `submitter`.
    pub fn with_submitter(config: &SiteConfig, submitter: Arc<dyn Submitter>) -> Self {
        let (cart_actor, cart) = CartActor::new(config.cart_buffer.max(1));
        let cart_handle = tokio::spawn(cart_actor.run());

        info!(cart_buffer = config.cart_buffer, "Site started");

        Self {
            menu: Menu::standard(),
            contact: ContactInfo::standard(),
            checkout: Checkout::new(cart.clone(), submitter),
            cart,
            delivery: DeliverySimulator::new(config.delivery),
            navigator: Navigator::new(config.header_offset),
            handles: vec![cart_handle],
        }
    }

    /// Stops the tracker, closes the cart and waits for its task to finish.
    ///
    /// Clients cloned out of the session keep the cart alive; drop them first.
    pub async fn shutdown(self) -> Result<(), SiteError> {
        info!("Shutting down site...");

        drop(self.delivery);
        drop(self.checkout);
        drop(self.cart);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Cart task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("Site shutdown complete.");
        Ok(())
    }
}

