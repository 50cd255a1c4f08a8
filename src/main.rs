//! A scripted visit: browse the menu, fill the cart, place an order and watch
//! the delivery tracker run to completion.
//!
//! Timings come from `site.toml` / `SITE__*`; set `SITE__TICK_INTERVAL_MS=200`
//! for a quick run.

use bagdat_order::lifecycle::{setup_tracing, Site, SiteConfig};
use bagdat_order::model::{format_money, OrderForm, PaymentMethod};
use bagdat_order::navigation::{cart_badge, SectionId};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SiteConfig::load()?;
    let mut site = Site::new(&config);

    let span = tracing::info_span!("browsing");
    async {
        for category in site.menu.categories() {
            info!(
                category = category.label(),
                items = site.menu.items(category).len(),
                "Menu section"
            );
        }
        for entry in site.contact.entries() {
            info!(channel = %entry.channel, details = %entry.details, "Contact");
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("shopping");
    let cart = async {
        for id in ["starter-1", "starter-1", "main-3"] {
            let Some(item) = site.menu.find(id) else {
                error!(item_id = id, "Not on the menu");
                continue;
            };
            site.cart.add_item(item.clone()).await?;
        }
        site.cart.snapshot().await
    }
    .instrument(span)
    .await?;

    info!(
        subtotal = %format_money(cart.totals.total),
        tax = %format_money(cart.totals.tax),
        total = %format_money(cart.totals.grand_total),
        badge = ?cart_badge(cart.item_count()),
        "Cart ready"
    );

    let target = site.navigator.scroll_target(3000.0);
    info!(section = %SectionId::Order, scroll_to = target, "Going to checkout");

    let form = OrderForm {
        name: "Aida Bagdat".to_string(),
        phone: "(204) 555-0142".to_string(),
        address: "123 Portage Avenue, Winnipeg".to_string(),
        payment_method: Some(PaymentMethod::CreditCard),
        special_instructions: "Ring the bell".to_string(),
    };

    let span = tracing::info_span!("order_placement");
    let placed = site.checkout.place_order(&form).instrument(span).await;
    match placed {
        Ok(confirmation) => info!(
            customer = %confirmation.customer,
            total = %format_money(confirmation.totals.grand_total),
            "Order confirmed"
        ),
        Err(e) => {
            error!(title = e.title(), error = %e, "Order failed");
            site.shutdown().await?;
            return Ok(());
        }
    }

    let span = tracing::info_span!("delivery_tracking");
    async {
        let mut updates = site.delivery.subscribe();
        site.delivery.start();
        while updates.changed().await.is_ok() {
            let progress = updates.borrow_and_update().clone();
            if let Some(step) = progress.current_step() {
                info!(step = %step.label, progress = %progress.percent_label(), "Tracking");
            }
            if !progress.running {
                break;
            }
        }
    }
    .instrument(span)
    .await;

    site.shutdown().await?;
    Ok(())
}
