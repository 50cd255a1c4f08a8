use bagdat_order::checkout::{FormError, InstantSubmitter};
use bagdat_order::lifecycle::{Site, SiteConfig};
use bagdat_order::model::{format_money, ContactForm, OrderForm, PaymentMethod};
use bagdat_order::navigation::cart_badge;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn order_form() -> OrderForm {
    OrderForm {
        name: "Aida".to_string(),
        phone: "(204) 555-0142".to_string(),
        address: "123 Portage Avenue".to_string(),
        payment_method: Some(PaymentMethod::CashOnDelivery),
        special_instructions: String::new(),
    }
}

/// Browse, fill the cart, check out and track the delivery with real tasks.
#[tokio::test(start_paused = true)]
async fn test_full_site_flow() {
    let submitter = Arc::new(InstantSubmitter::new());
    let mut site = Site::with_submitter(&SiteConfig::default(), submitter.clone());

    let spring_rolls = site.menu.find("starter-1").cloned().expect("Spring rolls");
    let salmon = site.menu.find("main-3").cloned().expect("Salmon");

    site.cart.add_item(spring_rolls.clone()).await.unwrap();
    site.cart.add_item(spring_rolls).await.unwrap();
    let cart = site.cart.add_item(salmon).await.unwrap();

    assert_eq!(cart.items.len(), 2);
    assert_eq!(cart.get("starter-1").unwrap().quantity, 2);
    assert_eq!(cart.totals.total, dec!(40.97));
    assert_eq!(cart.totals.tax, dec!(4.9164));
    assert_eq!(cart.totals.grand_total, dec!(45.8864));
    assert_eq!(format_money(cart.totals.grand_total), "$45.89");
    assert_eq!(cart_badge(cart.item_count()), Some(3));

    let confirmation = site.checkout.place_order(&order_form()).await.unwrap();
    assert_eq!(confirmation.totals.grand_total, dec!(45.8864));
    assert_eq!(confirmation.payment_method, PaymentMethod::CashOnDelivery);
    assert_eq!(submitter.orders(), 1);

    let cart = site.cart.snapshot().await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(cart.totals.grand_total, dec!(0));

    site.delivery.start();
    tokio::time::sleep(Duration::from_millis(12_500)).await;
    let progress = site.delivery.progress();
    assert_eq!(progress.percent_label(), "100%");
    assert!(progress.running);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(!site.delivery.is_running());

    site.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_second_order_needs_a_refilled_cart() {
    let site = Site::with_submitter(&SiteConfig::default(), Arc::new(InstantSubmitter::new()));
    let item = site.menu.find("drink-1").cloned().unwrap();

    site.cart.add_item(item).await.unwrap();
    site.checkout.place_order(&order_form()).await.unwrap();

    let second = site.checkout.place_order(&order_form()).await;
    assert_eq!(second, Err(FormError::EmptyCart));
    assert_eq!(second.unwrap_err().title(), "Your cart is empty");

    site.shutdown().await.unwrap();
}

/// Every clone talks to the same cart, and concurrent adds are all applied.
#[tokio::test]
async fn test_concurrent_adds_from_cloned_clients() {
    let site = Site::with_submitter(&SiteConfig::default(), Arc::new(InstantSubmitter::new()));
    let item = site.menu.find("dessert-2").cloned().unwrap();

    let mut tasks = Vec::new();
    for _ in 0..20 {
        let cart = site.cart.clone();
        let item = item.clone();
        tasks.push(tokio::spawn(async move { cart.add_item(item).await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let cart = site.cart.snapshot().await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.item_count(), 20);
    assert_eq!(cart.totals.total, dec!(139.80));
    assert_eq!(cart.totals.grand_total, cart.totals.total + cart.totals.tax);

    site.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_subscribers_see_each_mutation() {
    let site = Site::with_submitter(&SiteConfig::default(), Arc::new(InstantSubmitter::new()));
    let mut updates = site.cart.subscribe();
    let item = site.menu.find("main-2").cloned().unwrap();

    site.cart.add_item(item).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().item_count(), 1);

    site.cart.update_quantity("main-2", 4).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().totals.total, dec!(59.96));

    site.cart.remove_item("main-2").await.unwrap();
    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().is_empty());

    site.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clients() {
    let site = Site::with_submitter(&SiteConfig::default(), Arc::new(InstantSubmitter::new()));
    let straggler = site.cart.clone();
    let item = site.menu.find("starter-3").cloned().unwrap();
    straggler.add_item(item).await.unwrap();

    // The straggler keeps the channel open, so shut down in the background.
    let shutdown = tokio::spawn(site.shutdown());
    assert_eq!(straggler.snapshot().await.unwrap().item_count(), 1);
    drop(straggler);

    shutdown.await.unwrap().unwrap();
}

/// The default session waits the configured submit delays.
#[tokio::test(start_paused = true)]
async fn test_simulated_submission_delays() {
    let mut config = SiteConfig::default();
    config.submit.order_delay = Duration::from_millis(750);
    let site = Site::new(&config);

    let contact = ContactForm {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        message: "Do you cater?".to_string(),
    };
    let started = Instant::now();
    site.checkout.submit_contact(&contact).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let item = site.menu.find("drink-3").cloned().unwrap();
    site.cart.add_item(item).await.unwrap();
    let started = Instant::now();
    site.checkout.place_order(&order_form()).await.unwrap();
    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(750) && waited < Duration::from_millis(1500));

    site.shutdown().await.unwrap();
}

/// Items added while an order is being sent stay in the cart for the next one.
#[tokio::test(start_paused = true)]
async fn test_items_added_during_order_delay_are_kept() {
    let site = Site::new(&SiteConfig::default());
    let spring_rolls = site.menu.find("starter-1").cloned().unwrap();
    let salmon = site.menu.find("main-3").cloned().unwrap();
    site.cart.add_item(spring_rolls).await.unwrap();

    let checkout = site.checkout.clone();
    let order = tokio::spawn(async move { checkout.place_order(&order_form()).await });

    tokio::time::sleep(Duration::from_millis(500)).await;
    let during = site.cart.add_item(salmon).await.unwrap();
    assert_eq!(during.items.len(), 1);
    assert_eq!(during.items[0].id, "main-3");

    let confirmation = order.await.unwrap().unwrap();
    let ordered: Vec<_> = confirmation.items.iter().map(|line| line.id.as_str()).collect();
    assert_eq!(ordered, ["starter-1"]);
    assert_eq!(confirmation.totals.total, dec!(8.99));

    let cart = site.cart.snapshot().await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.get("main-3").unwrap().quantity, 1);
    assert_eq!(cart.totals.total, dec!(22.99));

    site.shutdown().await.unwrap();
}
