//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; the structured fields (`item_id`,
//! `quantity`, `size`, `progress`) carry the context instead.
//!
//! ```bash
//! # Cart mutations, orders, tracker runs
//! RUST_LOG=info cargo run
//!
//! # Every request sent to the cart actor and every tick
//! RUST_LOG=debug cargo run
//!
//! # Just the tracker
//! RUST_LOG=bagdat_order::delivery=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a checkout reads like:
//!
//! ```text
//! INFO Cart started
//! INFO add_item: Added item_id=starter-1 size=1
//! INFO add_item: Added item_id=main-3 size=2
//! INFO order_placement:place_order: Taken for order size=2
//! INFO order_placement:place_order: Order placed items=3 grand_total=45.8864 payment=Credit Card
//! INFO Delivery tracking started tick_ms=3000
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Falls back to `info` when `RUST_LOG` is
/// unset or unparsable. Calling it twice is a no-op.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
