//! Session orchestration.
//!
//! - [`Site`] - starts the cart actor, wires checkout and the delivery
//!   tracker to it, and shuts everything down
//! - [`SiteConfig`] - timings and sizes, from defaults, `site.toml` and `SITE__*`
//! - [`setup_tracing`] - installs the log subscriber

pub mod config;
pub mod site;
pub mod tracing;

pub use config::{ConfigError, SiteConfig};
pub use site::*;
pub use tracing::*;
