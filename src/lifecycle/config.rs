//! # Site Configuration
//!
//! Timings and sizes for a page session. Values are resolved in three layers,
//! later layers winning:
//!
//! 1. built-in defaults ([`SiteConfig::default`])
//! 2. an optional `site.toml` in the working directory
//! 3. `SITE__*` environment variables
//!
//! Durations are written in milliseconds:
//!
//! ```toml
//! cart_buffer = 16
//! header_offset = 80.0
//!
//! [delivery]
//! tick_interval = 3000
//! terminal_hold = 2000
//!
//! [submit]
//! contact_delay = 1500
//! order_delay = 2000
//! ```
//!
//! Tax rate and the quantity floor are business rules, not settings, and live
//! in [`crate::model::cart`].

use crate::cart_actor::DEFAULT_BUFFER_SIZE;
use crate::checkout::SimulatedSubmitter;
use crate::delivery::SimulatorTiming;
use crate::navigation::HEADER_OFFSET;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;
use tracing::{debug, info};

/// Default config file, relative to the working directory.
pub const CONFIG_FILE: &str = "site.toml";

const ENV_PREFIX: &str = "SITE__";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: String, value: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub delivery: SimulatorTiming,
    pub submit: SimulatedSubmitter,
    /// Capacity of the cart actor's request channel.
    pub cart_buffer: usize,
    /// Height of the fixed header that scroll targets clear.
    pub header_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            delivery: SimulatorTiming::default(),
            submit: SimulatedSubmitter::default(),
            cart_buffer: DEFAULT_BUFFER_SIZE,
            header_offset: HEADER_OFFSET,
        }
    }
}

impl SiteConfig {
    /// Loads `site.toml` (if present) and applies `SITE__*` overrides from the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;
        config.apply_env(|key| std::env::var(key).ok())?;
        info!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(raw) => {
                debug!(path = %path.display(), "Reading config file");
                let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.display().to_string(),
                    source,
                })?;
                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Overrides fields from variables found by `lookup`, then validates.
    ///
    /// Recognised keys: `SITE__TICK_INTERVAL_MS`, `SITE__TERMINAL_HOLD_MS`,
    /// `SITE__CONTACT_DELAY_MS`, `SITE__ORDER_DELAY_MS`, `SITE__CART_BUFFER`,
    /// `SITE__HEADER_OFFSET`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };

        if let Some((key, value)) = var("TICK_INTERVAL_MS") {
            self.delivery.tick_interval = Duration::from_millis(parse(&key, &value)?);
        }
        if let Some((key, value)) = var("TERMINAL_HOLD_MS") {
            self.delivery.terminal_hold = Duration::from_millis(parse(&key, &value)?);
        }
        if let Some((key, value)) = var("CONTACT_DELAY_MS") {
            self.submit.contact_delay = Duration::from_millis(parse(&key, &value)?);
        }
        if let Some((key, value)) = var("ORDER_DELAY_MS") {
            self.submit.order_delay = Duration::from_millis(parse(&key, &value)?);
        }
        if let Some((key, value)) = var("CART_BUFFER") {
            self.cart_buffer = parse(&key, &value)?;
        }
        if let Some((key, value)) = var("HEADER_OFFSET") {
            self.header_offset = parse(&key, &value)?;
        }
        self.validate()
    }

    /// Rejects settings the timer or the cart channel cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delivery.tick_interval.is_zero() {
            return Err(ConfigError::NotPositive {
                field: "delivery.tick_interval",
            });
        }
        if self.cart_buffer == 0 {
            return Err(ConfigError::NotPositive {
                field: "cart_buffer",
            });
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Serde adapter reading a [`Duration`] written as whole milliseconds.
pub(crate) mod millis {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
