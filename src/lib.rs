//! # Bagdat Order
//!
//! The state and behaviour behind a single-page restaurant site: a menu, a
//! shopping cart with tax, contact and order forms, and a simulated delivery
//! tracker.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the cart
//! The cart lives inside a [`CartActor`](cart_actor::CartActor) task. Views hold
//! cheap [`CartClient`](clients::CartClient) clones and send requests; the actor
//! applies them one at a time in arrival order and publishes every new state on
//! a `watch` channel. There are no locks and no way to observe a cart whose
//! totals disagree with its lines.
//!
//! ### Money is decimal
//! Prices and totals are [`rust_decimal::Decimal`], so `40.97 × 0.12` is exactly
//! `4.9164`. Rounding happens only for display, in
//! [`format_money`](model::format_money).
//!
//! ### Time is injected
//! The delivery tracker's timer and the form submission delays are values the
//! caller controls ([`SimulatorTiming`](delivery::SimulatorTiming),
//! [`Submitter`](checkout::Submitter)), so tests run on paused Tokio time or
//! with no delay at all.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - catalog, cart lines and totals, delivery steps, form data
//! - [`cart_actor`] - the cart rules ([`CartStore`](cart_actor::CartStore)) and the task hosting them
//! - [`clients`] - [`CartClient`](clients::CartClient) and the [`mock`](clients::mock) helpers for testing it
//! - [`checkout`] - form validation and submission
//! - [`delivery`] - the progress tracker and its timer
//! - [`navigation`] - sections, scroll targets, scroll-spy
//! - [`lifecycle`] - [`Site`](lifecycle::Site), configuration, logging

pub mod cart_actor;
pub mod checkout;
pub mod clients;
pub mod delivery;
pub mod lifecycle;
pub mod model;
pub mod navigation;
