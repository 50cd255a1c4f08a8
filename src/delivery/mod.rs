//! # Delivery Tracker
//!
//! A demo of order tracking: four fixed stages completed one by one on a
//! timer. Nothing here talks to a real courier.
//!
//! - [`progress`] - [`DeliveryProgress`], the explicit tracker state and its `tick`
//! - [`simulator`] - [`DeliverySimulator`], the timer task and its cancellation

pub mod progress;
pub mod simulator;

pub use progress::*;
pub use simulator::*;
