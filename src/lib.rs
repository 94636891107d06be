// src/lib.rs

//! Platform-agnostic driver for the Vishay VEML6070 UV light sensor.
//!
//! The sensor is controlled through a single write-only command register and
//! read through two fixed data addresses on a two-wire bus. This crate owns
//! the command-register image and the transaction protocol around it; the
//! physical bus and the timebase are injected through the
//! [`common::hal_traits`] traits, which keeps the driver testable and
//! independent of any one HAL.
//!
//! Datasheet: <https://www.vishay.com/docs/84277/veml6070.pdf>

// Tests run on the host and use std for the mock interfaces.
#![cfg_attr(not(test), no_std)]

#[cfg(feature = "embedded-hal")]
pub mod adapter;
pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::error::Veml6070Error;
pub use common::hal_traits::{UvBus, UvClock, UvInstant, UvTimer};
pub use common::types::{AckThreshold, IntegrationTime, SensorConfig};
pub use driver::Veml6070;
