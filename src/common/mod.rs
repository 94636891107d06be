// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod address;
pub mod command;
pub mod error;
pub mod hal_traits;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From command.rs
pub use command::CommandRegister;

// From error.rs
pub use error::Veml6070Error;

// From hal_traits.rs
pub use hal_traits::{UvBus, UvClock, UvInstant, UvTimer};

// From types.rs
pub use types::{AckThreshold, IntegrationTime, SensorConfig};

// From timing.rs (constants - users can access via common::timing::*)
