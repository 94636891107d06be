// src/common/address.rs

//! Fixed 7-bit slave addresses occupied by the VEML6070.
//!
//! The device does not have a configurable address; it answers on a small
//! block of addresses derived from one base, plus the I2C Alert Response
//! Address for interrupt acknowledgement. See the Vishay application note
//! "Designing the VEML6070 UV Light Sensor Into Applications" (p. 11).

/// Alert Response Address. Reading one byte here de-asserts the latched
/// ACK interrupt line; the byte's value carries no information.
pub const ADDR_ARA: u8 = 0x18 >> 1;

/// Command register address (write-only).
pub const ADDR_CMD: u8 = 0x70 >> 1;

/// Low byte of the 16-bit UV measurement.
pub const ADDR_DATA_LSB: u8 = 0x71 >> 1;

/// High byte of the 16-bit UV measurement.
pub const ADDR_DATA_MSB: u8 = 0x73 >> 1;
