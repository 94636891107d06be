// src/common/command.rs

use super::types::{AckThreshold, IntegrationTime};

// Bit layout of the single VEML6070 command register (datasheet p. 6):
//   bit 0   SD       standby (shutdown) request
//   bit 1   reserved, must be 1 on the wire
//   bit 2-3 IT       integration time
//   bit 4   ACK_THD  interrupt threshold select
//   bit 5   ACK      interrupt enable
const SD_BIT: u8 = 1 << 0;
const RESERVED_BIT: u8 = 1 << 1;
const IT_SHIFT: u8 = 2;
const ACK_THD_BIT: u8 = 1 << 4;
const ACK_BIT: u8 = 1 << 5;

/// In-memory image of the command register.
///
/// The register is write-only, so the driver keeps the full image here and
/// transmits it whole on every write; there is no read-modify-write against
/// the device.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandRegister {
    pub(crate) shutdown: bool,
    pub(crate) integration: IntegrationTime,
    pub(crate) ack_threshold: AckThreshold,
    pub(crate) ack_enable: bool,
}

impl CommandRegister {
    /// Fresh image: device active, shortest integration window, interrupts
    /// disarmed. Matches the register's power-on contents apart from the
    /// reserved bit, which [`CommandRegister::pack`] supplies.
    pub const fn new() -> Self {
        CommandRegister {
            shutdown: false,
            integration: IntegrationTime::Half,
            ack_threshold: AckThreshold::Steps102,
            ack_enable: false,
        }
    }

    /// Packs the named fields into the wire byte by shift-and-mask.
    ///
    /// The reserved bit is always transmitted set; the datasheet requires it
    /// to be 1 and it must never be cleared once the register has been
    /// prepared.
    pub fn pack(&self) -> u8 {
        let mut byte = RESERVED_BIT;
        if self.shutdown {
            byte |= SD_BIT;
        }
        byte |= self.integration.bits() << IT_SHIFT;
        if self.ack_threshold == AckThreshold::Steps145 {
            byte |= ACK_THD_BIT;
        }
        if self.ack_enable {
            byte |= ACK_BIT;
        }
        byte
    }
}

impl Default for CommandRegister {
    fn default() -> Self {
        Self::new()
    }
}
