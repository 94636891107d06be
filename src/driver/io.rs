// src/driver/io.rs

use super::Veml6070;
use crate::common::{
    address,
    error::Veml6070Error,
    hal_traits::{UvBus, UvTimer},
    timing,
};
use core::fmt::Debug;
use core::time::Duration;

// Implementation block for the low-level transaction helpers.
impl<IF> Veml6070<IF>
where
    IF: UvBus + UvTimer,
    IF::Error: Debug,
{
    /// Transmits the full current command image to the command address and
    /// maps the transport's completion status onto the error taxonomy.
    ///
    /// Always sends the whole byte, never a diff; the register is
    /// write-only, so the in-memory image is the only source of truth.
    pub(super) fn write_command(&mut self) -> Result<(), Veml6070Error<IF::Error>> {
        let byte = self.command.pack();

        self.interface.begin_transmission(address::ADDR_CMD);
        self.interface.write_byte(byte);

        match self.interface.end_transmission() {
            0 => Ok(()),
            1 => Err(Veml6070Error::PayloadTooLarge),
            2 => Err(Veml6070Error::AddressNack),
            3 => Err(Veml6070Error::DataNack),
            4 => Err(Veml6070Error::TransportOther),
            other => Err(Veml6070Error::UnknownStatus(other)),
        }
    }

    /// Requests exactly one measurement byte from `address` and consumes it.
    pub(super) fn read_data_byte(
        &mut self,
        address: u8,
    ) -> Result<u8, Veml6070Error<IF::Error>> {
        let granted = self
            .interface
            .request_from(address, 1)
            .map_err(Veml6070Error::Io)?;
        if granted != 1 {
            return Err(Veml6070Error::ShortRead {
                requested: 1,
                granted,
            });
        }

        self.consume_byte(timing::DATA_BYTE_TIMEOUT)
    }

    /// Polls the receive path at [`timing::POLL_STEP`] until a byte arrives
    /// or the deadline passes.
    ///
    /// A blocking spin is fine here: the driver is single-threaded by
    /// contract and the expected latency is microseconds to milliseconds,
    /// with the delay step as the suspension point for cooperative hosts.
    pub(super) fn consume_byte(
        &mut self,
        timeout: Duration,
    ) -> Result<u8, Veml6070Error<IF::Error>> {
        let deadline = self.interface.now() + timeout;

        loop {
            match self.interface.read_byte() {
                Ok(byte) => return Ok(byte),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(Veml6070Error::Timeout);
                    }
                    self.interface.delay_ms(timing::POLL_STEP.as_millis() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(Veml6070Error::Io(e)),
            }
        }
    }
}
