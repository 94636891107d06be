// src/driver/mod.rs

use crate::common::{
    address,
    command::CommandRegister,
    error::Veml6070Error,
    hal_traits::{UvBus, UvTimer},
    timing,
    types::{AckThreshold, IntegrationTime, SensorConfig},
};
use core::fmt::Debug;
use core::time::Duration;

// Logging shims: expand to nothing unless the defmt feature is enabled.
macro_rules! uv_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
    }};
}
macro_rules! uv_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

mod io;

/// Driver instance for one VEML6070 behind one bus.
///
/// Strictly synchronous and single-threaded: every operation performs its
/// bus transactions to completion (or bounded timeout) before returning.
/// The command image and the cached reading are exclusively owned here; if
/// several execution contexts share an instance, synchronization is the
/// caller's problem.
#[derive(Debug)]
pub struct Veml6070<IF>
where
    IF: UvBus + UvTimer,
    IF::Error: Debug,
{
    interface: IF,
    config: SensorConfig,
    command: CommandRegister,
    initialized: bool,
    last_reading: u16,
    last_read_at: Option<<IF as UvTimer>::Instant>,
}

impl<IF> Veml6070<IF>
where
    IF: UvBus + UvTimer,
    IF::Error: Debug,
{
    /// Creates a driver for the given bus/timer interface. Pure computation:
    /// the refresh interval is derived here, but no bus traffic happens
    /// until [`Veml6070::launch`].
    pub fn new(interface: IF, integration: IntegrationTime, rset_kohm: u32) -> Self {
        Veml6070 {
            interface,
            config: SensorConfig::new(integration, rset_kohm),
            command: CommandRegister::new(),
            initialized: false,
            last_reading: 0,
            last_read_at: None,
        }
    }

    /// Brings the sensor up: joins the bus, clears the latched interrupt,
    /// then writes the configured integration time.
    ///
    /// Idempotent: once initialized, further calls are no-op successes and
    /// do not reset any state. The sequence is all-or-nothing; if the
    /// command write fails after a successful interrupt clear, the driver
    /// stays uninitialized and the whole call is retriable.
    pub fn launch(&mut self) -> Result<(), Veml6070Error<IF::Error>> {
        if self.initialized {
            uv_trace!("launch: instance already initialized");
            return Ok(());
        }

        self.interface.open().map_err(Veml6070Error::Io)?;

        self.clear_interrupt()?;

        self.command.integration = self.config.integration();
        match self.write_command() {
            Ok(()) => {
                self.initialized = true;
                uv_trace!(
                    "launch: ok, refresh interval {} ms",
                    self.config.refresh_interval().as_millis() as u32
                );
                Ok(())
            }
            Err(e) => {
                // The interrupt clear already went through, but the caller
                // must see one atomic launch; stay uninitialized so a retry
                // redoes the whole sequence.
                self.initialized = false;
                uv_warn!("launch: command write failed");
                Err(e)
            }
        }
    }

    /// De-asserts the sensor's latched ACK interrupt by reading one byte
    /// from the Alert Response Address.
    ///
    /// Fails immediately if the device grants no data, and after
    /// [`timing::CLEAR_INTERRUPT_TIMEOUT`] of 1 ms availability polls if the
    /// granted byte never materializes. The byte itself is discarded; this
    /// is a hardware handshake, not a data read.
    pub fn clear_interrupt(&mut self) -> Result<(), Veml6070Error<IF::Error>> {
        let granted = self
            .interface
            .request_from(address::ADDR_ARA, 1)
            .map_err(Veml6070Error::Io)?;
        if granted == 0 {
            uv_warn!("clear_interrupt: alert response address granted no data");
            return Err(Veml6070Error::ShortRead {
                requested: 1,
                granted: 0,
            });
        }

        let _ = self.consume_byte(timing::CLEAR_INTERRUPT_TIMEOUT)?;
        Ok(())
    }

    /// Requests the sensor enter (`true`) or leave (`false`) standby by
    /// rewriting the command register with the SD bit updated.
    pub fn shut_down(&mut self, enable: bool) -> Result<(), Veml6070Error<IF::Error>> {
        self.command.shutdown = enable;
        self.write_command()
    }

    /// Arms or disarms the ACK interrupt and selects its threshold step.
    ///
    /// A best-effort [`Veml6070::clear_interrupt`] runs first so a stale
    /// latch cannot fire the moment the interrupt is re-armed; its outcome
    /// is deliberately not part of this operation's result.
    pub fn set_ack(
        &mut self,
        active: bool,
        threshold: AckThreshold,
    ) -> Result<(), Veml6070Error<IF::Error>> {
        self.command.ack_enable = active;
        self.command.ack_threshold = threshold;

        if self.clear_interrupt().is_err() {
            uv_warn!("set_ack: latch clear failed, continuing");
        }
        self.write_command()
    }

    /// Reads the 16-bit UV value directly from the sensor, MSB first.
    ///
    /// Each half must grant exactly one byte or the whole read fails; no
    /// sentinel value is ever returned in place of a sample.
    pub fn read_uv(&mut self) -> Result<u16, Veml6070Error<IF::Error>> {
        let msb = self.read_data_byte(address::ADDR_DATA_MSB)?;
        let lsb = self.read_data_byte(address::ADDR_DATA_LSB)?;
        Ok(u16::from(msb) << 8 | u16::from(lsb))
    }

    /// Rate-limited read: returns the cached value until one full refresh
    /// interval has elapsed (strictly) since the last attempt, then performs
    /// a fresh [`Veml6070::read_uv`].
    ///
    /// Polling faster than the integration period would only re-read the
    /// same electrical sample, so the throttle is unconditional. A failed
    /// refresh consumes the window all the same; the previous value is
    /// retained and the failure is logged. Use [`Veml6070::read_uv`] when
    /// the outcome of the underlying transaction matters.
    pub fn get_uv(&mut self) -> u16 {
        let now = self.interface.now();
        let due = match self.last_read_at {
            None => true,
            Some(last) => now - last > self.config.refresh_interval(),
        };

        if due {
            self.last_read_at = Some(now);
            match self.read_uv() {
                Ok(value) => self.last_reading = value,
                Err(_) => uv_warn!("get_uv: refresh read failed, serving cached value"),
            }
        }

        self.last_reading
    }

    /// Tears the driver down and hands the interface back.
    ///
    /// If the sensor was launched, the pending interrupt is cleared and a
    /// standby command is issued, both best-effort: teardown must never
    /// fail audibly, so all errors are swallowed.
    pub fn release(mut self) -> IF {
        if self.initialized {
            let _ = self.clear_interrupt();
            let _ = self.shut_down(true);
        }
        self.interface
    }

    /// Whether [`Veml6070::launch`] has completed successfully.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Minimum time between two physically meaningful readings.
    #[inline]
    pub fn refresh_interval(&self) -> Duration {
        self.config.refresh_interval()
    }

    /// Last value cached by [`Veml6070::get_uv`].
    #[inline]
    pub fn last_reading(&self) -> u16 {
        self.last_reading
    }

    /// The command byte the next write transaction will transmit.
    #[inline]
    pub fn command_byte(&self) -> u8 {
        self.command.pack()
    }
}
