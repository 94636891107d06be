// src/common/types.rs

use super::timing;
use core::time::Duration;

/// Integration time setting (the IT field of the command register).
///
/// Selects the sensor's internal accumulation window. Together with the
/// external RSET resistor it fixes how long one physically meaningful
/// sample takes, and therefore how often polling can yield fresh data.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum IntegrationTime {
    /// Half the nominal window (1/2T).
    Half = 0b00,
    /// The nominal window (1T).
    One = 0b01,
    /// Twice the nominal window (2T).
    Two = 0b10,
    /// Four times the nominal window (4T).
    Four = 0b11,
}

impl IntegrationTime {
    /// Two-bit value transmitted in the IT field.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Milliseconds of refresh time per kOhm of RSET.
    ///
    /// The refresh time is linear in RSET (datasheet p. 8): 62.5 ms at 1/2T
    /// with a 300 kOhm RSET, doubling with each longer window.
    pub(crate) const fn coefficient(self) -> f32 {
        match self {
            IntegrationTime::Half => 0.208_333_33,
            IntegrationTime::One => 0.416_666_67,
            IntegrationTime::Two => 0.833_333_33,
            IntegrationTime::Four => 1.666_666_7,
        }
    }
}

/// Threshold for the ACK interrupt, in counting steps (datasheet p. 6).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AckThreshold {
    /// Trip at 102 counting steps.
    Steps102 = 0,
    /// Trip at 145 counting steps.
    Steps145 = 1,
}

impl AckThreshold {
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Immutable per-instance configuration, fixed at construction.
///
/// The refresh interval is derived once from the integration time and the
/// board's RSET value; the 10% headroom covers the resistor's worst-case
/// tolerance so the driver never polls inside a still-running integration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    integration: IntegrationTime,
    rset_kohm: u32,
    refresh_interval_ms: u32,
}

impl SensorConfig {
    /// Derives the refresh interval for the given integration time and RSET
    /// value (in kOhm). Pure computation, no bus traffic.
    ///
    /// A generic breakout module typically carries 270 or 300 kOhm.
    pub fn new(integration: IntegrationTime, rset_kohm: u32) -> Self {
        let ms = integration.coefficient() * rset_kohm as f32 * timing::RSET_TOLERANCE_FACTOR;
        SensorConfig {
            integration,
            rset_kohm,
            refresh_interval_ms: ms as u32,
        }
    }

    #[inline]
    pub const fn integration(&self) -> IntegrationTime {
        self.integration
    }

    #[inline]
    pub const fn rset_kohm(&self) -> u32 {
        self.rset_kohm
    }

    /// Minimum time between two physically meaningful readings.
    #[inline]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms as u64)
    }
}
