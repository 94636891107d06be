// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A monotonic timestamp produced by a [`UvTimer`] or [`UvClock`].
///
/// Mirrors the shape of `std::time::Instant` without requiring std:
/// copyable, ordered, advanced by a `Duration` and subtracted to one.
/// Anything with those properties qualifies through the blanket impl,
/// including `std::time::Instant` itself on hosted targets.
pub trait UvInstant:
    Copy + Debug + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> UvInstant for T where
    T: Copy + Debug + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

/// Monotonic clock source, split out from [`UvTimer`] so HAL adapters can
/// combine a stock delay implementation with a board-specific timebase.
pub trait UvClock {
    type Instant: UvInstant;

    /// Current monotonic time.
    fn now(&self) -> Self::Instant;
}

/// Timekeeping the driver needs: a millisecond-granularity delay for the
/// availability polling loop and a monotonic clock for refresh throttling.
pub trait UvTimer {
    type Instant: UvInstant;

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Current monotonic time.
    fn now(&self) -> Self::Instant;
}

/// Abstraction for the two-wire bus transport, master side.
///
/// Writes follow a begin/queue/end transaction shape; reads follow a
/// request/consume shape where the transfer first grants a byte count and
/// the bytes are then drained one at a time. Clock generation, arbitration
/// and electrical concerns belong to the implementation, not the driver.
pub trait UvBus {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Join the bus as a master. Implementations must tolerate repeated
    /// calls on an already-open bus.
    fn open(&mut self) -> Result<(), Self::Error>;

    /// Start buffering a write transaction to the given 7-bit address.
    fn begin_transmission(&mut self, address: u8);

    /// Queue one byte for the open transaction.
    fn write_byte(&mut self, byte: u8);

    /// Send the buffered transaction and return its completion status:
    /// 0 success, 1 payload too large for the transmit buffer, 2 address
    /// not acknowledged, 3 data not acknowledged, 4 other transport error.
    /// The driver maps these onto [`crate::Veml6070Error`] variants.
    fn end_transmission(&mut self) -> u8;

    /// Ask the device at `address` for `count` bytes. Returns how many bytes
    /// the transfer actually granted; the bytes themselves are consumed
    /// through [`UvBus::read_byte`].
    fn request_from(&mut self, address: u8, count: usize) -> Result<usize, Self::Error>;

    /// Take one granted byte, or `WouldBlock` while none is available yet.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;
}
