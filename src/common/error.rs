// src/common/error.rs

/// Driver error, generic over the bus implementation's own error type.
///
/// Each variant is reported synchronously by the operation that detected it
/// and every operation stays independently retriable; nothing here is fatal
/// to the driver instance.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Veml6070Error<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying I/O error from the bus implementation.
    #[error("bus I/O error: {0:?}")]
    Io(E),

    /// Command payload did not fit the transport's transmit buffer
    /// (completion status 1).
    #[error("command payload too large for transmit buffer")]
    PayloadTooLarge,

    /// Slave address was not acknowledged (completion status 2).
    #[error("address not acknowledged")]
    AddressNack,

    /// Data byte was not acknowledged (completion status 3).
    #[error("data not acknowledged")]
    DataNack,

    /// Transport reported an unspecified failure (completion status 4).
    #[error("bus transport error")]
    TransportOther,

    /// Transport returned a completion status outside the documented set.
    #[error("unknown transmission status: {0}")]
    UnknownStatus(u8),

    /// Timed out polling for a byte the device was expected to deliver.
    #[error("operation timed out")]
    Timeout,

    /// Device granted fewer bytes than requested.
    #[error("short read: requested {requested}, granted {granted}")]
    ShortRead { requested: usize, granted: usize },
}

// Allow mapping from the underlying bus error via `?`.
impl<E: core::fmt::Debug> From<E> for Veml6070Error<E> {
    fn from(e: E) -> Self {
        Veml6070Error::Io(e)
    }
}
