//! The single failure kind a transfer can end with

use core::fmt;

/// Errors reported by the driver
///
/// There is exactly one kind: the I2C implementation refused or lost a write
/// (timeout, NACK, arbitration loss). The payload is the implementation's own error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// A four-byte nibble frame did not reach the backpack
    BusTransferFailure(E),
}

impl<E> Error<E> {
    /// Unwrap the underlying I2C error
    pub fn into_inner(self) -> E {
        match self {
            Error::BusTransferFailure(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BusTransferFailure(e) => write!(f, "I2C bus transfer failed: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Error::BusTransferFailure(_e) => defmt::write!(fmt, "I2C bus transfer failed"),
        }
    }
}
