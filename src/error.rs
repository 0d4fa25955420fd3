//! Error types for the SSD1306 driver.

use core::fmt;

/// Errors that can occur when talking to the display controller.
///
/// The driver is write-only, so the only runtime failures are a rejected bus
/// transaction or a data burst that does not fit the fixed burst buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OledError<E> {
    /// Underlying I2C bus error (address nack, timeout, arbitration loss).
    Transport(E),

    /// A burst exceeded [`MAX_BURST_LEN`](crate::MAX_BURST_LEN) payload bytes.
    /// Nothing was sent.
    BurstTooLong,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for OledError<E> {
    fn from(error: E) -> Self {
        OledError::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for OledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Transport(e) => write!(f, "I2C error: {:?}", e),
            OledError::BurstTooLong => write!(
                f,
                "Burst too long (max {} bytes)",
                crate::driver::MAX_BURST_LEN
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: fmt::Debug> defmt::Format for OledError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Transport(e) => defmt::write!(f, "I2C error: {}", defmt::Debug2Format(e)),
            OledError::BurstTooLong => defmt::write!(f, "Burst too long"),
        }
    }
}
