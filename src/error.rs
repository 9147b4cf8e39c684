use core::fmt;

/// Errors reported by the driver. `E` is the error type of the I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A register transaction failed on the bus. Registers written earlier in
    /// the same operation keep their new values.
    I2c(E),
    /// Pin index outside `0..16`. Nothing was sent to the chip.
    InvalidPin(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C transaction failed: {:?}", e),
            Error::InvalidPin(pin) => write!(f, "pin {} is out of range, valid pins are 0-15", pin),
        }
    }
}
