//! Common error types for driver operations

use core::fmt;

/// Driver operation errors
///
/// Every error is detected before the first register write of the
/// operation that reports it, so a failed call leaves the hardware untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raw interrupt number outside the vendor table or inside a reserved gap
    InvalidChannel(u8),
    /// Priority level uses bits outside the 3-bit priority field
    PriorityOutOfRange(u8),
    /// Exception whose priority is fixed by the architecture (exception number)
    FixedPriority(u8),
    /// Timer duration in milliseconds that does not fit the 24-bit reload register
    DurationOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel(irq) => write!(f, "invalid interrupt channel {}", irq),
            Self::PriorityOutOfRange(level) => {
                write!(f, "priority level {} out of range 0..=7", level)
            }
            Self::FixedPriority(exception) => {
                write!(f, "exception {} has a fixed priority", exception)
            }
            Self::DurationOutOfRange(ms) => {
                write!(f, "duration of {} ms does not fit the reload register", ms)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidChannel(irq) => defmt::write!(fmt, "InvalidChannel({})", irq),
            Self::PriorityOutOfRange(level) => defmt::write!(fmt, "PriorityOutOfRange({})", level),
            Self::FixedPriority(exception) => defmt::write!(fmt, "FixedPriority({})", exception),
            Self::DurationOutOfRange(ms) => defmt::write!(fmt, "DurationOutOfRange({})", ms),
        }
    }
}

/// Result type for driver operations
pub type HalResult<T> = Result<T, Error>;
