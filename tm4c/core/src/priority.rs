//! Interrupt and exception priority encoding
//!
//! The TM4C123GH6PM implements three priority bits per 8-bit priority byte,
//! in bits 5..=7. Every priority register packs four of these bytes, so a
//! priority occupies a 3-bit field at `byte_lane * 8 + 5` inside a 32-bit
//! register.

use core::fmt;

use crate::{Error, HalResult};

/// Number of implemented priority bits
pub const PRIORITY_BITS: u32 = 3;

/// Position of the implemented bits inside a priority byte
pub const PRIORITY_SHIFT: u32 = 8 - PRIORITY_BITS;

/// Mask of a priority field before shifting it into place
pub const PRIORITY_FIELD_MASK: u32 = (1 << PRIORITY_BITS) - 1;

/// Priority level, 0 (highest) to 7 (lowest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Highest configurable priority
    pub const HIGHEST: Priority = Priority(0);

    /// Lowest configurable priority
    pub const LOWEST: Priority = Priority(PRIORITY_FIELD_MASK as u8);

    /// Create a priority level, rejecting values that do not fit the field
    pub const fn new(level: u8) -> HalResult<Self> {
        if level as u32 > PRIORITY_FIELD_MASK {
            Err(Error::PriorityOutOfRange(level))
        } else {
            Ok(Priority(level))
        }
    }

    /// Get the priority level
    pub const fn level(self) -> u8 {
        self.0
    }

    /// The 8-bit priority byte as the hardware stores it
    pub const fn to_byte(self) -> u8 {
        self.0 << PRIORITY_SHIFT
    }

    /// Decode a hardware priority byte; unimplemented low bits are ignored
    pub const fn from_byte(byte: u8) -> Self {
        Priority(byte >> PRIORITY_SHIFT)
    }

    /// Returns true when `self` preempts `other`
    pub const fn preempts(self, other: Priority) -> bool {
        self.0 < other.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Priority::new(level)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::HIGHEST
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Priority({})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Priority {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Priority({})", self.0);
    }
}

/// Mask covering the priority field that starts at bit `shift`
pub const fn field_mask(shift: u32) -> u32 {
    PRIORITY_FIELD_MASK << shift
}

/// Replace the priority field at `shift` in `register`, keeping all other bits
pub const fn encode(register: u32, shift: u32, priority: Priority) -> u32 {
    (register & !field_mask(shift)) | ((priority.0 as u32) << shift)
}

/// Extract the priority field at `shift` from `register`
pub const fn decode(register: u32, shift: u32) -> Priority {
    Priority(((register >> shift) & PRIORITY_FIELD_MASK) as u8)
}
