#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

//! # TM4C Core
//!
//! Shared building blocks for the TM4C123GH6PM interrupt controller and
//! system timer drivers: the [`RegisterFile`] seam through which every
//! driver touches hardware, the fixed register map, the 3-bit [`Priority`]
//! encoding, and the error type returned by all checked operations.
//!
//! Drivers never reach for fixed addresses on their own. They hold a
//! register file handed to them at construction, which is [`Mmio`] on the
//! target and [`sim::SimRegisterFile`] on the host.

pub mod error;
pub mod interrupt;
pub mod priority;
pub mod register;
pub mod regs;
pub mod timer;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use error::{Error, HalResult};
pub use interrupt::InterruptController;
pub use priority::Priority;
pub use register::{Mmio, RegisterFile};
pub use timer::PeriodicTimer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Emits a `defmt` trace record when the calling crate's `defmt` feature is
/// enabled, and expands to nothing otherwise.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($($arg)*);
    }};
}
