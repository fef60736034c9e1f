#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # TM4C NVIC
//!
//! Driver for the nested vectored interrupt controller of the TM4C123GH6PM.
//!
//! Interrupt lines and system exceptions are closed enumerations, so every
//! register address and bit offset the driver computes is valid by
//! construction. Raw numbers coming from outside (a configuration table, a
//! host command) go through the checked `*_number` entry points, which
//! report [`Error::InvalidChannel`] or [`Error::PriorityOutOfRange`] before
//! touching any register.
//!
//! ```
//! use tm4c_core::sim::SimRegisterFile;
//! use tm4c_core::Priority;
//! use tm4c_nvic::{Interrupt, Nvic, NoMask};
//!
//! let regs = SimRegisterFile::new();
//! let nvic = Nvic::new(&regs, NoMask);
//! nvic.enable(Interrupt::Uart0);
//! nvic.set_priority(Interrupt::Uart0, Priority::new(3).unwrap());
//! assert!(nvic.is_enabled(Interrupt::Uart0));
//! ```

pub mod exception;
pub mod irq;
pub mod mask;
pub mod nvic;

pub use exception::{Exception, PriorityField};
pub use irq::{Interrupt, MAX_INTERRUPT};
pub use mask::{NoMask, ProcessorMask};
pub use nvic::Nvic;

#[cfg(feature = "cortex-m")]
pub use mask::CortexM;

pub use tm4c_core::{Error, HalResult, Priority};

#[cfg(test)]
mod tests;
