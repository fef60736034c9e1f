#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # TM4C SysTick
//!
//! Driver for the Cortex-M4 system timer of the TM4C123GH6PM: periodic
//! expiry with a single registered callback, a blocking one-shot wait, and
//! an [`embedded_hal::delay::DelayNs`] implementation.
//!
//! The timer is usually a `static` so the `SysTick` exception vector can
//! reach it:
//!
//! ```ignore
//! use embedded_time::duration::Milliseconds;
//! use tm4c_core::Mmio;
//! use tm4c_systick::{SysTick, SysTickConfig};
//!
//! static TIMER: SysTick<Mmio> = SysTick::new(unsafe { Mmio::new() }, SysTickConfig::new());
//!
//! fn on_tick() { /* ... */ }
//!
//! TIMER.set_callback(on_tick);
//! TIMER.init(Milliseconds(500))?;
//!
//! #[cortex_m_rt::exception]
//! fn SysTick() {
//!     TIMER.handler();
//! }
//! ```

pub mod config;
pub mod delay;
pub mod systick;

pub use config::{ClockSource, SysTickConfig, DEFAULT_CLOCK_HZ, MAX_RELOAD};
pub use systick::{Callback, SysTick};

pub use tm4c_core::{Error, HalResult};
