//! SysTick configuration

use embedded_time::rate::Hertz;
use tm4c_core::regs::{STCTRL_CLK_SRC, STCTRL_ENABLE, STCTRL_INTEN, ST_VALUE_MASK};
use tm4c_core::{Error, HalResult};

/// Largest value the 24-bit reload register holds
pub const MAX_RELOAD: u32 = ST_VALUE_MASK;

/// Nominal system clock after reset (PIOSC)
pub const DEFAULT_CLOCK_HZ: u32 = 16_000_000;

/// Clock feeding the SysTick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Precision internal oscillator divided by four
    PioscDiv4,
    /// System clock
    System,
}

/// SysTick configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysTickConfig {
    /// Frequency of the selected clock source in hertz
    pub clock_hz: u32,
    pub source: ClockSource,
    /// Raise the SysTick exception on every expiry
    pub interrupt: bool,
}

impl SysTickConfig {
    /// 16 MHz system clock with the expiry interrupt enabled
    pub const fn new() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            source: ClockSource::System,
            interrupt: true,
        }
    }

    pub const fn with_clock(mut self, clock: Hertz<u32>) -> Self {
        self.clock_hz = clock.0;
        self
    }

    /// Frequency of the selected clock source
    pub const fn clock(&self) -> Hertz<u32> {
        Hertz(self.clock_hz)
    }

    pub const fn with_source(mut self, source: ClockSource) -> Self {
        self.source = source;
        self
    }

    pub const fn with_interrupt(mut self, interrupt: bool) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Counter ticks per millisecond at the configured clock
    pub const fn ticks_per_ms(&self) -> u32 {
        self.clock_hz / 1000
    }

    /// Reload value for a period of `ms` milliseconds: `ticks_per_ms * ms - 1`.
    ///
    /// Zero-length periods and periods that overflow the 24-bit reload
    /// register are rejected instead of wrapping.
    pub fn reload_for(&self, ms: u32) -> HalResult<u32> {
        self.ticks_per_ms()
            .checked_mul(ms)
            .and_then(|ticks| ticks.checked_sub(1))
            .filter(|reload| *reload <= MAX_RELOAD)
            .ok_or(Error::DurationOutOfRange(ms))
    }

    /// Longest period in milliseconds that fits the reload register
    pub const fn max_period_ms(&self) -> u32 {
        match self.ticks_per_ms() {
            0 => 0,
            per_ms => (MAX_RELOAD + 1) / per_ms,
        }
    }

    /// `STCTRL` value that starts the counter with this configuration
    pub(crate) const fn control(&self, interrupt: bool) -> u32 {
        let mut bits = STCTRL_ENABLE;
        if interrupt {
            bits |= STCTRL_INTEN;
        }
        if let ClockSource::System = self.source {
            bits |= STCTRL_CLK_SRC;
        }
        bits
    }
}

impl Default for SysTickConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SysTickConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SysTickConfig {{ clock: {} Hz, source: {}, interrupt: {} }}",
            self.clock_hz,
            self.source,
            self.interrupt
        );
    }
}
