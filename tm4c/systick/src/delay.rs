//! Blocking delays on top of the busy-wait path
//!
//! A delay takes over the counter: it overwrites the reload value and leaves
//! the timer disabled, so do not mix it with a running periodic timer.

use embedded_hal::delay::DelayNs;
use tm4c_core::RegisterFile;

use crate::config::MAX_RELOAD;
use crate::SysTick;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

impl<R: RegisterFile> SysTick<R> {
    /// Busy-wait for `ticks` counter cycles, in spans the reload register can hold
    pub fn delay_ticks(&self, mut ticks: u64) {
        let span_max = MAX_RELOAD as u64 + 1;
        while ticks > 0 {
            let span = ticks.min(span_max);
            // A reload of zero never expires; one tick of overshoot is fine.
            let reload = (span as u32 - 1).max(1);
            self.busy_wait_reload(reload);
            ticks -= span;
        }
    }

    fn ticks_for(&self, amount: u32, per_second: u64) -> u64 {
        let clock = self.config().clock_hz as u64;
        (amount as u64 * clock).div_ceil(per_second)
    }
}

impl<R: RegisterFile> DelayNs for SysTick<R> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ticks(self.ticks_for(ns, NANOS_PER_SECOND));
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ticks(self.ticks_for(us, 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay_ticks(self.ticks_for(ms, 1_000));
    }
}
