//! SysTick driver and expiry callback dispatch

use core::cell::Cell;
use core::convert::Infallible;

use critical_section::Mutex;
use embedded_time::duration::Milliseconds;
use tm4c_core::regs::{STCTRL, STCTRL_COUNT, STCTRL_ENABLE, STCURRENT, STRELOAD, ST_VALUE_MASK};
use tm4c_core::{trace, HalResult, PeriodicTimer, RegisterFile};

use crate::config::SysTickConfig;

/// Expiry callback: a plain function, so it outlives every invocation
pub type Callback = fn();

/// SysTick periodic timer
///
/// States, as seen through `STCTRL`:
///
/// - stopped: `ENABLE` clear (after [`stop`](Self::stop), [`deinit`](Self::deinit)
///   or a completed busy wait)
/// - running: `ENABLE` set (after [`init`](Self::init) or [`start`](Self::start));
///   every expiry reloads the counter and, with the interrupt enabled, enters
///   [`handler`](Self::handler)
///
/// The callback slot holds at most one callback and is replaced, never
/// queued. It is only touched inside a critical section, so the interrupt
/// handler never observes a half-written slot.
pub struct SysTick<R> {
    regs: R,
    config: SysTickConfig,
    callback: Mutex<Cell<Option<Callback>>>,
}

impl<R> SysTick<R> {
    /// Create a stopped timer with no callback
    pub const fn new(regs: R, config: SysTickConfig) -> Self {
        Self {
            regs,
            config,
            callback: Mutex::new(Cell::new(None)),
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &SysTickConfig {
        &self.config
    }

    /// Replace the expiry callback; the previous one is dropped
    pub fn set_callback(&self, callback: Callback) {
        critical_section::with(|cs| self.callback.borrow(cs).set(Some(callback)));
    }

    /// Remove the expiry callback
    pub fn clear_callback(&self) {
        critical_section::with(|cs| self.callback.borrow(cs).set(None));
    }

    /// Returns true when a callback is registered
    pub fn has_callback(&self) -> bool {
        critical_section::with(|cs| self.callback.borrow(cs).get().is_some())
    }

    /// SysTick exception entry point.
    ///
    /// Call this from the `SysTick` vector. Invokes the registered callback
    /// once, synchronously, in interrupt context. The slot is read inside a
    /// critical section and the callback runs outside it, so it may itself
    /// replace the callback. Keep callbacks short: a second expiry while
    /// interrupts are masked is folded into one pending exception.
    pub fn handler(&self) {
        let callback = critical_section::with(|cs| self.callback.borrow(cs).get());
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl<R: RegisterFile> SysTick<R> {
    /// Arm the timer for `period` and start it.
    ///
    /// Writes `ticks_per_ms * period - 1` to `STRELOAD`, clears `STCURRENT`
    /// and enables the counter with the configured clock source and
    /// interrupt. Periods that do not fit the 24-bit reload register are
    /// rejected before any register is touched.
    pub fn init(&self, period: Milliseconds<u32>) -> HalResult<()> {
        let reload = self.config.reload_for(period.0)?;
        trace!("systick: init {=u32} ms, reload {=u32}", period.0, reload);
        self.arm(reload, self.config.interrupt);
        Ok(())
    }

    /// Arm the timer for `period` and spin until it has counted to zero once.
    ///
    /// The expiry interrupt stays disabled on this path, so no callback runs.
    /// The timer is fully disabled on return. There is no way to abort the
    /// wait once started.
    pub fn start_busy_wait(&self, period: Milliseconds<u32>) -> HalResult<()> {
        let reload = self.config.reload_for(period.0)?;
        trace!("systick: busy wait {=u32} ms", period.0);
        self.busy_wait_reload(reload);
        Ok(())
    }

    /// Poll the `COUNT` flag.
    ///
    /// Reading `STCTRL` clears the flag on hardware, so a poll that returns
    /// `Ok` consumes the expiry.
    pub fn poll_expired(&self) -> nb::Result<(), Infallible> {
        if self.regs.read(STCTRL) & STCTRL_COUNT != 0 {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Resume counting from the current value
    pub fn start(&self) {
        trace!("systick: start ({=u32:#x} |= {=u32:#x})", STCTRL, STCTRL_ENABLE);
        self.regs.set_bits(STCTRL, STCTRL_ENABLE);
    }

    /// Freeze the counter; reload, current value and interrupt enable are kept
    pub fn stop(&self) {
        trace!("systick: stop ({=u32:#x} &= !{=u32:#x})", STCTRL, STCTRL_ENABLE);
        self.regs.clear_bits(STCTRL, STCTRL_ENABLE);
    }

    /// Clear `STCTRL`: counter, interrupt and clock source selection
    pub fn deinit(&self) {
        trace!("systick: deinit");
        self.regs.write(STCTRL, 0);
    }

    /// Current counter value
    pub fn counter(&self) -> u32 {
        self.regs.read(STCURRENT) & ST_VALUE_MASK
    }

    /// Programmed reload value
    pub fn reload(&self) -> u32 {
        self.regs.read(STRELOAD) & ST_VALUE_MASK
    }

    /// Returns true while the counter is enabled.
    ///
    /// Reads `STCTRL`, which clears a pending `COUNT` flag.
    pub fn is_running(&self) -> bool {
        self.regs.read(STCTRL) & STCTRL_ENABLE != 0
    }

    pub(crate) fn arm(&self, reload: u32, interrupt: bool) {
        trace!(
            "systick: arm reload {=u32}, control {=u32:#x}",
            reload,
            self.config.control(interrupt)
        );
        self.regs.write(STCTRL, 0);
        self.regs.write(STRELOAD, reload);
        self.regs.write(STCURRENT, 0);
        self.regs.write(STCTRL, self.config.control(interrupt));
    }

    pub(crate) fn busy_wait_reload(&self, reload: u32) {
        self.arm(reload, false);
        match nb::block!(self.poll_expired()) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        trace!("systick: busy wait expired, {=u32:#x} <- 0", STCTRL);
        self.regs.write(STCTRL, 0);
    }
}

impl<R: RegisterFile> PeriodicTimer for SysTick<R> {
    fn init(&self, period: Milliseconds<u32>) -> HalResult<()> {
        SysTick::init(self, period)
    }

    fn start(&self) {
        SysTick::start(self)
    }

    fn stop(&self) {
        SysTick::stop(self)
    }

    fn deinit(&self) {
        SysTick::deinit(self)
    }

    fn counter(&self) -> u32 {
        SysTick::counter(self)
    }

    fn set_callback(&self, callback: fn()) {
        SysTick::set_callback(self, callback)
    }
}
