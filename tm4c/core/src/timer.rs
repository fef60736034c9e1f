//! Periodic timer abstraction

use embedded_time::duration::Milliseconds;

use crate::error::HalResult;

/// Periodic countdown timer that dispatches a callback on every expiry
pub trait PeriodicTimer {
    /// Arm the timer for `period` and start counting
    fn init(&self, period: Milliseconds<u32>) -> HalResult<()>;

    /// Resume counting from the current value
    fn start(&self);

    /// Freeze counting, keeping reload and current values
    fn stop(&self);

    /// Disable the timer and its interrupt entirely
    fn deinit(&self);

    /// Get current counter value
    fn counter(&self) -> u32;

    /// Replace the expiry callback
    fn set_callback(&self, callback: fn());
}
