//! Interrupt controller abstraction

use crate::Priority;

/// Interrupt controller abstraction
///
/// `Irq` is a closed type naming the controller's interrupt lines, so an
/// implementation never has to handle an out-of-range line number.
pub trait InterruptController {
    /// Interrupt line identifier
    type Irq: Copy;

    /// Enable interrupt
    fn enable_interrupt(&self, irq: Self::Irq);

    /// Disable interrupt
    fn disable_interrupt(&self, irq: Self::Irq);

    /// Set interrupt priority (0 = highest)
    fn set_priority(&self, irq: Self::Irq, priority: Priority);

    /// Check if interrupt is pending
    fn is_pending(&self, irq: Self::Irq) -> bool;

    /// Clear pending interrupt
    fn clear_pending(&self, irq: Self::Irq);
}
