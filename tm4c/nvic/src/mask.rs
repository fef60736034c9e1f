//! Processor-level interrupt and fault masking
//!
//! `PRIMASK` gates every configurable-priority exception and interrupt;
//! `FAULTMASK` additionally gates the configurable faults. Both live in the
//! core, not in the register file, so the controller takes them through a
//! separate seam.

/// Access to the processor's `PRIMASK` and `FAULTMASK` bits
pub trait ProcessorMask {
    /// Clear `PRIMASK` (`cpsie i`)
    fn enable_interrupts(&self);

    /// Set `PRIMASK` (`cpsid i`)
    fn disable_interrupts(&self);

    /// Clear `FAULTMASK` (`cpsie f`)
    fn enable_faults(&self);

    /// Set `FAULTMASK` (`cpsid f`)
    fn disable_faults(&self);
}

impl<M: ProcessorMask + ?Sized> ProcessorMask for &M {
    fn enable_interrupts(&self) {
        (**self).enable_interrupts()
    }

    fn disable_interrupts(&self) {
        (**self).disable_interrupts()
    }

    fn enable_faults(&self) {
        (**self).enable_faults()
    }

    fn disable_faults(&self) {
        (**self).disable_faults()
    }
}

/// Processor mask that leaves PRIMASK and FAULTMASK alone
///
/// For callers that manage the processor masks themselves, and for host builds.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMask;

impl ProcessorMask for NoMask {
    fn enable_interrupts(&self) {}

    fn disable_interrupts(&self) {}

    fn enable_faults(&self) {}

    fn disable_faults(&self) {}
}

/// Mask bits of the running Cortex-M core
#[cfg(feature = "cortex-m")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CortexM;

#[cfg(feature = "cortex-m")]
impl ProcessorMask for CortexM {
    fn enable_interrupts(&self) {
        // SAFETY: unmasking is what the caller asked for; code relying on
        // PRIMASK for mutual exclusion must not call into the controller.
        unsafe { cortex_m::interrupt::enable() }
    }

    fn disable_interrupts(&self) {
        cortex_m::interrupt::disable()
    }

    fn enable_faults(&self) {
        #[cfg(target_arch = "arm")]
        // SAFETY: `cpsie f` only clears FAULTMASK; no memory is accessed.
        unsafe {
            core::arch::asm!("cpsie f", options(nostack, preserves_flags));
        }
    }

    fn disable_faults(&self) {
        #[cfg(target_arch = "arm")]
        // SAFETY: `cpsid f` only sets FAULTMASK; no memory is accessed.
        unsafe {
            core::arch::asm!("cpsid f", options(nostack, preserves_flags));
        }
    }
}
