//! NVIC driver

use tm4c_core::priority::{decode, encode};
use tm4c_core::regs::{
    bank_register, ACTIVE_BASE, DIS_BASE, EN_BASE, PEND_BASE, SYSHNDCTRL, UNPEND_BASE,
};
use tm4c_core::{trace, Error, HalResult, InterruptController, Priority, RegisterFile};

use crate::{Exception, Interrupt, ProcessorMask};

/// Nested vectored interrupt controller
///
/// Translates an [`Interrupt`] or [`Exception`] into the register write that
/// configures it, leaving every unrelated bit untouched. The register file
/// and the processor mask are injected so the controller can run against a
/// simulated register file on the host.
#[derive(Debug)]
pub struct Nvic<R, M> {
    regs: R,
    mask: M,
}

impl<R, M> Nvic<R, M> {
    /// Create a controller over `regs`, using `mask` for PRIMASK/FAULTMASK
    pub const fn new(regs: R, mask: M) -> Self {
        Self { regs, mask }
    }

    /// Release the register file and processor mask
    pub fn free(self) -> (R, M) {
        (self.regs, self.mask)
    }
}

impl<R: RegisterFile, M: ProcessorMask> Nvic<R, M> {
    /// Enable an interrupt line.
    ///
    /// Sets bit `irq % 32` of `EN[irq / 32]`.
    pub fn enable(&self, irq: Interrupt) {
        let addr = bank_register(EN_BASE, irq.bank());
        trace!("nvic: enable irq {=u8} ({=u32:#x} |= {=u32:#x})", irq.number(), addr, irq.mask());
        self.regs.set_bits(addr, irq.mask());
    }

    /// Request that an interrupt line be disabled.
    ///
    /// Stores bit `irq % 32` to `DIS[irq / 32]`. The clear-enable registers
    /// read back the enable state, so they are written without a read.
    pub fn disable(&self, irq: Interrupt) {
        let addr = bank_register(DIS_BASE, irq.bank());
        trace!("nvic: disable irq {=u8} ({=u32:#x} <- {=u32:#x})", irq.number(), addr, irq.mask());
        self.regs.write(addr, irq.mask());
    }

    /// Returns true when the line's bit is set in its `EN` bank
    pub fn is_enabled(&self, irq: Interrupt) -> bool {
        self.regs.read(bank_register(EN_BASE, irq.bank())) & irq.mask() != 0
    }

    /// Set an interrupt line's priority.
    ///
    /// Replaces the 3-bit field at `(irq % 4) * 8 + 5` of `PRI[irq / 4]`, so a
    /// priority can be lowered as well as raised.
    pub fn set_priority(&self, irq: Interrupt, priority: Priority) {
        let addr = irq.priority_register();
        let shift = irq.priority_shift();
        trace!(
            "nvic: irq {=u8} priority {=u8} ({=u32:#x} bit {=u32})",
            irq.number(),
            priority.level(),
            addr,
            shift
        );
        self.regs.modify(addr, |value| encode(value, shift, priority));
    }

    /// Current priority of an interrupt line
    pub fn priority(&self, irq: Interrupt) -> Priority {
        decode(self.regs.read(irq.priority_register()), irq.priority_shift())
    }

    /// Force an interrupt line into the pending state
    pub fn set_pending(&self, irq: Interrupt) {
        let addr = bank_register(PEND_BASE, irq.bank());
        trace!("nvic: pend irq {=u8} ({=u32:#x} <- {=u32:#x})", irq.number(), addr, irq.mask());
        self.regs.write(addr, irq.mask());
    }

    /// Remove an interrupt line from the pending state
    pub fn clear_pending(&self, irq: Interrupt) {
        let addr = bank_register(UNPEND_BASE, irq.bank());
        trace!("nvic: unpend irq {=u8} ({=u32:#x} <- {=u32:#x})", irq.number(), addr, irq.mask());
        self.regs.write(addr, irq.mask());
    }

    /// Returns true when the interrupt line is pending
    pub fn is_pending(&self, irq: Interrupt) -> bool {
        self.regs.read(bank_register(PEND_BASE, irq.bank())) & irq.mask() != 0
    }

    /// Returns true while the line's handler is running or preempted
    pub fn is_active(&self, irq: Interrupt) -> bool {
        self.regs.read(bank_register(ACTIVE_BASE, irq.bank())) & irq.mask() != 0
    }

    /// Enable a raw interrupt number, rejecting numbers outside the vendor table
    pub fn enable_irq_number(&self, number: u8) -> HalResult<()> {
        let irq = Interrupt::try_from(number)?;
        self.enable(irq);
        Ok(())
    }

    /// Disable a raw interrupt number, rejecting numbers outside the vendor table
    pub fn disable_irq_number(&self, number: u8) -> HalResult<()> {
        let irq = Interrupt::try_from(number)?;
        self.disable(irq);
        Ok(())
    }

    /// Set the priority of a raw interrupt number to a raw level.
    ///
    /// Both values are validated before anything is written.
    pub fn set_priority_number(&self, number: u8, level: u8) -> HalResult<()> {
        let irq = Interrupt::try_from(number)?;
        let priority = Priority::new(level)?;
        self.set_priority(irq, priority);
        Ok(())
    }

    /// Enable a system exception.
    ///
    /// Unmasks interrupts and faults at the processor, then sets the handler
    /// enable bit in `SYSHNDCTRL` for the memory management, bus and usage
    /// faults. The remaining exceptions are always enabled and only get the
    /// processor-level unmask.
    pub fn enable_exception(&self, exception: Exception) {
        self.mask.enable_interrupts();
        self.mask.enable_faults();

        match exception.enable_mask() {
            Some(bit) => {
                trace!("nvic: enable exception {=u8}", exception.number());
                self.regs.set_bits(SYSHNDCTRL, bit);
            }
            None => trace!("nvic: exception {=u8} is always enabled", exception.number()),
        }
    }

    /// Disable a system exception.
    ///
    /// Masks interrupts and faults at the processor, then clears the handler
    /// enable bit in `SYSHNDCTRL` for the memory management, bus and usage
    /// faults. The processor masks stay set when this returns.
    pub fn disable_exception(&self, exception: Exception) {
        self.mask.disable_interrupts();
        self.mask.disable_faults();

        match exception.enable_mask() {
            Some(bit) => {
                trace!("nvic: disable exception {=u8}", exception.number());
                self.regs.clear_bits(SYSHNDCTRL, bit);
            }
            None => trace!("nvic: exception {=u8} cannot be disabled", exception.number()),
        }
    }

    /// Returns true when the exception's handler is enabled
    pub fn is_exception_enabled(&self, exception: Exception) -> bool {
        match exception.enable_mask() {
            Some(bit) => self.regs.read(SYSHNDCTRL) & bit != 0,
            None => true,
        }
    }

    /// Set a system exception's priority.
    ///
    /// Fails with [`Error::FixedPriority`] for reset, NMI and hard fault,
    /// whose priorities the architecture fixes.
    pub fn set_exception_priority(&self, exception: Exception, priority: Priority) -> HalResult<()> {
        let field = exception
            .priority_field()
            .ok_or(Error::FixedPriority(exception.number()))?;
        trace!(
            "nvic: exception {=u8} priority {=u8} ({=u32:#x} bit {=u32})",
            exception.number(),
            priority.level(),
            field.register,
            field.shift
        );
        self.regs
            .modify(field.register, |value| encode(value, field.shift, priority));
        Ok(())
    }

    /// Current priority of a system exception, `None` when it is fixed
    pub fn exception_priority(&self, exception: Exception) -> Option<Priority> {
        exception
            .priority_field()
            .map(|field| decode(self.regs.read(field.register), field.shift))
    }
}

impl<R: RegisterFile, M: ProcessorMask> InterruptController for Nvic<R, M> {
    type Irq = Interrupt;

    fn enable_interrupt(&self, irq: Interrupt) {
        self.enable(irq)
    }

    fn disable_interrupt(&self, irq: Interrupt) {
        self.disable(irq)
    }

    fn set_priority(&self, irq: Interrupt, priority: Priority) {
        Nvic::set_priority(self, irq, priority)
    }

    fn is_pending(&self, irq: Interrupt) -> bool {
        Nvic::is_pending(self, irq)
    }

    fn clear_pending(&self, irq: Interrupt) {
        Nvic::clear_pending(self, irq)
    }
}
