//! Register file abstraction
//!
//! All hardware access in the drivers goes through [`RegisterFile`]. Memory
//! mapped registers are shared, interior-mutable state, so the trait takes
//! `&self`; this lets a driver live in a `static` and be reached from both
//! foreground code and interrupt handlers.

/// A set of 32-bit registers addressed by their physical address
pub trait RegisterFile {
    /// Load the register at `addr`
    fn read(&self, addr: u32) -> u32;

    /// Store `value` to the register at `addr`
    fn write(&self, addr: u32, value: u32);

    /// Read-modify-write the register at `addr`
    fn modify<F>(&self, addr: u32, f: F)
    where
        F: FnOnce(u32) -> u32,
        Self: Sized,
    {
        let value = self.read(addr);
        self.write(addr, f(value));
    }

    /// Set the bits of `mask`, leaving all other bits unchanged
    fn set_bits(&self, addr: u32, mask: u32) {
        let value = self.read(addr);
        self.write(addr, value | mask);
    }

    /// Clear the bits of `mask`, leaving all other bits unchanged
    fn clear_bits(&self, addr: u32, mask: u32) {
        let value = self.read(addr);
        self.write(addr, value & !mask);
    }
}

impl<R: RegisterFile + ?Sized> RegisterFile for &R {
    fn read(&self, addr: u32) -> u32 {
        (**self).read(addr)
    }

    fn write(&self, addr: u32, value: u32) {
        (**self).write(addr, value)
    }
}

/// Volatile access to the memory-mapped registers of the running chip
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create the memory-mapped register file.
    ///
    /// # Safety
    ///
    /// Every address later passed to [`RegisterFile::read`] or
    /// [`RegisterFile::write`] must be a valid, aligned 32-bit device
    /// register of the running chip. Drivers sharing this register file must
    /// not be used to race on the same register without their own
    /// synchronisation.
    #[allow(unsafe_code)]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[allow(unsafe_code)]
impl RegisterFile for Mmio {
    #[inline]
    fn read(&self, addr: u32) -> u32 {
        // SAFETY: `Mmio::new` requires all addresses to be device registers.
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    #[inline]
    fn write(&self, addr: u32, value: u32) {
        // SAFETY: `Mmio::new` requires all addresses to be device registers.
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}
