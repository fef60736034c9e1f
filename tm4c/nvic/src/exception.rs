//! Cortex-M4 system exceptions

use tm4c_core::regs::{
    SYSHNDCTRL_BUS, SYSHNDCTRL_MEM, SYSHNDCTRL_USAGE, SYSPRI1, SYSPRI2, SYSPRI3,
};

/// Processor system exception
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Exception {
    Reset,
    Nmi,
    HardFault,
    MemManage,
    BusFault,
    UsageFault,
    SvCall,
    DebugMonitor,
    PendSv,
    SysTick,
}

/// Location of a system exception's priority field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PriorityField {
    /// Address of the `SYSPRIn` register
    pub register: u32,
    /// Position of the 3-bit field inside the register
    pub shift: u32,
}

impl Exception {
    /// All system exceptions in vector order
    pub const ALL: [Exception; 10] = [
        Exception::Reset,
        Exception::Nmi,
        Exception::HardFault,
        Exception::MemManage,
        Exception::BusFault,
        Exception::UsageFault,
        Exception::SvCall,
        Exception::DebugMonitor,
        Exception::PendSv,
        Exception::SysTick,
    ];

    /// Exception number (vector table index)
    pub const fn number(self) -> u8 {
        match self {
            Exception::Reset => 1,
            Exception::Nmi => 2,
            Exception::HardFault => 3,
            Exception::MemManage => 4,
            Exception::BusFault => 5,
            Exception::UsageFault => 6,
            Exception::SvCall => 11,
            Exception::DebugMonitor => 12,
            Exception::PendSv => 14,
            Exception::SysTick => 15,
        }
    }

    /// Handler enable bit in `SYSHNDCTRL`.
    ///
    /// Only the three configurable faults have one; every other exception is
    /// always enabled by the hardware.
    pub const fn enable_mask(self) -> Option<u32> {
        match self {
            Exception::MemManage => Some(SYSHNDCTRL_MEM),
            Exception::BusFault => Some(SYSHNDCTRL_BUS),
            Exception::UsageFault => Some(SYSHNDCTRL_USAGE),
            Exception::Reset
            | Exception::Nmi
            | Exception::HardFault
            | Exception::SvCall
            | Exception::DebugMonitor
            | Exception::PendSv
            | Exception::SysTick => None,
        }
    }

    /// Priority field of the exception, `None` when the priority is fixed
    ///
    /// The fields are packed unevenly across `SYSPRI1..SYSPRI3`, so the
    /// table is spelled out rather than computed.
    pub const fn priority_field(self) -> Option<PriorityField> {
        let (register, shift) = match self {
            Exception::MemManage => (SYSPRI1, 5),
            Exception::BusFault => (SYSPRI1, 13),
            Exception::UsageFault => (SYSPRI1, 21),
            Exception::SvCall => (SYSPRI2, 29),
            Exception::DebugMonitor => (SYSPRI3, 5),
            Exception::PendSv => (SYSPRI3, 21),
            Exception::SysTick => (SYSPRI3, 29),
            Exception::Reset | Exception::Nmi | Exception::HardFault => return None,
        };
        Some(PriorityField { register, shift })
    }

    /// Returns true for exceptions with a `SYSHNDCTRL` enable bit
    pub const fn is_configurable(self) -> bool {
        self.enable_mask().is_some()
    }
}
