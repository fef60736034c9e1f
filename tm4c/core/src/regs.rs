//! TM4C123GH6PM system control space register map
//!
//! Addresses come from the device data sheet (section 3.2, "Cortex-M4
//! Peripherals"). Banked registers are addressed with [`bank_register`].

/// Number of 32-interrupt register banks (interrupts 0..=138)
pub const BANKS: usize = 5;

/// Interrupt set-enable banks `EN0..EN4`
pub const EN_BASE: u32 = 0xE000_E100;
/// Interrupt clear-enable banks `DIS0..DIS4` (write one to disable)
pub const DIS_BASE: u32 = 0xE000_E180;
/// Interrupt set-pending banks `PEND0..PEND4`
pub const PEND_BASE: u32 = 0xE000_E200;
/// Interrupt clear-pending banks `UNPEND0..UNPEND4` (write one to clear)
pub const UNPEND_BASE: u32 = 0xE000_E280;
/// Interrupt active-bit banks `ACTIVE0..ACTIVE4` (read only)
pub const ACTIVE_BASE: u32 = 0xE000_E300;
/// Interrupt priority registers `PRI0..PRI34`, four interrupts each
pub const PRI_BASE: u32 = 0xE000_E400;

/// System handler control and state
pub const SYSHNDCTRL: u32 = 0xE000_ED24;
/// Memory management fault handler enable
pub const SYSHNDCTRL_MEM: u32 = 1 << 16;
/// Bus fault handler enable
pub const SYSHNDCTRL_BUS: u32 = 1 << 17;
/// Usage fault handler enable
pub const SYSHNDCTRL_USAGE: u32 = 1 << 18;

/// System handler priority 1: memory management, bus and usage faults
pub const SYSPRI1: u32 = 0xE000_ED18;
/// System handler priority 2: SVCall
pub const SYSPRI2: u32 = 0xE000_ED1C;
/// System handler priority 3: debug monitor, PendSV and SysTick
pub const SYSPRI3: u32 = 0xE000_ED20;

/// SysTick control and status
pub const STCTRL: u32 = 0xE000_E010;
/// Counter enable
pub const STCTRL_ENABLE: u32 = 1 << 0;
/// Raise the SysTick exception when the counter reaches zero
pub const STCTRL_INTEN: u32 = 1 << 1;
/// Clock source: 1 = system clock, 0 = PIOSC divided by four
pub const STCTRL_CLK_SRC: u32 = 1 << 2;
/// Counted to zero since the last read (cleared by reading `STCTRL`)
pub const STCTRL_COUNT: u32 = 1 << 16;
/// SysTick reload value
pub const STRELOAD: u32 = 0xE000_E014;
/// SysTick current value (any write clears it)
pub const STCURRENT: u32 = 0xE000_E018;
/// Width mask of the 24-bit reload and current value fields
pub const ST_VALUE_MASK: u32 = 0x00FF_FFFF;

/// Address of register `bank` in a bank starting at `base`
pub const fn bank_register(base: u32, bank: usize) -> u32 {
    base + 4 * bank as u32
}
