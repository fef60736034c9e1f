//! Simulated register file for host-side tests
//!
//! [`SimRegisterFile`] stores register values in a fixed-capacity map,
//! records every store in a write log, and can emulate the two read side
//! effects the drivers depend on: a status flag that appears after a number
//! of polls, and a flag that clears itself when read.

use core::cell::RefCell;

use heapless::{FnvIndexMap, Vec};

use crate::RegisterFile;

/// Maximum number of distinct registers a simulation can hold
pub const REGISTER_CAPACITY: usize = 128;

/// Maximum number of writes kept in the log
pub const LOG_CAPACITY: usize = 512;

const EFFECT_CAPACITY: usize = 8;

/// One store recorded by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub addr: u32,
    pub value: u32,
}

#[derive(Debug, Clone, Copy)]
struct SetAfterReads {
    addr: u32,
    mask: u32,
    remaining: u32,
}

#[derive(Debug, Default)]
struct SimState {
    values: FnvIndexMap<u32, u32, REGISTER_CAPACITY>,
    reads: FnvIndexMap<u32, u32, REGISTER_CAPACITY>,
    log: Vec<Write, LOG_CAPACITY>,
    set_after: Vec<SetAfterReads, EFFECT_CAPACITY>,
    clear_on_read: Vec<(u32, u32), EFFECT_CAPACITY>,
}

impl SimState {
    fn store(&mut self, addr: u32, value: u32) {
        if self.values.insert(addr, value).is_err() {
            panic!("simulated register file is full ({} registers)", REGISTER_CAPACITY);
        }
    }

    fn load(&self, addr: u32) -> u32 {
        self.values.get(&addr).copied().unwrap_or(0)
    }
}

/// Register file backed by memory, for tests and benchmarks
///
/// Unwritten registers read as zero.
#[derive(Debug, Default)]
pub struct SimRegisterFile {
    state: RefCell<SimState>,
}

impl SimRegisterFile {
    /// Create an empty simulation where every register reads as zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `addr` without triggering read side effects or counting a read
    pub fn peek(&self, addr: u32) -> u32 {
        self.state.borrow().load(addr)
    }

    /// Set `addr` without recording a write
    pub fn poke(&self, addr: u32, value: u32) {
        self.state.borrow_mut().store(addr, value);
    }

    /// Every write since creation or the last [`clear_log`](Self::clear_log)
    pub fn writes(&self) -> Vec<Write, LOG_CAPACITY> {
        self.state.borrow().log.clone()
    }

    /// Values written to `addr`, oldest first
    pub fn writes_to(&self, addr: u32) -> Vec<u32, LOG_CAPACITY> {
        self.state
            .borrow()
            .log
            .iter()
            .filter(|write| write.addr == addr)
            .map(|write| write.value)
            .collect()
    }

    /// Forget recorded writes, keeping register values
    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    /// Number of reads of `addr` made through [`RegisterFile::read`]
    pub fn read_count(&self, addr: u32) -> u32 {
        self.state.borrow().reads.get(&addr).copied().unwrap_or(0)
    }

    /// Make the bits of `mask` appear in `addr` on the `reads`-th read from now.
    ///
    /// Several pending effects on the same register count independently.
    pub fn set_after_reads(&self, addr: u32, mask: u32, reads: u32) {
        let effect = SetAfterReads {
            addr,
            mask,
            remaining: reads.max(1),
        };
        if self.state.borrow_mut().set_after.push(effect).is_err() {
            panic!("too many pending read effects");
        }
    }

    /// Clear the bits of `mask` in `addr` after every read that returned them
    pub fn clear_on_read(&self, addr: u32, mask: u32) {
        if self.state.borrow_mut().clear_on_read.push((addr, mask)).is_err() {
            panic!("too many clear-on-read effects");
        }
    }
}

impl RegisterFile for SimRegisterFile {
    fn read(&self, addr: u32) -> u32 {
        let mut state = self.state.borrow_mut();

        let count = state.reads.get(&addr).copied().unwrap_or(0) + 1;
        if state.reads.insert(addr, count).is_err() {
            panic!("simulated register file is full ({} registers)", REGISTER_CAPACITY);
        }

        let mut value = state.load(addr);
        let mut fired = 0;
        for effect in state.set_after.iter_mut().filter(|e| e.addr == addr) {
            effect.remaining -= 1;
            if effect.remaining == 0 {
                fired |= effect.mask;
            }
        }
        state.set_after.retain(|e| e.remaining > 0);
        value |= fired;

        let cleared = state
            .clear_on_read
            .iter()
            .filter(|(a, _)| *a == addr)
            .fold(0, |acc, (_, mask)| acc | mask);
        state.store(addr, value & !cleared);

        value
    }

    fn write(&self, addr: u32, value: u32) {
        let mut state = self.state.borrow_mut();
        state.store(addr, value);
        if state.log.push(Write { addr, value }).is_err() {
            panic!("write log is full ({} writes), call clear_log()", LOG_CAPACITY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_registers_read_zero() {
        let sim = SimRegisterFile::new();
        assert_eq!(sim.read(0x4000_0000), 0);
        assert_eq!(sim.read_count(0x4000_0000), 1);
        assert!(sim.writes().is_empty());
    }

    #[test]
    fn test_set_bits_logs_one_write() {
        let sim = SimRegisterFile::new();
        sim.poke(0x10, 0b1000);
        sim.set_bits(0x10, 0b0001);

        assert_eq!(sim.peek(0x10), 0b1001);
        assert_eq!(sim.writes().as_slice(), &[Write { addr: 0x10, value: 0b1001 }]);
    }

    #[test]
    fn test_flag_appears_then_clears_on_read() {
        let sim = SimRegisterFile::new();
        sim.set_after_reads(0x20, 1 << 16, 3);
        sim.clear_on_read(0x20, 1 << 16);

        assert_eq!(sim.read(0x20), 0);
        assert_eq!(sim.read(0x20), 0);
        assert_eq!(sim.read(0x20), 1 << 16);
        assert_eq!(sim.read(0x20), 0);
    }

    #[test]
    fn test_peek_has_no_side_effects() {
        let sim = SimRegisterFile::new();
        sim.set_after_reads(0x20, 1, 1);
        assert_eq!(sim.peek(0x20), 0);
        assert_eq!(sim.read_count(0x20), 0);
        assert_eq!(sim.read(0x20), 1);
    }
}
