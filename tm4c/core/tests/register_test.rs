//! Register file tests for tm4c-core

use core::cell::Cell;

use tm4c_core::RegisterFile;

/// A register file with a single register, ignoring the address
#[derive(Default)]
struct OneRegister {
    value: Cell<u32>,
    writes: Cell<u32>,
}

impl RegisterFile for OneRegister {
    fn read(&self, _addr: u32) -> u32 {
        self.value.get()
    }

    fn write(&self, _addr: u32, value: u32) {
        self.value.set(value);
        self.writes.set(self.writes.get() + 1);
    }
}

#[test]
fn test_set_and_clear_bits() {
    let reg = OneRegister::default();
    reg.set_bits(0, 0b1010);
    reg.set_bits(0, 0b0001);
    reg.clear_bits(0, 0b1000);
    assert_eq!(reg.value.get(), 0b0011);
    assert_eq!(reg.writes.get(), 3);
}

#[test]
fn test_modify() {
    let reg = OneRegister::default();
    reg.write(0, 0xFF00);
    reg.modify(0, |v| (v >> 8) | 0x1_0000);
    assert_eq!(reg.value.get(), 0x1_00FF);
}

#[test]
fn test_borrowed_register_file() {
    fn touch<R: RegisterFile>(regs: R) {
        regs.set_bits(0, 1 << 31);
    }

    let reg = OneRegister::default();
    touch(&reg);
    touch(&reg);
    assert_eq!(reg.value.get(), 1 << 31);
    assert_eq!(reg.writes.get(), 2);
}
