use core::cell::RefCell;

use tm4c_core::regs::{
    bank_register, DIS_BASE, EN_BASE, PEND_BASE, PRI_BASE, UNPEND_BASE, SYSHNDCTRL, SYSHNDCTRL_BUS, SYSHNDCTRL_MEM,
    SYSHNDCTRL_USAGE, SYSPRI1, SYSPRI2, SYSPRI3,
};
use tm4c_core::sim::{SimRegisterFile, Write};

use crate::{Error, Exception, Interrupt, Nvic, Priority, ProcessorMask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskOp {
    EnableInterrupts,
    DisableInterrupts,
    EnableFaults,
    DisableFaults,
}

#[derive(Default)]
struct RecordingMask {
    ops: RefCell<Vec<MaskOp>>,
}

impl ProcessorMask for RecordingMask {
    fn enable_interrupts(&self) {
        self.ops.borrow_mut().push(MaskOp::EnableInterrupts);
    }

    fn disable_interrupts(&self) {
        self.ops.borrow_mut().push(MaskOp::DisableInterrupts);
    }

    fn enable_faults(&self) {
        self.ops.borrow_mut().push(MaskOp::EnableFaults);
    }

    fn disable_faults(&self) {
        self.ops.borrow_mut().push(MaskOp::DisableFaults);
    }
}

fn priority(level: u8) -> Priority {
    Priority::new(level).unwrap()
}

#[test]
fn enable_touches_one_bit_in_one_bank() {
    for &irq in Interrupt::ALL {
        let regs = SimRegisterFile::new();
        let nvic = Nvic::new(&regs, RecordingMask::default());

        nvic.enable(irq);

        let bank = irq.number() as usize / 32;
        let bit = irq.number() as u32 % 32;
        assert_eq!(
            regs.writes().as_slice(),
            &[Write { addr: bank_register(EN_BASE, bank), value: 1 << bit }],
            "irq {}",
            irq.number()
        );
    }
}

#[test]
fn enable_preserves_other_lines() {
    let regs = SimRegisterFile::new();
    regs.poke(bank_register(EN_BASE, 0), 0x8000_0001);
    let nvic = Nvic::new(&regs, RecordingMask::default());

    nvic.enable(Interrupt::GpioPortF);

    assert_eq!(regs.peek(bank_register(EN_BASE, 0)), 0xC000_0001);
    for bank in 1..5 {
        assert_eq!(regs.peek(bank_register(EN_BASE, bank)), 0);
    }
    assert!(nvic.is_enabled(Interrupt::GpioPortF));
    assert!(!nvic.is_enabled(Interrupt::GpioPortE));
}

#[test]
fn disable_writes_companion_bank_without_reading() {
    for &irq in Interrupt::ALL {
        let regs = SimRegisterFile::new();
        let nvic = Nvic::new(&regs, RecordingMask::default());

        nvic.disable(irq);

        let addr = bank_register(DIS_BASE, irq.number() as usize / 32);
        assert_eq!(
            regs.writes().as_slice(),
            &[Write { addr, value: 1 << (irq.number() % 32) }]
        );
        assert_eq!(regs.read_count(addr), 0);
    }
}

#[test]
fn disable_does_not_clear_enable_bank() {
    let regs = SimRegisterFile::new();
    let nvic = Nvic::new(&regs, RecordingMask::default());

    nvic.enable(Interrupt::Can0);
    nvic.disable(Interrupt::Can0);

    assert_eq!(regs.peek(bank_register(EN_BASE, 1)), Interrupt::Can0.mask());
    assert_eq!(regs.peek(bank_register(DIS_BASE, 1)), Interrupt::Can0.mask());
}

#[test]
fn set_priority_on_zeroed_register() {
    for &irq in Interrupt::ALL {
        for level in 0..=7u8 {
            let regs = SimRegisterFile::new();
            let nvic = Nvic::new(&regs, RecordingMask::default());

            nvic.set_priority(irq, priority(level));

            let offset = irq.number() as usize / 4;
            let bit_pos = (irq.number() as u32 % 4) * 8 + 5;
            let addr = bank_register(PRI_BASE, offset);
            assert_eq!(regs.peek(addr), (level as u32) << bit_pos);
            assert_eq!(regs.writes().len(), 1);
            assert_eq!(nvic.priority(irq), priority(level));
        }
    }
}

#[test]
fn set_priority_can_lower_a_raised_field() {
    let regs = SimRegisterFile::new();
    let nvic = Nvic::new(&regs, RecordingMask::default());

    nvic.set_priority(Interrupt::Uart1, Priority::LOWEST);
    nvic.set_priority(Interrupt::Uart1, priority(2));

    assert_eq!(regs.peek(Interrupt::Uart1.priority_register()), 2 << 21);
    assert_eq!(nvic.priority(Interrupt::Uart1), priority(2));
}

#[test]
fn set_priority_keeps_neighbouring_lanes() {
    let regs = SimRegisterFile::new();
    let addr = Interrupt::Uart1.priority_register();
    regs.poke(addr, 0xFFFF_FFFF);
    let nvic = Nvic::new(&regs, RecordingMask::default());

    nvic.set_priority(Interrupt::Uart1, Priority::HIGHEST);

    assert_eq!(regs.peek(addr), 0xFF1F_FFFF);
}

#[test]
fn configurable_faults_toggle_only_their_bit() {
    let faults = [
        (Exception::MemManage, SYSHNDCTRL_MEM),
        (Exception::BusFault, SYSHNDCTRL_BUS),
        (Exception::UsageFault, SYSHNDCTRL_USAGE),
    ];
    let all = SYSHNDCTRL_MEM | SYSHNDCTRL_BUS | SYSHNDCTRL_USAGE;

    for (exception, bit) in faults {
        let regs = SimRegisterFile::new();
        let nvic = Nvic::new(&regs, RecordingMask::default());

        nvic.enable_exception(exception);
        assert_eq!(regs.peek(SYSHNDCTRL), bit);
        assert!(nvic.is_exception_enabled(exception));

        regs.poke(SYSHNDCTRL, all | 0x0000_0001);
        nvic.disable_exception(exception);
        assert_eq!(regs.peek(SYSHNDCTRL), (all & !bit) | 0x0000_0001);
        assert!(!nvic.is_exception_enabled(exception));
    }
}

#[test]
fn fixed_exceptions_leave_handler_control_alone() {
    for exception in Exception::ALL {
        if exception.is_configurable() {
            continue;
        }
        let regs = SimRegisterFile::new();
        regs.poke(SYSHNDCTRL, 0x0007_0000);
        let nvic = Nvic::new(&regs, RecordingMask::default());

        nvic.enable_exception(exception);
        nvic.disable_exception(exception);

        assert_eq!(regs.peek(SYSHNDCTRL), 0x0007_0000);
        assert!(regs.writes().is_empty());
        assert!(nvic.is_exception_enabled(exception));
    }
}

#[test]
fn exception_enable_unmasks_processor_first() {
    let regs = SimRegisterFile::new();
    let mask = RecordingMask::default();
    let nvic = Nvic::new(&regs, &mask);

    nvic.enable_exception(Exception::SysTick);
    nvic.disable_exception(Exception::BusFault);

    assert_eq!(
        mask.ops.borrow().as_slice(),
        &[
            MaskOp::EnableInterrupts,
            MaskOp::EnableFaults,
            MaskOp::DisableInterrupts,
            MaskOp::DisableFaults,
        ]
    );
}

#[test]
fn exception_priority_fields() {
    let expected = [
        (Exception::MemManage, SYSPRI1, 5),
        (Exception::BusFault, SYSPRI1, 13),
        (Exception::UsageFault, SYSPRI1, 21),
        (Exception::SvCall, SYSPRI2, 29),
        (Exception::DebugMonitor, SYSPRI3, 5),
        (Exception::PendSv, SYSPRI3, 21),
        (Exception::SysTick, SYSPRI3, 29),
    ];

    for (exception, register, shift) in expected {
        let regs = SimRegisterFile::new();
        regs.poke(register, 0xFFFF_FFFF);
        let nvic = Nvic::new(&regs, RecordingMask::default());

        nvic.set_exception_priority(exception, priority(1)).unwrap();

        assert_eq!(regs.peek(register), !(0b110 << shift));
        assert_eq!(nvic.exception_priority(exception), Some(priority(1)));
    }
}

#[test]
fn fixed_exception_priority_is_an_error() {
    for exception in [Exception::Reset, Exception::Nmi, Exception::HardFault] {
        let regs = SimRegisterFile::new();
        let nvic = Nvic::new(&regs, RecordingMask::default());

        assert_eq!(
            nvic.set_exception_priority(exception, Priority::HIGHEST),
            Err(Error::FixedPriority(exception.number()))
        );
        assert!(regs.writes().is_empty());
        assert_eq!(nvic.exception_priority(exception), None);
    }
}

#[test]
fn raw_numbers_are_checked_before_writing() {
    let regs = SimRegisterFile::new();
    let nvic = Nvic::new(&regs, RecordingMask::default());

    assert_eq!(nvic.enable_irq_number(27), Err(Error::InvalidChannel(27)));
    assert_eq!(nvic.disable_irq_number(139), Err(Error::InvalidChannel(139)));
    assert_eq!(nvic.set_priority_number(72, 1), Err(Error::InvalidChannel(72)));
    assert_eq!(nvic.set_priority_number(5, 8), Err(Error::PriorityOutOfRange(8)));
    assert!(regs.writes().is_empty());

    nvic.enable_irq_number(30).unwrap();
    nvic.set_priority_number(30, 4).unwrap();
    assert!(nvic.is_enabled(Interrupt::GpioPortF));
    assert_eq!(nvic.priority(Interrupt::GpioPortF), priority(4));
}

#[test]
fn pending_state_is_stored_without_reading() {
    for &irq in Interrupt::ALL {
        let regs = SimRegisterFile::new();
        let nvic = Nvic::new(&regs, RecordingMask::default());

        nvic.set_pending(irq);
        nvic.clear_pending(irq);

        let pend = bank_register(PEND_BASE, irq.bank());
        let unpend = bank_register(UNPEND_BASE, irq.bank());
        assert_eq!(
            regs.writes().as_slice(),
            &[
                Write { addr: pend, value: irq.mask() },
                Write { addr: unpend, value: irq.mask() },
            ]
        );
        assert_eq!(regs.read_count(pend), 0);
        assert_eq!(regs.read_count(unpend), 0);
    }
}
