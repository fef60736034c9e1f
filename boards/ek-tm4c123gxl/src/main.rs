#![no_std]
#![no_main]

//! EK-TM4C123GXL SysTick blinky
//!
//! Flashes the blue LED (PF2) once with the blocking delay, then toggles the
//! red LED (PF1) from the SysTick callback every 500 ms and sleeps.

use cortex_m_rt::{entry, exception};
use embedded_hal::delay::DelayNs;
use embedded_time::duration::Milliseconds;
use panic_halt as _;

use tm4c_core::{HalResult, Mmio, Priority, RegisterFile};
use tm4c_nvic::{CortexM, Exception, Nvic};
use tm4c_systick::{SysTick as Timer, SysTickConfig};

/// Run mode clock gating for the GPIO ports
const RCGCGPIO: u32 = 0x400F_E608;
const RCGCGPIO_PORTF: u32 = 1 << 5;

const GPIOF_BASE: u32 = 0x4002_5000;
const GPIOF_DIR: u32 = GPIOF_BASE + 0x400;
const GPIOF_DEN: u32 = GPIOF_BASE + 0x51C;

const LED_RED: u32 = 1 << 1;
const LED_BLUE: u32 = 1 << 2;

/// Masked data register: only the pins in `pins` are affected
const fn gpiof_data(pins: u32) -> u32 {
    GPIOF_BASE + (pins << 2)
}

static TIMER: Timer<Mmio> = Timer::new(unsafe { Mmio::new() }, SysTickConfig::new());

fn toggle_red() {
    // SAFETY: only addresses of GPIO port F are accessed.
    let gpio = unsafe { Mmio::new() };
    gpio.modify(gpiof_data(LED_RED), |value| value ^ LED_RED);
}

#[entry]
fn main() -> ! {
    // SAFETY: every address used below is a TM4C123GH6PM device register.
    let regs = unsafe { Mmio::new() };

    regs.set_bits(RCGCGPIO, RCGCGPIO_PORTF);
    while regs.read(RCGCGPIO) & RCGCGPIO_PORTF == 0 {}
    regs.set_bits(GPIOF_DIR, LED_RED | LED_BLUE);
    regs.set_bits(GPIOF_DEN, LED_RED | LED_BLUE);

    // SAFETY: as above.
    let mut delay = Timer::new(unsafe { Mmio::new() }, SysTickConfig::new());
    regs.write(gpiof_data(LED_BLUE), LED_BLUE);
    delay.delay_ms(250);
    regs.write(gpiof_data(LED_BLUE), 0);

    if let Err(error) = start_blinking(Nvic::new(regs, CortexM)) {
        panic!("{}", error);
    }

    loop {
        cortex_m::asm::wfi();
    }
}

fn start_blinking(nvic: Nvic<Mmio, CortexM>) -> HalResult<()> {
    nvic.set_exception_priority(Exception::SysTick, Priority::LOWEST)?;
    nvic.enable_exception(Exception::SysTick);

    TIMER.set_callback(toggle_red);
    TIMER.init(Milliseconds(500))
}

#[exception]
fn SysTick() {
    TIMER.handler();
}
