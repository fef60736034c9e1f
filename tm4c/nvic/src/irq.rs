//! TM4C123GH6PM interrupt lines
//!
//! Numbers follow the vendor vector table (interrupt `n` is vector `n + 16`).
//! The vendor leaves gaps in the table; raw numbers in a gap are rejected by
//! [`Interrupt::try_from`].

use tm4c_core::regs::{bank_register, PRI_BASE};
use tm4c_core::Error;

/// Highest interrupt number implemented on this device
pub const MAX_INTERRUPT: u8 = 138;

macro_rules! interrupts {
    ($( $(#[$meta:meta])* $name:ident = $num:literal, )+) => {
        /// Interrupt line of the TM4C123GH6PM
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(u8)]
        pub enum Interrupt {
            $( $(#[$meta])* $name = $num, )+
        }

        impl Interrupt {
            /// Every implemented interrupt line in ascending order
            pub const ALL: &'static [Interrupt] = &[ $( Interrupt::$name, )+ ];
        }

        impl TryFrom<u8> for Interrupt {
            type Error = Error;

            fn try_from(number: u8) -> Result<Self, Self::Error> {
                match number {
                    $( $num => Ok(Interrupt::$name), )+
                    _ => Err(Error::InvalidChannel(number)),
                }
            }
        }
    };
}

interrupts! {
    GpioPortA = 0,
    GpioPortB = 1,
    GpioPortC = 2,
    GpioPortD = 3,
    GpioPortE = 4,
    Uart0 = 5,
    Uart1 = 6,
    Ssi0 = 7,
    I2c0 = 8,
    Pwm0Fault = 9,
    Pwm0Gen0 = 10,
    Pwm0Gen1 = 11,
    Pwm0Gen2 = 12,
    Qei0 = 13,
    Adc0Seq0 = 14,
    Adc0Seq1 = 15,
    Adc0Seq2 = 16,
    Adc0Seq3 = 17,
    /// Watchdog timers 0 and 1
    Watchdog = 18,
    Timer0A = 19,
    Timer0B = 20,
    Timer1A = 21,
    Timer1B = 22,
    Timer2A = 23,
    Timer2B = 24,
    Comparator0 = 25,
    Comparator1 = 26,
    SystemControl = 28,
    /// Flash memory and EEPROM control
    FlashControl = 29,
    GpioPortF = 30,
    Uart2 = 33,
    Ssi1 = 34,
    Timer3A = 35,
    Timer3B = 36,
    I2c1 = 37,
    Qei1 = 38,
    Can0 = 39,
    Can1 = 40,
    Hibernation = 43,
    Usb = 44,
    Pwm0Gen3 = 45,
    UdmaSoftware = 46,
    UdmaError = 47,
    Adc1Seq0 = 48,
    Adc1Seq1 = 49,
    Adc1Seq2 = 50,
    Adc1Seq3 = 51,
    Ssi2 = 57,
    Ssi3 = 58,
    Uart3 = 59,
    Uart4 = 60,
    Uart5 = 61,
    Uart6 = 62,
    Uart7 = 63,
    I2c2 = 68,
    I2c3 = 69,
    Timer4A = 70,
    Timer4B = 71,
    Timer5A = 92,
    Timer5B = 93,
    WideTimer0A = 94,
    WideTimer0B = 95,
    WideTimer1A = 96,
    WideTimer1B = 97,
    WideTimer2A = 98,
    WideTimer2B = 99,
    WideTimer3A = 100,
    WideTimer3B = 101,
    WideTimer4A = 102,
    WideTimer4B = 103,
    WideTimer5A = 104,
    WideTimer5B = 105,
    /// Floating-point unit exception
    SystemException = 106,
    Pwm1Gen0 = 134,
    Pwm1Gen1 = 135,
    Pwm1Gen2 = 136,
    Pwm1Gen3 = 137,
    Pwm1Fault = 138,
}

impl Interrupt {
    /// Vendor interrupt number
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Index of the enable/disable/pending register bank holding this line
    pub const fn bank(self) -> usize {
        (self as u8 / 32) as usize
    }

    /// Bit of this line inside its bank register
    pub const fn bit(self) -> u32 {
        (self as u8 % 32) as u32
    }

    /// Single-bit mask of this line inside its bank register
    pub const fn mask(self) -> u32 {
        1 << self.bit()
    }

    /// Address of the `PRIn` register holding this line's priority byte
    pub const fn priority_register(self) -> u32 {
        bank_register(PRI_BASE, (self as u8 / 4) as usize)
    }

    /// Position of this line's 3-bit priority field inside its `PRIn` register
    pub const fn priority_shift(self) -> u32 {
        (self as u8 % 4) as u32 * 8 + 5
    }
}

impl From<Interrupt> for u8 {
    fn from(irq: Interrupt) -> u8 {
        irq.number()
    }
}
