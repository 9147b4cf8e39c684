/// Number of GPIO pins on the chip. Pins 0-7 live on bank A, 8-15 on bank B.
pub const PIN_COUNT: u8 = 16;

/// One of the two eight bit register groups on the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    /// GPA0..GPA7, pins 0-7
    A,
    /// GPB0..GPB7, pins 8-15
    B,
}

impl Bank {
    /// Address of `register` for this bank. `register` is a port A address
    /// from [`registers`](crate::registers).
    pub fn register(self, register: u8) -> u8 {
        match self {
            Bank::A => register,
            Bank::B => register | 0x01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Output,
    Input,
    InputPullUp,
}

impl PinMode {
    /// State of the pin's IODIR bit. Set means input.
    pub(crate) fn is_input(self) -> bool {
        self != PinMode::Output
    }

    pub(crate) fn is_pulled_up(self) -> bool {
        self == PinMode::InputPullUp
    }
}

/// Logic level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> bool {
        level.is_high()
    }
}

/// Register coordinates of a single pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
    pub bank: Bank,
    pub mask: u8,
}

impl Location {
    /// Resolves a pin index, or `None` when it is not in `0..16`.
    pub fn of(pin: u8) -> Option<Self> {
        if pin >= PIN_COUNT {
            return None;
        }

        let bank = if pin < 8 { Bank::A } else { Bank::B };
        Some(Location {
            bank,
            mask: 1 << (pin % 8),
        })
    }

    pub fn register(self, register: u8) -> u8 {
        self.bank.register(register)
    }

    /// `value` with this pin's bit set or cleared.
    pub fn apply(self, value: u8, set: bool) -> u8 {
        if set {
            value | self.mask
        } else {
            value & !self.mask
        }
    }
}
