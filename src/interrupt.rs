//! Interrupt configuration values and the snapshots read back from the
//! INTF and INTCAP latches.
//!
//! Both latches are split across the two banks. Whenever they are combined
//! into a 16-bit value, bank A forms the low byte and bank B the high byte, so
//! bit `n` always belongs to pin `n`.

use crate::pin::{Level, PIN_COUNT};
use crate::registers::IoCon;

/// Which pin transitions raise an interrupt flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Any change relative to the previous pin value.
    Change,
    /// Edge that leaves the pin high. DEFVAL bit 1.
    Rising,
    /// Edge that leaves the pin low. DEFVAL bit 0.
    Falling,
}

impl Trigger {
    /// State of the pin's INTCON bit. Set means "compare to DEFVAL".
    pub(crate) fn compares_to_default(self) -> bool {
        self != Trigger::Change
    }

    /// State of the pin's DEFVAL bit, or `None` to leave it untouched.
    pub(crate) fn default_value(self) -> Option<bool> {
        match self {
            Trigger::Change => None,
            Trigger::Rising => Some(true),
            Trigger::Falling => Some(false),
        }
    }
}

/// Level the INT pins are driven to while an interrupt is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

/// Chip-wide behaviour of the INTA/INTB output pins.
///
/// The default matches the chip after reset: active-low, push-pull, and one
/// line per bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptOutput {
    pub polarity: Polarity,
    /// Drive the INT pins open-drain. The pin is only ever pulled low, so
    /// `polarity` is ignored and INTPOL is kept cleared.
    pub open_drain: bool,
    /// OR both banks onto both INT pins instead of INTA for bank A and INTB
    /// for bank B.
    pub mirrored: bool,
}

impl Default for InterruptOutput {
    fn default() -> Self {
        InterruptOutput {
            polarity: Polarity::ActiveLow,
            open_drain: false,
            mirrored: false,
        }
    }
}

impl InterruptOutput {
    /// `iocon` with the ODR, INTPOL and MIRROR bits replaced. All other bits
    /// are kept.
    pub(crate) fn apply(self, mut iocon: IoCon) -> IoCon {
        iocon.set(IoCon::ODR, self.open_drain);
        iocon.set(
            IoCon::INTPOL,
            !self.open_drain && self.polarity == Polarity::ActiveHigh,
        );
        iocon.set(IoCon::MIRROR, self.mirrored);
        iocon
    }
}

/// Snapshot of the INTF registers. Bit `n` is set while pin `n` has an
/// unacknowledged interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterruptFlags(u16);

impl InterruptFlags {
    pub fn new(bits: u16) -> Self {
        InterruptFlags(bits)
    }

    pub(crate) fn from_banks(a: u8, b: u8) -> Self {
        InterruptFlags(combine(a, b))
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `pin` is flagged. Out of range pins never are.
    pub fn is_set(self, pin: u8) -> bool {
        pin < PIN_COUNT && self.0 & (1 << pin) != 0
    }

    /// Flagged pins in ascending order.
    pub fn pins(self) -> Pins {
        Pins { bits: self.0 }
    }
}

impl From<InterruptFlags> for u16 {
    fn from(flags: InterruptFlags) -> u16 {
        flags.0
    }
}

impl IntoIterator for InterruptFlags {
    type Item = u8;
    type IntoIter = Pins;

    fn into_iter(self) -> Pins {
        self.pins()
    }
}

/// Iterator over the set bits of a 16-bit pin mask, lowest pin first.
#[derive(Debug, Clone)]
pub struct Pins {
    bits: u16,
}

impl Iterator for Pins {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }

        let pin = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(pin)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Pins {}

/// A flagged pin paired with the level INTCAP latched for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub pin: u8,
    pub level: Level,
}

/// Snapshot of INTF together with INTCAP, taken in one call.
///
/// INTCAP bits of pins without a flag are stale and never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Captures {
    flags: InterruptFlags,
    levels: u16,
}

impl Captures {
    pub(crate) fn new(flags: InterruptFlags, levels: u16) -> Self {
        Captures { flags, levels }
    }

    pub fn flags(&self) -> InterruptFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Captured level of `pin`, if it is flagged.
    pub fn level(&self, pin: u8) -> Option<Level> {
        if self.flags.is_set(pin) {
            Some(Level::from(self.levels & (1 << pin) != 0))
        } else {
            None
        }
    }

    pub fn iter(&self) -> CaptureIter {
        CaptureIter {
            pins: self.flags.pins(),
            levels: self.levels,
        }
    }
}

impl IntoIterator for Captures {
    type Item = Capture;
    type IntoIter = CaptureIter;

    fn into_iter(self) -> CaptureIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = Capture;
    type IntoIter = CaptureIter;

    fn into_iter(self) -> CaptureIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct CaptureIter {
    pins: Pins,
    levels: u16,
}

impl Iterator for CaptureIter {
    type Item = Capture;

    fn next(&mut self) -> Option<Capture> {
        let levels = self.levels;
        self.pins.next().map(|pin| Capture {
            pin,
            level: Level::from(levels & (1 << pin) != 0),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pins.size_hint()
    }
}

impl ExactSizeIterator for CaptureIter {}

pub(crate) fn combine(a: u8, b: u8) -> u16 {
    (u16::from(b) << 8) | u16::from(a)
}
