//! Register map for the MCP23017 in its reset addressing mode (IOCON.BANK = 0).
//!
//! In that mode the A and B registers of each kind sit next to each other, so
//! the port B address is always the port A address plus one. Only the port A
//! addresses are listed here; see [`Bank::register`](crate::Bank::register).

// Taken from http://ww1.microchip.com/downloads/en/DeviceDoc/20001952C.pdf

use bitflags::bitflags;

/// IO Direction. 1 = input, Default 0xff
pub const REG_IODIR: u8 = 0x00;
/// Input polarity inversion. 1 = invert logic
pub const REG_IPOL: u8 = 0x02;
/// Interrupt on change. 1 = enabled
pub const REG_GPINTEN: u8 = 0x04;
/// Comparison value for interrupts when INTCON selects DEFVAL
pub const REG_DEFVAL: u8 = 0x06;
/// Interrupt on change control. 0 = compare to previous value, 1 = compare to DEFVAL
pub const REG_INTCON: u8 = 0x08;
/// Chip configuration, shared by both ports
pub const REG_IOCON: u8 = 0x0A;
/// Internal 100KOhm pull-up resistors. 1 = enabled
pub const REG_GPPU: u8 = 0x0C;
/// Interrupt flag. 1 = pin caused the pending interrupt
pub const REG_INTF: u8 = 0x0E;
/// Interrupt captured value. Port level at the time the interrupt fired
pub const REG_INTCAP: u8 = 0x10;
/// General Purpose IO value. 1 = high
pub const REG_GPIO: u8 = 0x12;
/// Output latch. 1 = high
pub const REG_OLAT: u8 = 0x14;

bitflags! {
    /// Bits of the IOCON configuration register.
    pub struct IoCon: u8 {
        /// Polarity of the INT pins. 1 = active-high
        const INTPOL = 1 << 1;
        /// INT pins as open-drain outputs. Overrides INTPOL
        const ODR = 1 << 2;
        /// Hardware address enable. No effect on the I2C variant
        const HAEN = 1 << 3;
        /// Disable slew rate control on SDA
        const DISSLW = 1 << 4;
        /// Disable sequential operation (address pointer does not increment)
        const SEQOP = 1 << 5;
        /// INTA and INTB are internally ORed
        const MIRROR = 1 << 6;
        /// Separate register banks. This driver assumes it stays cleared
        const BANK = 1 << 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_bit_is_dropped() {
        let iocon = IoCon::from_bits_truncate(0b0100_0011);
        assert_eq!(iocon, IoCon::MIRROR | IoCon::INTPOL);
        assert_eq!(iocon.bits(), 0b0100_0010);
    }
}
