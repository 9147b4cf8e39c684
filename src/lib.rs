//! Driver for the Microchip MCP23017 16-bit I2C GPIO expander.
//!
//! Besides pin direction, pull-ups and plain digital I/O, the driver exposes
//! the chip's interrupt latches: INTF records which pins raised an interrupt
//! and INTCAP holds the pin levels at that moment. Nothing is cached; every
//! query reads the registers again, and acknowledging an interrupt is always
//! an explicit call.
//!
//! The chip offers two ways to retire a pending interrupt and both are kept
//! apart here:
//!
//! * writing zero to INTF, used by [`Mcp23017::interrupt_flags`] with
//!   `clear` set and by [`Mcp23017::clear_interrupts`];
//! * reading a bank's GPIO register, which releases that bank's INTCAP. This
//!   is [`Mcp23017::clear_capture`] and the `clear` path of
//!   [`Mcp23017::interrupt_captures`].
//!
//! Everything is polled. The driver never waits on the INT pins itself.
//!
//! The driver owns its bus and every method takes `&mut self`. To use one
//! expander from several threads, put the driver behind a mutex; register
//! sequences such as read-modify-write are not atomic on the bus.

#![cfg_attr(not(test), no_std)]

extern crate embedded_hal as hal;

mod error;
mod interrupt;
mod pin;
pub mod registers;

pub use error::Error;
pub use interrupt::{Capture, CaptureIter, Captures, InterruptFlags, InterruptOutput, Pins, Polarity, Trigger};
pub use pin::{Bank, Level, PinMode, PIN_COUNT};

use hal::blocking::i2c::{
    Write,
    WriteRead
};
use log::{debug, error, trace, warn};

use interrupt::combine;
use pin::Location;
use registers::*;

/// Seven bit I2C address of the chip.
///
/// The upper four bits are fixed to `0b0100`, the lower three come from the
/// A2..A0 strap pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(u8);

impl Address {
    /// Address with all strap pins tied low.
    pub const DEFAULT: Address = Address(0x20);

    pub fn from_pins(a0: bool, a1: bool, a2: bool) -> Self {
        Address(0x20 | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8))
    }

    /// Accepts a raw seven bit address, `None` outside `0x20..=0x27`.
    pub fn new(address: u8) -> Option<Self> {
        if address & 0xf8 == 0x20 {
            Some(Address(address))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Address {
    fn default() -> Self {
        Address::DEFAULT
    }
}

pub struct Mcp23017<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> Mcp23017<I2C>
where
    I2C: WriteRead<Error = E> + Write<Error = E>,
{
    /// Takes ownership of the bus and switches every pin to input.
    ///
    /// Fails if the chip does not accept the direction writes, in which case
    /// the bus is dropped along with the half built driver.
    pub fn new(i2c: I2C, address: Address) -> Result<Self, Error<E>> {
        let mut dev = Self {
            i2c,
            address: address.value(),
        };

        dev.write_register(Bank::A.register(REG_IODIR), 0xff)?;
        dev.write_register(Bank::B.register(REG_IODIR), 0xff)?;
        debug!("mcp23017 at 0x{:02x} ready, all pins input", dev.address);

        Ok(dev)
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error<E>> {
        trace!("write 0x{:02x} <- 0x{:02x}", register, value);
        let address = self.address;
        self.i2c.write(address, &[register, value]).map_err(|e| {
            error!("write to register 0x{:02x} at 0x{:02x} failed", register, address);
            Error::I2c(e)
        })
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error<E>> {
        let address = self.address;
        let mut data = [0u8; 1];
        self.i2c
            .write_read(address, &[register], &mut data)
            .map_err(|e| {
                error!("read of register 0x{:02x} at 0x{:02x} failed", register, address);
                Error::I2c(e)
            })?;
        trace!("read 0x{:02x} -> 0x{:02x}", register, data[0]);

        Ok(data[0])
    }

    /// Read-modify-write of a single pin's bit.
    fn update_pin_bit(&mut self, location: Location, register: u8, set: bool) -> Result<(), Error<E>> {
        let register = location.register(register);
        let value = self.read_register(register)?;
        self.write_register(register, location.apply(value, set))
    }

    fn update_iocon<F>(&mut self, f: F) -> Result<(), Error<E>>
    where
        F: FnOnce(IoCon) -> IoCon,
    {
        let iocon = IoCon::from_bits_truncate(self.read_register(REG_IOCON)?);
        self.write_register(REG_IOCON, f(iocon).bits())
    }

    fn locate(pin: u8) -> Result<Location, Error<E>> {
        Location::of(pin).ok_or_else(|| {
            warn!("pin {} is out of range, valid pins are 0-15", pin);
            Error::InvalidPin(pin)
        })
    }

    /// Sets a pin's direction and pull-up.
    ///
    /// Both registers are read first, then written direction before pull-up.
    /// If the second write fails the new direction stays applied.
    pub fn set_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error<E>> {
        let location = Self::locate(pin)?;
        let dir_reg = location.register(REG_IODIR);
        let pup_reg = location.register(REG_GPPU);

        let dir = self.read_register(dir_reg)?;
        let pup = self.read_register(pup_reg)?;

        self.write_register(dir_reg, location.apply(dir, mode.is_input()))?;
        self.write_register(pup_reg, location.apply(pup, mode.is_pulled_up()))
    }

    /// Sets the output latch of a pin. Only visible on the pin while it is an
    /// output.
    pub fn write_pin(&mut self, pin: u8, level: Level) -> Result<(), Error<E>> {
        let location = Self::locate(pin)?;
        self.update_pin_bit(location, REG_OLAT, level.is_high())
    }

    /// Reads the current level of a pin.
    ///
    /// Reading GPIO also releases the bank's interrupt capture, see
    /// [`clear_capture`](Self::clear_capture).
    pub fn read_pin(&mut self, pin: u8) -> Result<Level, Error<E>> {
        let location = Self::locate(pin)?;
        let value = self.read_register(location.register(REG_GPIO))?;

        Ok(Level::from(value & location.mask != 0))
    }

    /// Inverts the value reported for an input pin in GPIO and INTCAP.
    pub fn set_input_polarity(&mut self, pin: u8, inverted: bool) -> Result<(), Error<E>> {
        let location = Self::locate(pin)?;
        self.update_pin_bit(location, REG_IPOL, inverted)
    }

    /// Sets the direction of a whole bank. 1 = input
    pub fn set_port_direction(&mut self, bank: Bank, mask: u8) -> Result<(), Error<E>> {
        self.write_register(bank.register(REG_IODIR), mask)
    }

    /// Writes all eight pins of a bank at once. 1 = high
    pub fn write_port(&mut self, bank: Bank, data: u8) -> Result<(), Error<E>> {
        self.write_register(bank.register(REG_GPIO), data)
    }

    pub fn read_port(&mut self, bank: Bank) -> Result<u8, Error<E>> {
        self.read_register(bank.register(REG_GPIO))
    }

    /// Levels of all sixteen pins, bank B in the high byte.
    pub fn read_gpio(&mut self) -> Result<u16, Error<E>> {
        let a = self.read_port(Bank::A)?;
        let b = self.read_port(Bank::B)?;

        Ok(combine(a, b))
    }

    pub fn set_interrupt_enabled(&mut self, pin: u8, enabled: bool) -> Result<(), Error<E>> {
        let location = Self::locate(pin)?;
        self.update_pin_bit(location, REG_GPINTEN, enabled)
    }

    /// Selects which transitions flag the pin.
    ///
    /// INTCON and DEFVAL are both read, then written in that order. `Change`
    /// writes DEFVAL back unchanged.
    pub fn set_trigger(&mut self, pin: u8, trigger: Trigger) -> Result<(), Error<E>> {
        let location = Self::locate(pin)?;
        let intcon_reg = location.register(REG_INTCON);
        let defval_reg = location.register(REG_DEFVAL);

        let intcon = self.read_register(intcon_reg)?;
        let mut defval = self.read_register(defval_reg)?;

        if let Some(high) = trigger.default_value() {
            defval = location.apply(defval, high);
        }

        self.write_register(
            intcon_reg,
            location.apply(intcon, trigger.compares_to_default()),
        )?;
        self.write_register(defval_reg, defval)
    }

    /// Configures the INTA/INTB pins for the whole chip.
    pub fn set_interrupt_output(&mut self, output: InterruptOutput) -> Result<(), Error<E>> {
        self.update_iocon(|iocon| output.apply(iocon))
    }

    /// Slew rate limiting on SDA. Enabled is the reset state.
    pub fn set_slew_rate_control(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.update_iocon(|mut iocon| {
            iocon.set(IoCon::DISSLW, !enabled);
            iocon
        })
    }

    /// Automatic address pointer increment. Enabled is the reset state.
    pub fn set_sequential_operation(&mut self, enabled: bool) -> Result<(), Error<E>> {
        self.update_iocon(|mut iocon| {
            iocon.set(IoCon::SEQOP, !enabled);
            iocon
        })
    }

    fn read_flags(&mut self) -> Result<InterruptFlags, Error<E>> {
        let a = self.read_register(Bank::A.register(REG_INTF))?;
        let b = self.read_register(Bank::B.register(REG_INTF))?;

        Ok(InterruptFlags::from_banks(a, b))
    }

    fn zero_flags(&mut self) -> Result<(), Error<E>> {
        self.write_register(Bank::A.register(REG_INTF), 0x00)?;
        self.write_register(Bank::B.register(REG_INTF), 0x00)
    }

    /// Reads the pending interrupt flags of both banks.
    ///
    /// Without `clear` this is a plain read and returns the same value until
    /// the chip flags another pin or something clears it. With `clear` both
    /// INTF registers are zeroed right after being read.
    pub fn interrupt_flags(&mut self, clear: bool) -> Result<InterruptFlags, Error<E>> {
        let flags = self.read_flags()?;

        if clear {
            self.zero_flags()?;
            debug!("cleared interrupt flags 0x{:04x}", flags.bits());
        }

        Ok(flags)
    }

    /// Pins with a pending interrupt, lowest first. Same clearing as
    /// [`interrupt_flags`](Self::interrupt_flags).
    pub fn pending_pins(&mut self, clear: bool) -> Result<Pins, Error<E>> {
        Ok(self.interrupt_flags(clear)?.pins())
    }

    /// Whether `pin` has a pending interrupt.
    ///
    /// Out of range pins are reported as not pending without touching the
    /// bus.
    pub fn is_interrupt_on_pin(&mut self, pin: u8, clear: bool) -> Result<bool, Error<E>> {
        if Self::locate(pin).is_err() {
            return Ok(false);
        }

        Ok(self.interrupt_flags(clear)?.is_set(pin))
    }

    /// Reads INTF and INTCAP of both banks and pairs every flagged pin with
    /// its captured level.
    ///
    /// With `clear` each reported pin is acknowledged through
    /// [`clear_capture`](Self::clear_capture), in ascending pin order. INTF
    /// is not written.
    pub fn interrupt_captures(&mut self, clear: bool) -> Result<Captures, Error<E>> {
        let flags = self.read_flags()?;
        let cap_a = self.read_register(Bank::A.register(REG_INTCAP))?;
        let cap_b = self.read_register(Bank::B.register(REG_INTCAP))?;
        let captures = Captures::new(flags, combine(cap_a, cap_b));

        if clear {
            for capture in &captures {
                self.clear_capture(capture.pin)?;
            }
        }

        Ok(captures)
    }

    /// Releases the interrupt capture of the bank `pin` belongs to by reading
    /// that bank's GPIO register. The value read is discarded.
    ///
    /// There is no per pin capture register, so every pending pin on the same
    /// bank is acknowledged too.
    pub fn clear_capture(&mut self, pin: u8) -> Result<(), Error<E>> {
        let location = Self::locate(pin)?;
        self.read_register(location.register(REG_GPIO))?;
        trace!("released capture of bank {:?}", location.bank);

        Ok(())
    }

    /// Acknowledges everything: reads GPIO of both banks to release the
    /// captures, then zeroes both INTF registers.
    pub fn clear_interrupts(&mut self) -> Result<(), Error<E>> {
        self.read_register(Bank::A.register(REG_GPIO))?;
        self.read_register(Bank::B.register(REG_GPIO))?;
        self.zero_flags()?;
        debug!("cleared all interrupts");

        Ok(())
    }
}
