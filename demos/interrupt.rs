extern crate linux_embedded_hal as linux_hal;
extern crate mcp23017;

use linux_hal::i2cdev::linux::LinuxI2CError;
use linux_hal::I2cdev;
use mcp23017::{
    Address,
    Error,
    InterruptOutput,
    Mcp23017,
    PinMode,
    Polarity,
    Trigger,
};

use std::{env, thread, time};

const INTERRUPT_PIN: u8 = 0;

/// Waits for a falling edge on GPA0, then dumps the interrupt registers in
/// the various forms the driver offers.
fn main() -> Result<(), Error<LinuxI2CError>> {
    let path = env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".to_string());
    let i2c = I2cdev::new(path).map_err(Error::I2c)?;
    let mut exp = Mcp23017::new(i2c, Address::default())?;

    exp.set_interrupt_output(InterruptOutput {
        polarity: Polarity::ActiveHigh,
        ..InterruptOutput::default()
    })?;
    exp.set_mode(INTERRUPT_PIN, PinMode::InputPullUp)?;
    exp.set_trigger(INTERRUPT_PIN, Trigger::Falling)?;
    exp.set_interrupt_enabled(INTERRUPT_PIN, true)?;

    while !exp.is_interrupt_on_pin(INTERRUPT_PIN, false)? {
        thread::sleep(time::Duration::from_millis(10));
    }
    println!("A falling edge was detected!");

    exp.set_interrupt_enabled(INTERRUPT_PIN, false)?;

    for pin in exp.pending_pins(false)? {
        println!("Pin: {}", pin);
    }

    let flags = exp.interrupt_flags(false)?;
    println!("Flags (hex): 0x{:04X}", flags.bits());

    let flags = exp.interrupt_flags(true)?;
    println!("Flags (binary): {:016b}", flags.bits());

    for capture in exp.interrupt_captures(false)? {
        println!("Pin {} state: {:?}", capture.pin, capture.level);
    }

    exp.clear_capture(INTERRUPT_PIN)?;
    exp.clear_interrupts()?;

    Ok(())
}
