extern crate linux_embedded_hal as linux_hal;
extern crate mcp23017;

use linux_hal::i2cdev::linux::LinuxI2CError;
use linux_hal::I2cdev;
use mcp23017::{Address, Error, Level, Mcp23017, PinMode};

use std::{env, thread, time};

/// Push button between GPB0 and ground.
const BUTTON: u8 = 8;

fn main() -> Result<(), Error<LinuxI2CError>> {
    let path = env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".to_string());
    let i2c = I2cdev::new(path).map_err(Error::I2c)?;
    let mut exp = Mcp23017::new(i2c, Address::default())?;

    exp.set_mode(BUTTON, PinMode::InputPullUp)?;

    while exp.read_pin(BUTTON)? == Level::High {
        thread::sleep(time::Duration::from_millis(100));
    }

    println!("Button pressed!");

    Ok(())
}
