extern crate linux_embedded_hal as linux_hal;
extern crate mcp23017;

use linux_hal::i2cdev::linux::LinuxI2CError;
use linux_hal::I2cdev;
use mcp23017::{
    Address,
    Bank,
    Error,
    Mcp23017 as Expander,
};

use std::{
    env,
    thread,
    time,
};

/// Toggles all eight pins of bank B once a second.
fn main() -> Result<(), Error<LinuxI2CError>> {
    let path = env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".to_string());
    let i2c = I2cdev::new(path).map_err(Error::I2c)?;
    let sleep_time = time::Duration::from_secs(1);
    let mut on: bool = true;

    let mut exp = Expander::new(i2c, Address::default())?;
    exp.set_port_direction(Bank::B, 0x00)?;

    loop {
        exp.write_port(Bank::B, if on { 0xff } else { 0x00 })?;
        thread::sleep(sleep_time);

        on ^= true;
    }
}
