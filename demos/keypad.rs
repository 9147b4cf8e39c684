extern crate linux_embedded_hal as linux_hal;
extern crate mcp23017;

use linux_hal::i2cdev::linux::LinuxI2CError;
use linux_hal::I2cdev;
use mcp23017::{Address, Error, Level, Mcp23017, PinMode};

use std::{env, thread, time};

const COLUMNS: [u8; 3] = [8, 9, 10];
const ROWS: [u8; 4] = [11, 12, 13, 14];

const KEYS: [[char; 3]; 4] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['*', '0', '#'],
];

/// Scans a 4x3 matrix keypad on bank B. Columns are driven low one at a
/// time and a pressed key pulls its row low.
fn main() -> Result<(), Error<LinuxI2CError>> {
    let path = env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".to_string());
    let i2c = I2cdev::new(path).map_err(Error::I2c)?;
    let mut exp = Mcp23017::new(i2c, Address::default())?;

    for &col in &COLUMNS {
        exp.set_mode(col, PinMode::Output)?;
        exp.write_pin(col, Level::High)?;
    }
    for &row in &ROWS {
        exp.set_mode(row, PinMode::InputPullUp)?;
    }

    loop {
        for (c, &col) in COLUMNS.iter().enumerate() {
            exp.write_pin(col, Level::Low)?;

            for (r, &row) in ROWS.iter().enumerate() {
                if exp.read_pin(row)?.is_low() {
                    println!("Pressed key: {}", KEYS[r][c]);
                    // crude debounce
                    thread::sleep(time::Duration::from_millis(100));
                }
            }

            exp.write_pin(col, Level::High)?;
        }

        thread::sleep(time::Duration::from_millis(50));
    }
}
