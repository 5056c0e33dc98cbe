//! TCA9554PWR 8-bit I2C port expander driver.
//!
//! Register map (see the TCA9554 datasheet): input port `0x00`, output port
//! `0x01`, polarity inversion `0x02`, configuration `0x03`. A configuration
//! bit of 1 makes the pin an input, 0 an output.

use embedded_hal::i2c::I2c;

use crate::bringup::ExpanderPort;

/// Default 7-bit bus address with A2..A0 strapped low.
pub const DEFAULT_ADDRESS: u8 = 0x20;

/// Direction mask that places every expander pin in output mode.
pub const ALL_OUTPUTS: u8 = 0x00;

const REG_INPUT: u8 = 0x00;
const REG_OUTPUT: u8 = 0x01;
const REG_CONFIG: u8 = 0x03;

/// One of the expander's eight I/O pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pin {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
}

impl Pin {
    fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Direction of a single expander pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Blocking driver for the TCA9554PWR, owning its bus handle.
pub struct Tca9554<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Tca9554<I2C> {
    /// Driver at the default address.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Driver at an address selected by the A2..A0 straps.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Write the configuration register in one bus transaction.
    ///
    /// Bit 1 = input, bit 0 = output, matching the chip's register encoding.
    pub fn set_directions(&mut self, directions: u8) -> Result<(), I2C::Error> {
        self.write_reg(REG_CONFIG, directions)
    }

    /// Reconfigure a single pin, leaving the others untouched.
    pub fn set_pin_direction(&mut self, pin: Pin, direction: Direction) -> Result<(), I2C::Error> {
        let current = self.read_reg(REG_CONFIG)?;
        let updated = match direction {
            Direction::Input => current | pin.mask(),
            Direction::Output => current & !pin.mask(),
        };
        self.write_reg(REG_CONFIG, updated)
    }

    /// Latch all eight output bits at once.
    pub fn write_outputs(&mut self, bits: u8) -> Result<(), I2C::Error> {
        self.write_reg(REG_OUTPUT, bits)
    }

    /// Read the input port register, reflecting the actual pin levels.
    pub fn read_inputs(&mut self) -> Result<u8, I2C::Error> {
        self.read_reg(REG_INPUT)
    }

    /// Drive a single output pin high or low.
    pub fn write_pin(&mut self, pin: Pin, high: bool) -> Result<(), I2C::Error> {
        let current = self.read_reg(REG_OUTPUT)?;
        let updated = if high {
            current | pin.mask()
        } else {
            current & !pin.mask()
        };
        self.write_reg(REG_OUTPUT, updated)
    }

    /// Invert the latched level of a single output pin.
    pub fn toggle_pin(&mut self, pin: Pin) -> Result<(), I2C::Error> {
        let current = self.read_reg(REG_OUTPUT)?;
        self.write_reg(REG_OUTPUT, current ^ pin.mask())
    }

    /// Level currently seen on a single pin.
    pub fn read_pin(&mut self, pin: Pin) -> Result<bool, I2C::Error> {
        Ok(self.read_reg(REG_INPUT)? & pin.mask() != 0)
    }

    /// Give the bus handle back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, I2C::Error> {
        let mut value = [0u8];
        self.i2c.write_read(self.address, &[reg], &mut value)?;
        Ok(value[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[reg, value])
    }
}

impl<I2C: I2c> ExpanderPort for Tca9554<I2C> {
    type Error = I2C::Error;

    fn configure(&mut self, directions: u8) -> Result<(), Self::Error> {
        self.set_directions(directions)
    }
}
