// rfid2/src/transport/i2c.rs

#![cfg(feature = "i2c")]

use embedded_hal::i2c::I2c;

use crate::transport::traits::RegisterBus;
use crate::types::DeviceAddress;
use crate::{Error, Result};

/// Register bus over any `embedded-hal` 1.0 I2C controller.
///
/// Reads use `write_read`, which keeps the bus between the register-select
/// write and the data read (repeated start).
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> I2cBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the controller back, e.g. to share it with other devices.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(err: E) -> Error {
    Error::Bus(format!("i2c: {:?}", err.kind()))
}

impl<I2C: I2c> RegisterBus for I2cBus<I2C> {
    fn write_register(&mut self, address: DeviceAddress, reg: u8, value: u8) -> Result<()> {
        self.i2c
            .write(address.as_u8(), &[reg, value])
            .map_err(bus_error)
    }

    fn read_register(&mut self, address: DeviceAddress, reg: u8) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(address.as_u8(), &[reg], &mut buf)
            .map_err(bus_error)?;
        Ok(buf[0])
    }
}
