// rfid2/src/transport/traits.rs

use crate::types::DeviceAddress;
use crate::Result;

/// RegisterBus abstracts the serial bus away from chip/protocol logic.
///
/// One call is one bus transaction against the device at `address`.
pub trait RegisterBus {
    /// Write `value` to register `reg`: a single `{reg, value}` transaction.
    fn write_register(&mut self, address: DeviceAddress, reg: u8, value: u8) -> Result<()>;

    /// Read one byte from register `reg`. The register-select write and the
    /// read must happen without releasing the bus in between (repeated
    /// start), otherwise some controllers drop the device.
    fn read_register(&mut self, address: DeviceAddress, reg: u8) -> Result<u8>;

    /// Write several values to the same register, in order. Default
    /// implementation issues one `write_register` per byte, which is what
    /// the FIFO data register needs.
    fn write_repeated(&mut self, address: DeviceAddress, reg: u8, values: &[u8]) -> Result<()> {
        for &v in values {
            self.write_register(address, reg, v)?;
        }
        Ok(())
    }

    /// Fill `buf` by reading the same register repeatedly.
    fn read_repeated(&mut self, address: DeviceAddress, reg: u8, buf: &mut [u8]) -> Result<()> {
        for slot in buf.iter_mut() {
            *slot = self.read_register(address, reg)?;
        }
        Ok(())
    }
}

impl<T: RegisterBus + ?Sized> RegisterBus for Box<T> {
    fn write_register(&mut self, address: DeviceAddress, reg: u8, value: u8) -> Result<()> {
        (**self).write_register(address, reg, value)
    }

    fn read_register(&mut self, address: DeviceAddress, reg: u8) -> Result<u8> {
        (**self).read_register(address, reg)
    }

    fn write_repeated(&mut self, address: DeviceAddress, reg: u8, values: &[u8]) -> Result<()> {
        (**self).write_repeated(address, reg, values)
    }

    fn read_repeated(&mut self, address: DeviceAddress, reg: u8, buf: &mut [u8]) -> Result<()> {
        (**self).read_repeated(address, reg, buf)
    }
}
