// rfid2/src/pcd/mod.rs
//! Reader-chip (PCD) layer: register access, reset and antenna control, the
//! CRC coprocessor and the transceive engine.

use log::trace;

use crate::constants::FIFO_FLUSH;
use crate::device::config::Config;
use crate::transport::RegisterBus;
use crate::types::DeviceAddress;
use crate::utils::timeout::{poll_until, Clock};
use crate::Result;

pub mod crc;
pub mod registers;
pub mod reset;
pub mod transceive;

pub use crc::Crc;
pub use registers::Register;
pub use transceive::Exchange;

/// Byte-level register access at a configurable device address.
pub struct RegisterAccess {
    bus: Box<dyn RegisterBus>,
    address: DeviceAddress,
}

impl RegisterAccess {
    pub fn new(bus: Box<dyn RegisterBus>, address: DeviceAddress) -> Self {
        Self { bus, address }
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    pub fn set_address(&mut self, address: DeviceAddress) {
        self.address = address;
    }

    pub fn write(&mut self, reg: Register, value: u8) -> Result<()> {
        trace!("write {:?} <- {:#04x}", reg, value);
        self.bus.write_register(self.address, reg.addr(), value)
    }

    pub fn read(&mut self, reg: Register) -> Result<u8> {
        let value = self.bus.read_register(self.address, reg.addr())?;
        trace!("read {:?} -> {:#04x}", reg, value);
        Ok(value)
    }

    /// Read-modify-write; not atomic on the bus.
    pub fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read(reg)?;
        self.write(reg, value | mask)
    }

    /// Read-modify-write; not atomic on the bus.
    pub fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read(reg)?;
        self.write(reg, value & !mask)
    }

    pub fn flush_fifo(&mut self) -> Result<()> {
        self.set_bits(Register::FifoLevel, FIFO_FLUSH)
    }

    pub fn write_fifo(&mut self, data: &[u8]) -> Result<()> {
        self.bus
            .write_repeated(self.address, Register::FifoData.addr(), data)
    }

    pub fn read_fifo(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.bus
            .read_repeated(self.address, Register::FifoData.addr(), &mut buf)?;
        Ok(buf)
    }
}

/// The reader chip: registers, a clock for every wait, and the
/// configuration that parameterizes them.
pub struct Pcd {
    regs: RegisterAccess,
    clock: Box<dyn Clock>,
    config: Config,
}

impl Pcd {
    pub fn new(bus: Box<dyn RegisterBus>, clock: Box<dyn Clock>, config: Config) -> Self {
        Self {
            regs: RegisterAccess::new(bus, config.address),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn address(&self) -> DeviceAddress {
        self.regs.address()
    }

    /// Only the address used for future bus traffic changes; the chip is
    /// left alone.
    pub fn set_address(&mut self, address: DeviceAddress) {
        self.config.address = address;
        self.regs.set_address(address);
    }

    pub fn registers(&mut self) -> &mut RegisterAccess {
        &mut self.regs
    }

    /// Poll `reg` until any bit of `mask` is set or `deadline_ms` passes.
    fn wait_for_bits(&mut self, reg: Register, mask: u8, deadline_ms: u64) -> Result<bool> {
        let interval = self.config.timeouts.poll_interval_ms;
        let regs = &mut self.regs;
        poll_until(&mut *self.clock, deadline_ms, interval, || {
            Ok(regs.read(reg)? & mask != 0)
        })
    }
}
