// rfid2/src/device/handle.rs

use std::marker::PhantomData;

use crate::device::config::Config;
use crate::pcd::{Pcd, Register};
use crate::picc::{self, CardSelection};
use crate::transport::RegisterBus;
use crate::types::{Atqa, ChipVersion, DeviceAddress, Uid};
use crate::utils::timeout::{Clock, StdClock};
use crate::Result;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Reader handle that enforces initialization at compile time: card
/// operations only exist on `Device<Initialized>`.
pub struct Device<State = Uninitialized> {
    pcd: Pcd,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a device from an existing bus and clock. Nothing is sent to
    /// the chip until [`Device::initialize`].
    pub fn new(bus: Box<dyn RegisterBus>, clock: Box<dyn Clock>, config: Config) -> Self {
        Self {
            pcd: Pcd::new(bus, clock, config),
            _state: PhantomData,
        }
    }

    /// Default configuration on the host clock.
    pub fn with_bus(bus: Box<dyn RegisterBus>) -> Self {
        Self::new(bus, Box::new(StdClock::new()), Config::default())
    }

    /// Reset and configure the chip at the configured address and switch
    /// the antenna on.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut pcd = self.pcd;
        pcd.init_chip()?;
        Ok(Device {
            pcd,
            _state: PhantomData,
        })
    }

    /// Like [`Device::initialize`], after moving to `address`.
    pub fn initialize_at(mut self, address: impl Into<DeviceAddress>) -> Result<Device<Initialized>> {
        self.set_address(address);
        self.initialize()
    }
}

impl<State> Device<State> {
    pub fn config(&self) -> &Config {
        self.pcd.config()
    }

    pub fn address(&self) -> DeviceAddress {
        self.pcd.address()
    }

    /// Point future bus traffic at another address (masked to 7 bits).
    /// Chip state and initialization state are untouched.
    pub fn set_address(&mut self, address: impl Into<DeviceAddress>) {
        self.pcd.set_address(address.into());
    }

    /// Raw version register, for hardware-presence diagnostics.
    pub fn version(&mut self) -> Result<u8> {
        self.pcd.registers().read(Register::Version)
    }

    pub fn chip_version(&mut self) -> Result<ChipVersion> {
        Ok(ChipVersion::from_raw(self.version()?))
    }

    /// Snapshot of every readable register except the FIFO.
    pub fn dump_registers(&mut self) -> Result<Vec<(Register, u8)>> {
        Register::DUMPABLE
            .iter()
            .map(|&reg| Ok((reg, self.pcd.registers().read(reg)?)))
            .collect()
    }
}

impl Device<Initialized> {
    /// Replay the full initialization sequence on the running chip.
    pub fn reinitialize(&mut self) -> Result<()> {
        self.pcd.init_chip()
    }

    /// REQA only; no UID work.
    pub fn is_card_present(&mut self) -> Result<bool> {
        Ok(picc::detect(&mut self.pcd)?.is_some())
    }

    pub fn request_a(&mut self) -> Result<Option<Atqa>> {
        picc::detect(&mut self.pcd)
    }

    /// WUPA: also reaches cards in the HALT state.
    pub fn wake_up_a(&mut self) -> Result<Option<Atqa>> {
        picc::wake(&mut self.pcd)
    }

    pub fn select_card(&mut self) -> Result<Option<CardSelection>> {
        picc::select_card(&mut self.pcd)
    }

    pub fn read_uid(&mut self) -> Result<Option<Uid>> {
        picc::read_uid(&mut self.pcd)
    }

    /// Lowercase hex UID, or an empty string when no card completed
    /// selection.
    pub fn read_uid_hex(&mut self) -> Result<String> {
        Ok(self.read_uid()?.map(|uid| uid.to_hex()).unwrap_or_default())
    }
}
