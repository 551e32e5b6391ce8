// rfid2/src/device/builder.rs

use crate::device::config::{Config, CrcTimeoutPolicy, Timeouts};
use crate::device::handle::{Device, Initialized, Uninitialized};
use crate::transport::RegisterBus;
use crate::types::DeviceAddress;
use crate::utils::timeout::{Clock, StdClock};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    bus: Option<Box<dyn RegisterBus>>,
    clock: Option<Box<dyn Clock>>,
    config: Config,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self {
            bus: None,
            clock: None,
            config: Config::default(),
        }
    }

    pub fn with_bus(mut self, bus: Box<dyn RegisterBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Defaults to [`StdClock`].
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn address(mut self, address: impl Into<DeviceAddress>) -> Self {
        self.config.address = address.into();
        self
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.config.timeouts = timeouts;
        self
    }

    pub fn crc_timeout(mut self, policy: CrcTimeoutPolicy) -> Self {
        self.config.crc_timeout = policy;
        self
    }

    pub fn verify_bcc(mut self, verify: bool) -> Self {
        self.config.verify_bcc = verify;
        self
    }

    /// Requires a bus; otherwise returns BusNotConfigured.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let bus = self.bus.ok_or(Error::BusNotConfigured)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(StdClock::new()));
        Ok(Device::new(bus, clock, self.config))
    }

    /// Build and run the initialization sequence.
    pub fn build(self) -> Result<Device<Initialized>> {
        self.build_uninitialized()?.initialize()
    }
}
