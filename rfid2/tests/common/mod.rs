// Shared helpers for integration tests.
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use rfid2::device::{Config, Device, Initialized};
use rfid2::test_support;
use rfid2::transport::MockBus;

/// Initialized device with `config` on a fresh mock bus.
pub fn device_with(config: Config) -> (MockBus, Device<Initialized>) {
    let mock = MockBus::new();
    let device = test_support::mock_device(&mock, config)
        .initialize()
        .unwrap();
    (mock, device)
}

pub fn device() -> (MockBus, Device<Initialized>) {
    device_with(Config::default())
}
