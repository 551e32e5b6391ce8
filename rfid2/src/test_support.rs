//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockBus setup so tests across the crate and the
//! tests/ directory seed cards the same way.
#![allow(dead_code)]

use crate::device::{Config, Device, Initialized, Uninitialized};
use crate::transport::mock::MockBus;
use crate::utils::timeout::MockClock;
use crate::{Result, Uid};

/// Queue the three replies of a successful CL1 selection: ATQA, UID + BCC,
/// and SAK followed by its CRC bytes.
#[doc(hidden)]
pub fn seed_card(mock: &MockBus, uid: [u8; 4], sak: u8) {
    mock.push_data(&[0x04, 0x00]);
    let mut anticoll = uid.to_vec();
    anticoll.push(Uid::from_bytes(uid).bcc());
    mock.push_data(&anticoll);
    mock.push_data(&[sak, 0x00, 0x00]);
}

/// Uninitialized device sharing `mock`'s chip, on a virtual clock.
#[doc(hidden)]
pub fn mock_device(mock: &MockBus, config: Config) -> Device<Uninitialized> {
    Device::new(Box::new(mock.clone()), Box::new(MockClock::new()), config)
}

/// Convenience: create and initialize a Device<Initialized> on a fresh
/// MockBus with default configuration. The bus handle is returned so the
/// caller can seed replies and inspect traffic.
#[doc(hidden)]
pub fn initialized_mock_device() -> Result<(MockBus, Device<Initialized>)> {
    let mock = MockBus::new();
    let device = mock_device(&mock, Config::default()).initialize()?;
    Ok((mock, device))
}
