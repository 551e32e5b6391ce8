#[path = "../common/mod.rs"]
mod common;

use rfid2::device::{Config, DeviceBuilder};
use rfid2::pcd::Register;
use rfid2::test_support;
use rfid2::transport::MockBus;
use rfid2::utils::MockClock;
use rfid2::{ChipVersion, Error};

#[test]
fn initialize_transitions_and_turns_antenna_on() {
    let mock = MockBus::new();
    let device = test_support::mock_device(&mock, Config::default());
    assert_eq!(mock.register(Register::TxControl) & 0x03, 0x00);

    let _initialized = device.initialize().unwrap();
    assert_eq!(mock.soft_resets(), 1);
    assert_eq!(mock.register(Register::TxControl) & 0x03, 0x03);
    assert_eq!(mock.register(Register::TimerMode), 0x80);
    assert_eq!(mock.register(Register::TimerPrescaler), 0xA9);
    assert_eq!(mock.register(Register::TimerReloadHigh), 0x03);
    assert_eq!(mock.register(Register::TimerReloadLow), 0xE8);
    assert_eq!(mock.register(Register::TxAsk), 0x40);
    assert_eq!(mock.register(Register::Mode), 0x3D);
}

#[test]
fn reinitialize_is_repeatable() {
    let (mock, mut device) = common::device();
    for round in 2..=4 {
        device.reinitialize().unwrap();
        assert_eq!(mock.soft_resets(), round);
        assert_eq!(mock.register(Register::TxControl) & 0x03, 0x03);
    }
}

#[test]
fn stuck_reset_does_not_fail_initialize() {
    let mock = MockBus::new();
    mock.set_reset_stuck(true);
    let device = test_support::mock_device(&mock, Config::default());
    assert!(device.initialize().is_ok());
}

#[test]
fn version_readable_before_initialize() {
    let mock = MockBus::new();
    mock.set_version(0x88);
    let mut device = test_support::mock_device(&mock, Config::default());
    assert_eq!(device.chip_version().unwrap(), ChipVersion::Fm17522);
    assert_eq!(mock.soft_resets(), 0);
}

#[test]
fn builder_without_bus_is_rejected() {
    let result = DeviceBuilder::new()
        .with_clock(Box::new(MockClock::new()))
        .build();
    assert!(matches!(result, Err(Error::BusNotConfigured)));
}
