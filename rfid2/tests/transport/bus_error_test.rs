use rfid2::device::Config;
use rfid2::test_support;
use rfid2::transport::MockBus;
use rfid2::Error;

#[test]
fn bus_failure_surfaces_from_every_operation() {
    let (mock, mut device) = test_support::initialized_mock_device().unwrap();
    mock.set_bus_failure(true);

    assert!(matches!(device.version(), Err(Error::Bus(_))));
    assert!(matches!(device.is_card_present(), Err(Error::Bus(_))));
    assert!(matches!(device.read_uid(), Err(Error::Bus(_))));
    assert!(matches!(device.read_uid_hex(), Err(Error::Bus(_))));
    assert!(matches!(device.reinitialize(), Err(Error::Bus(_))));
}

#[test]
fn device_recovers_once_bus_is_back() {
    let mock = MockBus::new();
    mock.set_bus_failure(true);
    assert!(matches!(
        test_support::mock_device(&mock, Config::default()).initialize(),
        Err(Error::Bus(_))
    ));

    mock.set_bus_failure(false);
    let mut device = test_support::mock_device(&mock, Config::default())
        .initialize()
        .unwrap();
    test_support::seed_card(&mock, [0xDE, 0xAD, 0xBE, 0xEF], 0x08);
    assert_eq!(device.read_uid_hex().unwrap(), "deadbeef");
}
