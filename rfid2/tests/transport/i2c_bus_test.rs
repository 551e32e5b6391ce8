use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use rfid2::device::Device;
use rfid2::transport::I2cBus;
use rfid2::utils::MockClock;
use rfid2::{ChipVersion, Config};

#[test]
fn version_read_goes_through_write_read() {
    let expectations = [
        I2cTransaction::write_read(0x28, vec![0x37], vec![0x92]),
        I2cTransaction::write_read(0x2C, vec![0x37], vec![0x12]),
    ];
    let i2c = I2cMock::new(&expectations);
    let mut handle = i2c.clone();

    let mut device = Device::new(
        Box::new(I2cBus::new(i2c)),
        Box::new(MockClock::new()),
        Config::default(),
    );
    assert_eq!(device.chip_version().unwrap(), ChipVersion::Mfrc522V2);

    device.set_address(0x2C);
    assert_eq!(device.chip_version().unwrap(), ChipVersion::Counterfeit(0x12));

    handle.done();
}
