#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use rfid2::DeviceAddress;

proptest! {
    #[test]
    fn valid_addresses_round_trip(addr in 0x08u8..=0x77) {
        let (mock, mut device) = common::device();
        device.set_address(addr);
        prop_assert_eq!(device.address().as_u8(), addr);

        device.version().unwrap();
        prop_assert_eq!(mock.last_address(), Some(DeviceAddress::new(addr)));
    }

    #[test]
    fn any_address_is_masked_not_rejected(addr in any::<u8>()) {
        let (_mock, mut device) = common::device();
        device.set_address(addr);
        prop_assert_eq!(device.address().as_u8(), addr & 0x7F);
    }
}

#[test]
fn set_address_sends_nothing() {
    let (mock, mut device) = common::device();
    mock.clear_writes();
    device.set_address(0x2C);
    assert!(mock.writes().is_empty());
}

#[test]
fn nibble_selection_falls_back_to_default() {
    assert_eq!(DeviceAddress::from_nibbles(0x2, 0xC).as_u8(), 0x2C);
    assert_eq!(DeviceAddress::from_nibbles(0x0, 0x3), DeviceAddress::DEFAULT);
    assert_eq!(DeviceAddress::from_nibbles(0x7, 0x8), DeviceAddress::DEFAULT);
}
