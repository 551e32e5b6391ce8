#[path = "../common/mod.rs"]
mod common;

use common::*;
use rfid2::device::{Config, CrcTimeoutPolicy};
use rfid2::pcd::{Pcd, Register};
use rfid2::transport::{CardReply, MockBus};
use rfid2::utils::MockClock;
use rfid2::Error;

fn seed_card(mock: &MockBus) {
    mock.push_data(&atqa_reply());
    mock.push_data(&anticollision_reply());
    mock.push_data(&sak_reply(0x08));
}

#[test]
fn reqa_timeout_means_no_card_and_restores_framing() {
    let (mock, mut device) = common::device();
    assert!(!device.is_card_present().unwrap());
    assert_eq!(mock.register(Register::BitFraming), 0x00);
}

#[test]
fn card_present_after_atqa() {
    let (mock, mut device) = common::device();
    mock.push_data(&atqa_reply());
    assert!(device.is_card_present().unwrap());
    // presence check does not go further than REQA
    assert_eq!(mock.transmitted().len(), 1);
}

#[test]
fn read_uid_hex_excludes_bcc_and_sak() {
    let (mock, mut device) = common::device();
    seed_card(&mock);
    assert_eq!(device.read_uid_hex().unwrap(), SAMPLE_UID_HEX);
    assert_eq!(mock.pending_replies(), 0);
}

#[test]
fn short_frame_then_full_byte_framing() {
    let (mock, mut device) = common::device();
    seed_card(&mock);
    device.read_uid().unwrap().unwrap();

    let sent = mock.transmitted();
    assert_eq!(sent[0].data, vec![0x26]);
    assert_eq!(sent[0].tx_last_bits, 0x07);
    assert_eq!(sent[1].data, vec![0x93, 0x20]);
    assert_eq!(sent[1].tx_last_bits, 0x00);
    assert_eq!(sent[2].tx_last_bits, 0x00);
}

#[test]
fn wupa_uses_short_frame() {
    let (mock, mut device) = common::device();
    mock.push_data(&[0x44, 0x00]);
    let atqa = device.wake_up_a().unwrap().unwrap();
    assert_eq!(atqa.as_bytes(), &[0x44, 0x00]);
    assert_eq!(mock.transmitted()[0].data, vec![0x52]);
    assert_eq!(mock.transmitted()[0].tx_last_bits, 0x07);
}

#[test]
fn protocol_error_fails_regardless_of_fifo() {
    let mock = MockBus::new();
    mock.push_reply(CardReply::Error {
        flags: 0x01,
        bytes: vec![0x04, 0x00],
    });
    let mut pcd = Pcd::new(
        Box::new(mock.clone()),
        Box::new(MockClock::new()),
        Config::default(),
    );
    assert_eq!(
        pcd.transceive(&[0x26], 7),
        Err(Error::FrameError { flags: 0x01 })
    );
}

#[test]
fn select_card_reports_sak() {
    let (mock, mut device) = common::device();
    mock.push_data(&atqa_reply());
    mock.push_data(&anticollision_reply());
    mock.push_data(&sak_reply(0x04));

    let selection = device.select_card().unwrap().unwrap();
    assert_eq!(selection.uid.as_bytes(), &SAMPLE_UID);
    assert!(selection.sak.is_cascade());
}

#[test]
fn crc_timeout_policy_decides_select() {
    let (mock, mut device) = common::device();
    mock.set_crc_stuck(true);
    seed_card(&mock);
    assert_eq!(device.read_uid().unwrap(), None);

    let (mock, mut device) =
        common::device_with(Config::default().with_crc_timeout(CrcTimeoutPolicy::ReadAnyway));
    mock.set_crc_stuck(true);
    seed_card(&mock);
    assert_eq!(
        device.read_uid().unwrap().map(|uid| *uid.as_bytes()),
        Some(SAMPLE_UID)
    );
}

#[test]
fn bcc_mismatch_is_configurable() {
    let mut corrupt = anticollision_reply();
    corrupt[4] ^= 0x01;

    let (mock, mut device) = common::device();
    mock.push_data(&atqa_reply());
    mock.push_data(&corrupt);
    assert_eq!(device.read_uid_hex().unwrap(), "");

    let (mock, mut device) = common::device_with(Config::default().with_verify_bcc(false));
    mock.push_data(&atqa_reply());
    mock.push_data(&corrupt);
    mock.push_data(&sak_reply(0x08));
    assert_eq!(device.read_uid_hex().unwrap(), SAMPLE_UID_HEX);
}

#[test]
fn bus_fault_propagates_from_presence_check() {
    let (mock, mut device) = common::device();
    mock.set_bus_failure(true);
    assert!(matches!(device.is_card_present(), Err(Error::Bus(_))));
}
