use rfid2::pcd::Register;
use rfid2::transport::mock::crc_a;
use rfid2::transport::{CardReply, MockBus, RegisterBus, TransmittedFrame};
use rfid2::DeviceAddress;

const ADDR: DeviceAddress = DeviceAddress::DEFAULT;

#[test]
fn clones_share_one_chip() {
    let mock = MockBus::new();
    let mut other = mock.clone();
    other
        .write_register(ADDR, Register::TxAsk.addr(), 0x40)
        .unwrap();
    assert_eq!(mock.register(Register::TxAsk), 0x40);
    assert_eq!(mock.writes(), vec![(0x15, 0x40)]);
}

#[test]
fn fifo_round_trip_and_flush() {
    let mut mock = MockBus::new();
    mock.write_repeated(ADDR, Register::FifoData.addr(), &[1, 2, 3])
        .unwrap();
    assert_eq!(
        mock.read_register(ADDR, Register::FifoLevel.addr()).unwrap(),
        3
    );

    let mut buf = [0u8; 2];
    mock.read_repeated(ADDR, Register::FifoData.addr(), &mut buf)
        .unwrap();
    assert_eq!(buf, [1, 2]);

    mock.write_register(ADDR, Register::FifoLevel.addr(), 0x80)
        .unwrap();
    assert!(mock.fifo().is_empty());
}

#[test]
fn replies_are_consumed_in_order() {
    let mut mock = MockBus::new();
    mock.push_data(&[0xAA]);
    mock.push_reply(CardReply::Silent);
    assert_eq!(mock.pending_replies(), 2);

    for frame in [[0x01u8], [0x02u8]] {
        mock.write_repeated(ADDR, Register::FifoData.addr(), &frame)
            .unwrap();
        mock.write_register(ADDR, Register::Command.addr(), 0x0C)
            .unwrap();
        mock.write_register(ADDR, Register::BitFraming.addr(), 0x80)
            .unwrap();
    }

    assert_eq!(mock.pending_replies(), 0);
    assert_eq!(
        mock.transmitted(),
        vec![
            TransmittedFrame {
                data: vec![0x01],
                tx_last_bits: 0
            },
            TransmittedFrame {
                data: vec![0x02],
                tx_last_bits: 0
            },
        ]
    );
    // the second card stayed silent, so only the first answer is buffered
    assert_eq!(mock.fifo(), vec![0xAA]);
}

#[test]
fn crc_a_known_vectors() {
    // HLTA is sent as 50 00 57 CD; an empty input leaves the preset
    assert_eq!(crc_a(&[0x50, 0x00]), 0xCD57);
    assert_eq!(crc_a(&[]), 0x6363);
}
