// fixtures.rs — card payloads shared by the integration tests

pub const SAMPLE_UID: [u8; 4] = [0x04, 0x5A, 0x3C, 0x8E];
pub const SAMPLE_UID_HEX: &str = "045a3c8e";

pub fn sample_bcc() -> u8 {
    SAMPLE_UID.iter().fold(0, |acc, b| acc ^ b)
}

pub fn atqa_reply() -> Vec<u8> {
    vec![0x04, 0x00]
}

/// UID0..3 followed by BCC.
pub fn anticollision_reply() -> Vec<u8> {
    let mut reply = SAMPLE_UID.to_vec();
    reply.push(sample_bcc());
    reply
}

pub fn sak_reply(sak: u8) -> Vec<u8> {
    vec![sak]
}
