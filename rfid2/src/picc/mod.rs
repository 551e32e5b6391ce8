// rfid2/src/picc/mod.rs
//! ISO14443-A card (PICC) protocol: REQA/WUPA, cascade level 1
//! anticollision and SELECT.
//!
//! The raw steps return the precise [`Error`] of the exchange. The
//! composite operations fold every exchange failure into `Ok(None)`, i.e.
//! "no card", and only propagate bus faults. Nothing is retried.

use log::debug;

use crate::constants::{
    PICC_ANTICOLL_NVB, PICC_REQA, PICC_SELECT_NVB, PICC_SEL_CL1, PICC_WUPA, SHORT_FRAME_BITS,
};
use crate::pcd::{Pcd, Register};
use crate::types::{Atqa, Sak, Uid};
use crate::{Error, Result};

/// UID bytes and BCC received in the cascade level 1 anticollision reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anticollision {
    pub uid: Uid,
    pub bcc: u8,
}

/// A card that answered SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSelection {
    pub uid: Uid,
    /// Not acted upon: a set cascade bit still yields the CL1 UID.
    pub sak: Sak,
}

/// Send a 7-bit short frame (REQA or WUPA). BitFraming is put back to
/// full-byte framing whatever the outcome.
fn short_frame(pcd: &mut Pcd, command: u8) -> Result<Atqa> {
    pcd.registers()
        .write(Register::BitFraming, SHORT_FRAME_BITS)?;
    let result = pcd.transceive(&[command], SHORT_FRAME_BITS);
    pcd.registers().write(Register::BitFraming, 0x00)?;

    let exchange = result?.require(2)?;
    Atqa::try_from(&exchange.data[..])
}

/// REQA: ask idle cards in the field to answer.
pub fn request_a(pcd: &mut Pcd) -> Result<Atqa> {
    short_frame(pcd, PICC_REQA)
}

/// WUPA: like REQA, but also wakes halted cards.
pub fn wake_up_a(pcd: &mut Pcd) -> Result<Atqa> {
    short_frame(pcd, PICC_WUPA)
}

/// Cascade level 1 anticollision: `93 20` answered by UID0..3 + BCC.
pub fn anticollision_cl1(pcd: &mut Pcd) -> Result<Anticollision> {
    pcd.registers().write(Register::BitFraming, 0x00)?;
    let exchange = pcd
        .transceive(&[PICC_SEL_CL1, PICC_ANTICOLL_NVB], 0)?
        .require(5)?;

    let uid = Uid::try_from(&exchange.data[..4])?;
    let bcc = exchange.data[4];
    if pcd.config().verify_bcc && uid.bcc() != bcc {
        return Err(Error::BccMismatch {
            expected: uid.bcc(),
            actual: bcc,
        });
    }
    Ok(Anticollision { uid, bcc })
}

/// Cascade level 1 SELECT: `93 70 UID0..3 BCC CRC_A`, answered by SAK.
pub fn select_cl1(pcd: &mut Pcd, anticoll: &Anticollision) -> Result<Sak> {
    let mut frame = Vec::with_capacity(9);
    frame.push(PICC_SEL_CL1);
    frame.push(PICC_SELECT_NVB);
    frame.extend_from_slice(anticoll.uid.as_bytes());
    frame.push(anticoll.bcc);

    let crc = pcd.calculate_crc(&frame)?;
    crc.append_to(&mut frame);

    let exchange = pcd.transceive(&frame, 0)?.require(1)?;
    Ok(Sak::new(exchange.data[0]))
}

/// Collapse exchange failures into `None`; bus faults pass through.
fn step<T>(what: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_exchange_failure() => {
            debug!("{} failed: {}", what, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// `Some(atqa)` when a card answered REQA.
pub fn detect(pcd: &mut Pcd) -> Result<Option<Atqa>> {
    step("REQA", request_a(pcd))
}

/// `Some(atqa)` when a card (possibly halted) answered WUPA.
pub fn wake(pcd: &mut Pcd) -> Result<Option<Atqa>> {
    step("WUPA", wake_up_a(pcd))
}

/// REQA, anticollision and SELECT at cascade level 1.
pub fn select_card(pcd: &mut Pcd) -> Result<Option<CardSelection>> {
    if step("REQA", request_a(pcd))?.is_none() {
        return Ok(None);
    }
    let Some(anticoll) = step("anticollision CL1", anticollision_cl1(pcd))? else {
        return Ok(None);
    };
    let Some(sak) = step("select CL1", select_cl1(pcd, &anticoll))? else {
        return Ok(None);
    };
    if sak.is_cascade() {
        debug!("SAK {:#04x} announces another cascade level, keeping CL1 UID", sak.as_u8());
    }
    Ok(Some(CardSelection {
        uid: anticoll.uid,
        sak,
    }))
}

/// The 4-byte UID of the card in the field, if one completes selection.
pub fn read_uid(pcd: &mut Pcd) -> Result<Option<Uid>> {
    Ok(select_card(pcd)?.map(|s| s.uid))
}
