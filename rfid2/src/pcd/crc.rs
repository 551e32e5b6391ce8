// rfid2/src/pcd/crc.rs

use log::warn;

use super::{Pcd, Register};
use crate::constants::{DIV_IRQ_CRC, PCD_CALC_CRC};
use crate::device::config::CrcTimeoutPolicy;
use crate::{Error, Result};

/// CRC_A as read from the coprocessor result registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc {
    pub high: u8,
    pub low: u8,
}

impl Crc {
    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.high, self.low])
    }

    /// ISO14443-3 sends CRC_A least significant byte first.
    pub fn append_to(&self, frame: &mut Vec<u8>) {
        frame.push(self.low);
        frame.push(self.high);
    }
}

impl Pcd {
    /// Run `data` through the chip's CRC coprocessor.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<Crc> {
        // CRCIRq stays set from the previous run until written back
        self.regs.write(Register::DivIrq, DIV_IRQ_CRC)?;
        self.regs.flush_fifo()?;
        self.regs.write_fifo(data)?;
        self.regs.write(Register::Command, PCD_CALC_CRC)?;

        let deadline = self.config.timeouts.crc_ms;
        if !self.wait_for_bits(Register::DivIrq, DIV_IRQ_CRC, deadline)? {
            match self.config.crc_timeout {
                CrcTimeoutPolicy::Fail => return Err(Error::CrcTimeout),
                CrcTimeoutPolicy::ReadAnyway => {
                    warn!("CRC not ready after {} ms, reading result anyway", deadline)
                }
            }
        }

        let low = self.regs.read(Register::CrcResultLow)?;
        let high = self.regs.read(Register::CrcResultHigh)?;
        Ok(Crc { high, low })
    }
}
