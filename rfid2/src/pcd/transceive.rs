// rfid2/src/pcd/transceive.rs

use log::debug;

use super::{Pcd, Register};
use crate::constants::{
    BIT_FRAMING_START_SEND, COM_IRQ_CLEAR_ALL, COM_IRQ_DONE_MASK, ERROR_MASK, FIFO_LEVEL_MASK,
    LAST_BITS_MASK, PCD_IDLE, PCD_TRANSCEIVE,
};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Bytes drained from the FIFO after a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Exchange {
    pub data: Vec<u8>,
    /// Valid bits in the last received byte; 0 means all eight.
    pub valid_bits: u8,
}

impl Exchange {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fail with [`Error::ShortReply`] unless at least `min` bytes arrived.
    pub fn require(self, min: usize) -> Result<Self> {
        if self.data.len() < min {
            return Err(Error::ShortReply {
                expected: min,
                actual: self.data.len(),
            });
        }
        Ok(self)
    }
}

impl Pcd {
    /// One half-duplex transmit/receive cycle.
    ///
    /// `valid_bits` is TxLastBits for the final transmitted byte (0 sends
    /// it whole). Errors: [`Error::Timeout`] when no completion interrupt
    /// arrives, [`Error::FrameError`] when the error register flags the
    /// reception even though it completed. A completed exchange with an
    /// empty FIFO is a success.
    pub fn transceive(&mut self, frame: &[u8], valid_bits: u8) -> Result<Exchange> {
        self.regs.write(Register::Command, PCD_IDLE)?;
        self.regs.write(Register::ComIrq, COM_IRQ_CLEAR_ALL)?;
        self.regs.flush_fifo()?;

        self.regs.write_fifo(frame)?;
        self.regs
            .write(Register::BitFraming, valid_bits & LAST_BITS_MASK)?;

        self.regs.write(Register::Command, PCD_TRANSCEIVE)?;
        self.regs
            .set_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;

        let deadline = self.config.timeouts.transceive_ms;
        if !self.wait_for_bits(Register::ComIrq, COM_IRQ_DONE_MASK, deadline)? {
            self.regs
                .clear_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;
            debug!("transceive [{}] timed out", bytes_to_hex_spaced(frame));
            return Err(Error::Timeout);
        }

        let flags = self.regs.read(Register::Error)?;
        if flags & ERROR_MASK != 0 {
            debug!(
                "transceive [{}] frame error {:#04x}",
                bytes_to_hex_spaced(frame),
                flags
            );
            return Err(Error::FrameError { flags });
        }

        let count = (self.regs.read(Register::FifoLevel)? & FIFO_LEVEL_MASK) as usize;
        let data = self.regs.read_fifo(count)?;
        let valid_bits = self.regs.read(Register::Control)? & LAST_BITS_MASK;

        debug!(
            "transceive [{}] -> [{}] ({} bits)",
            bytes_to_hex_spaced(frame),
            bytes_to_hex_spaced(&data),
            valid_bits
        );
        Ok(Exchange { data, valid_bits })
    }
}
