// rfid2/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::{
    BIT_FRAMING_START_SEND, COMMAND_POWER_DOWN, DIV_IRQ_CRC, FIFO_FLUSH, FIFO_LEVEL_MASK,
    LAST_BITS_MASK, PCD_CALC_CRC, PCD_SOFT_RESET, PCD_TRANSCEIVE,
};
use crate::pcd::Register;
use crate::transport::traits::RegisterBus;
use crate::types::DeviceAddress;
use crate::{Error, Result};

const COMMAND: u8 = Register::Command.addr();
const COM_IRQ: u8 = Register::ComIrq.addr();
const DIV_IRQ: u8 = Register::DivIrq.addr();
const ERROR: u8 = Register::Error.addr();
const FIFO_DATA: u8 = Register::FifoData.addr();
const FIFO_LEVEL: u8 = Register::FifoLevel.addr();
const CONTROL: u8 = Register::Control.addr();
const BIT_FRAMING: u8 = Register::BitFraming.addr();
const MODE: u8 = Register::Mode.addr();
const TX_CONTROL: u8 = Register::TxControl.addr();
const CRC_HIGH: u8 = Register::CrcResultHigh.addr();
const CRC_LOW: u8 = Register::CrcResultLow.addr();
const VERSION: u8 = Register::Version.addr();

/// ComIrqReg bits raised by a completed reception: RxIRq | IdleIRq
const COM_IRQ_RX_IDLE: u8 = 0x30;
/// ComIrqReg: ErrIRq
const COM_IRQ_ERR: u8 = 0x02;
/// CommandReg after power-on/soft reset: RcvOff, Idle
const COMMAND_RESET_VALUE: u8 = 0x20;

/// ISO14443-3 CRC_A (preset 0x6363, reflected polynomial 0x8408), as the
/// chip's coprocessor computes it with ModeReg = 0x3D.
pub fn crc_a(data: &[u8]) -> u16 {
    let mut crc: u16 = 0x6363;
    for &byte in data {
        let mut bt = byte ^ (crc & 0x00ff) as u8;
        bt ^= bt << 4;
        let bt = bt as u16;
        crc = (crc >> 8) ^ (bt << 8) ^ (bt << 3) ^ (bt >> 4);
    }
    crc
}

/// What the simulated card does in answer to one transmitted frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReply {
    /// Reception completes with these bytes; `last_bits` lands in ControlReg.
    Data { bytes: Vec<u8>, last_bits: u8 },
    /// Reception completes but ErrorReg reports `flags`; `bytes` still sit
    /// in the FIFO.
    Error { flags: u8, bytes: Vec<u8> },
    /// No card answers: the completion interrupt never fires.
    Silent,
}

impl CardReply {
    pub fn data(bytes: &[u8]) -> Self {
        CardReply::Data {
            bytes: bytes.to_vec(),
            last_bits: 0,
        }
    }
}

/// A frame the driver handed to the chip with StartSend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmittedFrame {
    pub data: Vec<u8>,
    /// TxLastBits at the moment transmission started
    pub tx_last_bits: u8,
}

#[derive(Debug)]
struct MockChip {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    replies: VecDeque<CardReply>,
    transmitted: Vec<TransmittedFrame>,
    writes: Vec<(u8, u8)>,
    last_address: Option<DeviceAddress>,
    soft_resets: usize,
    reset_stuck: bool,
    crc_stuck: bool,
    bus_failure: bool,
}

impl MockChip {
    fn new() -> Self {
        let mut chip = Self {
            regs: [0u8; 64],
            fifo: VecDeque::new(),
            replies: VecDeque::new(),
            transmitted: Vec::new(),
            writes: Vec::new(),
            last_address: None,
            soft_resets: 0,
            reset_stuck: false,
            crc_stuck: false,
            bus_failure: false,
        };
        chip.regs[VERSION as usize] = 0x92;
        chip.power_on_defaults();
        chip
    }

    fn power_on_defaults(&mut self) {
        let version = self.regs[VERSION as usize];
        self.regs = [0u8; 64];
        self.regs[VERSION as usize] = version;
        self.regs[COMMAND as usize] = COMMAND_RESET_VALUE;
        self.regs[MODE as usize] = 0x3F;
        self.regs[TX_CONTROL as usize] = 0x80;
        self.fifo.clear();
    }

    fn read(&mut self, reg: u8) -> u8 {
        match reg {
            FIFO_DATA => self.fifo.pop_front().unwrap_or(0),
            FIFO_LEVEL => (self.fifo.len() as u8) & FIFO_LEVEL_MASK,
            _ => self.regs[(reg & 0x3F) as usize],
        }
    }

    fn write(&mut self, reg: u8, value: u8) {
        self.writes.push((reg, value));
        match reg {
            FIFO_DATA => self.fifo.push_back(value),
            FIFO_LEVEL => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                }
            }
            // Set1 (bit 7) selects whether the written mask sets or clears
            COM_IRQ | DIV_IRQ => {
                let r = &mut self.regs[reg as usize];
                if value & 0x80 != 0 {
                    *r |= value & 0x7F;
                } else {
                    *r &= !(value & 0x7F);
                }
            }
            ERROR | CONTROL | VERSION => {}
            COMMAND => self.run_command(value & 0x0F),
            BIT_FRAMING => {
                self.regs[reg as usize] = value;
                if value & BIT_FRAMING_START_SEND != 0
                    && self.regs[COMMAND as usize] & 0x0F == PCD_TRANSCEIVE
                {
                    self.start_send(value & LAST_BITS_MASK);
                }
            }
            _ => self.regs[(reg & 0x3F) as usize] = value,
        }
    }

    fn run_command(&mut self, cmd: u8) {
        match cmd {
            PCD_SOFT_RESET => {
                self.soft_resets += 1;
                self.power_on_defaults();
                if self.reset_stuck {
                    self.regs[COMMAND as usize] = COMMAND_POWER_DOWN | PCD_SOFT_RESET;
                }
            }
            PCD_CALC_CRC => {
                self.regs[COMMAND as usize] = cmd;
                let data: Vec<u8> = self.fifo.drain(..).collect();
                if !self.crc_stuck {
                    let crc = crc_a(&data);
                    self.regs[CRC_HIGH as usize] = (crc >> 8) as u8;
                    self.regs[CRC_LOW as usize] = (crc & 0xff) as u8;
                    self.regs[DIV_IRQ as usize] |= DIV_IRQ_CRC;
                }
            }
            _ => {
                if !self.reset_stuck {
                    self.regs[COMMAND as usize] = cmd;
                }
            }
        }
    }

    fn start_send(&mut self, tx_last_bits: u8) {
        let data: Vec<u8> = self.fifo.drain(..).collect();
        self.transmitted.push(TransmittedFrame { data, tx_last_bits });

        match self.replies.pop_front().unwrap_or(CardReply::Silent) {
            CardReply::Data { bytes, last_bits } => {
                self.fifo.extend(bytes);
                self.regs[ERROR as usize] = 0;
                self.regs[CONTROL as usize] = last_bits & LAST_BITS_MASK;
                self.regs[COM_IRQ as usize] |= COM_IRQ_RX_IDLE;
            }
            CardReply::Error { flags, bytes } => {
                self.fifo.extend(bytes);
                self.regs[ERROR as usize] = flags;
                self.regs[COM_IRQ as usize] |= COM_IRQ_RX_IDLE | COM_IRQ_ERR;
            }
            CardReply::Silent => {}
        }
    }
}

/// Mock register bus for unit tests.
///
/// It emulates the part of an MFRC522 the driver relies on: FIFO and FIFO
/// level, write-1-to-clear interrupt registers, CalcCRC with a real CRC_A,
/// Transceive answered from a queue of [`CardReply`]s, and SoftReset. Every
/// register write and every transmitted frame is recorded. Clones share the
/// same simulated chip, so a test can keep one handle and give another to a
/// `Device`.
#[derive(Debug, Clone)]
pub struct MockBus {
    chip: Rc<RefCell<MockChip>>,
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            chip: Rc::new(RefCell::new(MockChip::new())),
        }
    }

    pub fn push_reply(&self, reply: CardReply) {
        self.chip.borrow_mut().replies.push_back(reply);
    }

    pub fn push_data(&self, bytes: &[u8]) {
        self.push_reply(CardReply::data(bytes));
    }

    pub fn pending_replies(&self) -> usize {
        self.chip.borrow().replies.len()
    }

    pub fn set_version(&self, version: u8) {
        self.chip.borrow_mut().regs[VERSION as usize] = version;
    }

    /// Keep the PowerDown bit set after SoftReset, as if the oscillator
    /// never came up.
    pub fn set_reset_stuck(&self, stuck: bool) {
        self.chip.borrow_mut().reset_stuck = stuck;
    }

    /// CalcCRC never raises CRCIRq and leaves the result registers alone.
    pub fn set_crc_stuck(&self, stuck: bool) {
        self.chip.borrow_mut().crc_stuck = stuck;
    }

    /// Every subsequent bus transaction fails with [`Error::Bus`].
    pub fn set_bus_failure(&self, fail: bool) {
        self.chip.borrow_mut().bus_failure = fail;
    }

    /// Current raw value of a register (bypasses read side effects).
    pub fn register(&self, reg: Register) -> u8 {
        self.chip.borrow().regs[reg.addr() as usize]
    }

    /// Preload a register value (bypasses write side effects).
    pub fn set_register(&self, reg: Register, value: u8) {
        self.chip.borrow_mut().regs[reg.addr() as usize] = value;
    }

    pub fn fifo(&self) -> Vec<u8> {
        self.chip.borrow().fifo.iter().copied().collect()
    }

    pub fn transmitted(&self) -> Vec<TransmittedFrame> {
        self.chip.borrow().transmitted.clone()
    }

    /// All `(register, value)` writes in bus order.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.chip.borrow().writes.clone()
    }

    /// Values written to one register, in order.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.chip
            .borrow()
            .writes
            .iter()
            .filter(|(r, _)| *r == reg.addr())
            .map(|&(_, v)| v)
            .collect()
    }

    pub fn clear_writes(&self) {
        self.chip.borrow_mut().writes.clear();
    }

    pub fn soft_resets(&self) -> usize {
        self.chip.borrow().soft_resets
    }

    pub fn last_address(&self) -> Option<DeviceAddress> {
        self.chip.borrow().last_address
    }

    fn begin(&self, address: DeviceAddress) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        if chip.bus_failure {
            return Err(Error::Bus("injected bus failure".to_string()));
        }
        chip.last_address = Some(address);
        Ok(())
    }
}

impl RegisterBus for MockBus {
    fn write_register(&mut self, address: DeviceAddress, reg: u8, value: u8) -> Result<()> {
        self.begin(address)?;
        self.chip.borrow_mut().write(reg, value);
        Ok(())
    }

    fn read_register(&mut self, address: DeviceAddress, reg: u8) -> Result<u8> {
        self.begin(address)?;
        Ok(self.chip.borrow_mut().read(reg))
    }
}
