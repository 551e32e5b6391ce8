// rfid2/src/constants.rs
//! Bus-level constants shared across the crate

/// Default 7-bit I2C address of the RFID2 (WS1850S) unit
pub const DEFAULT_ADDRESS: u8 = 0x28;

/// Mask applied to every configured device address
pub const ADDRESS_MASK: u8 = 0x7F;

/// Lowest/highest non-reserved 7-bit I2C addresses
pub const ADDRESS_MIN: u8 = 0x08;
pub const ADDRESS_MAX: u8 = 0x77;

/// PCD (reader chip) commands written to the command register
pub const PCD_IDLE: u8 = 0x00;
pub const PCD_CALC_CRC: u8 = 0x03;
pub const PCD_TRANSCEIVE: u8 = 0x0C;
pub const PCD_SOFT_RESET: u8 = 0x0F;

/// PICC (card) commands
pub const PICC_REQA: u8 = 0x26;
pub const PICC_WUPA: u8 = 0x52;
pub const PICC_SEL_CL1: u8 = 0x93;
/// NVB for an anticollision frame carrying no UID bits
pub const PICC_ANTICOLL_NVB: u8 = 0x20;
/// NVB for a full SELECT frame (7 bytes)
pub const PICC_SELECT_NVB: u8 = 0x70;

/// ErrorReg: BufferOvfl | ParityErr | ProtocolErr
pub const ERROR_MASK: u8 = 0x13;
/// ComIrqReg: RxIRq | IdleIRq
pub const COM_IRQ_DONE_MASK: u8 = 0x30;
/// Writing this to ComIrqReg clears every pending request bit
pub const COM_IRQ_CLEAR_ALL: u8 = 0x7F;
/// DivIrqReg: CRCIRq
pub const DIV_IRQ_CRC: u8 = 0x04;
/// FIFOLevelReg: FlushBuffer
pub const FIFO_FLUSH: u8 = 0x80;
/// FIFOLevelReg: number of stored bytes
pub const FIFO_LEVEL_MASK: u8 = 0x7F;
/// BitFramingReg: StartSend
pub const BIT_FRAMING_START_SEND: u8 = 0x80;
/// BitFramingReg / ControlReg: TxLastBits / RxLastBits
pub const LAST_BITS_MASK: u8 = 0x07;
/// TxControlReg: Tx1RFEn | Tx2RFEn
pub const ANTENNA_MASK: u8 = 0x03;
/// CommandReg: PowerDown, still set while the soft reset is running
pub const COMMAND_POWER_DOWN: u8 = 0x10;
/// SAK: cascade bit, UID not complete
pub const SAK_CASCADE: u8 = 0x04;

/// Short frame length used by REQA/WUPA
pub const SHORT_FRAME_BITS: u8 = 7;
