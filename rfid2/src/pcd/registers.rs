// rfid2/src/pcd/registers.rs

/// Register map subset used by the driver (MFRC522/PN512 layout).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Command = 0x01,
    ComIrq = 0x04,
    DivIrq = 0x05,
    Error = 0x06,
    FifoData = 0x09,
    FifoLevel = 0x0A,
    Control = 0x0C,
    BitFraming = 0x0D,
    Mode = 0x11,
    TxControl = 0x14,
    TxAsk = 0x15,
    CrcResultHigh = 0x21,
    CrcResultLow = 0x22,
    TimerMode = 0x2A,
    TimerPrescaler = 0x2B,
    TimerReloadHigh = 0x2C,
    TimerReloadLow = 0x2D,
    Version = 0x37,
}

impl Register {
    /// Every register, in address order. FIFO data is left out because
    /// reading it consumes a byte.
    pub const DUMPABLE: [Register; 17] = [
        Register::Command,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::FifoLevel,
        Register::Control,
        Register::BitFraming,
        Register::Mode,
        Register::TxControl,
        Register::TxAsk,
        Register::CrcResultHigh,
        Register::CrcResultLow,
        Register::TimerMode,
        Register::TimerPrescaler,
        Register::TimerReloadHigh,
        Register::TimerReloadLow,
        Register::Version,
    ];

    pub const fn addr(self) -> u8 {
        self as u8
    }
}
