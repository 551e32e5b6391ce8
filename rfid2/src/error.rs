// rfid2/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The underlying bus transaction failed. Never retried by the driver.
    #[error("bus error: {0}")]
    Bus(String),

    #[error("no register bus configured")]
    BusNotConfigured,

    #[error("operation timed out")]
    Timeout,

    #[error("frame error: error register={flags:#04x}")]
    FrameError { flags: u8 },

    #[error("short reply: expected at least {expected} bytes, got {actual}")]
    ShortReply { expected: usize, actual: usize },

    #[error("bcc mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch { expected: u8, actual: u8 },

    #[error("crc coprocessor timed out")]
    CrcTimeout,

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl Error {
    /// Failures of a single card exchange step. The ISO14443-A layer folds
    /// these into "no card"; everything else is propagated to the caller.
    pub fn is_exchange_failure(&self) -> bool {
        matches!(
            self,
            Error::Timeout
                | Error::FrameError { .. }
                | Error::ShortReply { .. }
                | Error::BccMismatch { .. }
                | Error::CrcTimeout
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
