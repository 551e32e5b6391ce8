// rfid2/src/device/config.rs

use crate::types::DeviceAddress;

/// Pause after issuing SoftReset before the first poll
pub const RESET_SETTLE_MS: u64 = 50;
/// Overall deadline for the PowerDown bit to clear after SoftReset
pub const RESET_TIMEOUT_MS: u64 = 100;
/// Deadline for the CRC coprocessor
pub const CRC_TIMEOUT_MS: u64 = 25;
/// Deadline for a transceive to complete
pub const TRANSCEIVE_TIMEOUT_MS: u64 = 30;
/// Pause between two polls of a status register
pub const POLL_INTERVAL_MS: u64 = 1;

/// Deadlines and poll granularity for every chip wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeouts {
    pub reset_settle_ms: u64,
    pub reset_ms: u64,
    pub crc_ms: u64,
    pub transceive_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            reset_settle_ms: RESET_SETTLE_MS,
            reset_ms: RESET_TIMEOUT_MS,
            crc_ms: CRC_TIMEOUT_MS,
            transceive_ms: TRANSCEIVE_TIMEOUT_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

/// What to do when CRCIRq does not show up before the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrcTimeoutPolicy {
    /// Report [`crate::Error::CrcTimeout`].
    #[default]
    Fail,
    /// Read the result registers anyway, whatever they hold.
    ReadAnyway,
}

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub address: DeviceAddress,
    pub timeouts: Timeouts,
    pub crc_timeout: CrcTimeoutPolicy,
    /// Reject anticollision replies whose BCC is not the XOR of the UID
    pub verify_bcc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DeviceAddress::DEFAULT,
            timeouts: Timeouts::default(),
            crc_timeout: CrcTimeoutPolicy::default(),
            verify_bcc: true,
        }
    }
}

impl Config {
    pub fn with_address(mut self, address: impl Into<DeviceAddress>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_crc_timeout(mut self, policy: CrcTimeoutPolicy) -> Self {
        self.crc_timeout = policy;
        self
    }

    pub fn with_verify_bcc(mut self, verify: bool) -> Self {
        self.verify_bcc = verify;
        self
    }
}
