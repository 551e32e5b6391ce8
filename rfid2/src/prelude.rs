// rfid2/src/prelude.rs

pub use crate::device::{
    Config, CrcTimeoutPolicy, Device, DeviceBuilder, Initialized, Timeouts, Uninitialized,
};
pub use crate::picc::CardSelection;
pub use crate::transport::RegisterBus;
pub use crate::{Atqa, ChipVersion, DeviceAddress, Error, Result, Sak, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
