// rfid2/src/lib.rs

//! rfid2
//!
//! Driver for MFRC522/PN512-compatible contactless front-ends (such as the
//! WS1850S in the M5Stack RFID2 unit) on a register-addressed I2C bus. It
//! detects ISO14443-A cards and reads the 4-byte UID at cascade level 1.

pub mod constants;
pub mod device;
pub mod error;
pub mod pcd;
pub mod picc;
pub mod prelude;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are reachable from every module.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
