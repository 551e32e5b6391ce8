//! Small, reusable helpers: hex formatting for UIDs and logs, and the
//! clock/poll primitives behind every chip wait.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
