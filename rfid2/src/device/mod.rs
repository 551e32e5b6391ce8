// rfid2/src/device/mod.rs
//! Public reader surface: configuration, builder and the type-state
//! [`Device`] handle.

pub mod builder;
pub mod config;
mod handle;

pub use builder::DeviceBuilder;
pub use config::{Config, CrcTimeoutPolicy, Timeouts};
pub use handle::{Device, Initialized, Uninitialized};
