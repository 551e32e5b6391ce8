// rfid2/src/transport/mod.rs

#[cfg(feature = "i2c")]
pub mod i2c;
pub mod mock;
pub mod traits;

#[cfg(feature = "i2c")]
pub use i2c::I2cBus;
pub use mock::{CardReply, MockBus, TransmittedFrame};
pub use traits::RegisterBus;
