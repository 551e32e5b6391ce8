#![cfg(feature = "i2c")]

//! Poll an RFID2 unit on a Raspberry Pi I2C bus and print card UIDs.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p rfid2 --example read_uid --features i2c

use std::thread;
use std::time::Duration;

use anyhow::Context;
use rfid2::prelude::*;
use rfid2::transport::I2cBus;
use rppal::i2c::I2c;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let i2c = I2c::new().context("opening I2C bus")?;
    let mut reader = DeviceBuilder::new()
        .with_bus(Box::new(I2cBus::new(i2c)))
        .build()
        .context("initializing reader")?;

    println!(
        "Reader at {:#04x}: {}",
        reader.address().as_u8(),
        reader.chip_version()?
    );

    loop {
        match reader.select_card()? {
            Some(card) => println!("UID {} (SAK {:#04x})", card.uid, card.sak.as_u8()),
            None => thread::sleep(Duration::from_millis(200)),
        }
    }
}
