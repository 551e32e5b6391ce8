// rfid2/src/pcd/reset.rs

use log::{debug, warn};

use super::{Pcd, Register};
use crate::constants::{ANTENNA_MASK, COMMAND_POWER_DOWN, PCD_SOFT_RESET};
use crate::utils::timeout::poll_until;
use crate::Result;

/// Register values written after a soft reset, in order.
///
/// Timer: TAuto, prescaler 0x0A9 (40 kHz), reload 0x03E8 (25 ms). TxASK
/// forces 100 % ASK. ModeReg presets the CRC coprocessor to 0x6363.
pub const INIT_SEQUENCE: [(Register, u8); 6] = [
    (Register::TimerMode, 0x80),
    (Register::TimerPrescaler, 0xA9),
    (Register::TimerReloadLow, 0xE8),
    (Register::TimerReloadHigh, 0x03),
    (Register::TxAsk, 0x40),
    (Register::Mode, 0x3D),
];

impl Pcd {
    /// Issue SoftReset and wait for PowerDown to clear. The wait is best
    /// effort: an expired deadline is logged, not reported.
    pub fn soft_reset(&mut self) -> Result<()> {
        let timeouts = self.config.timeouts;
        self.regs.write(Register::Command, PCD_SOFT_RESET)?;
        self.clock.sleep_ms(timeouts.reset_settle_ms);

        let regs = &mut self.regs;
        let ready = poll_until(
            &mut *self.clock,
            timeouts.reset_ms,
            timeouts.poll_interval_ms,
            || Ok(regs.read(Register::Command)? & COMMAND_POWER_DOWN == 0),
        )?;
        if !ready {
            warn!(
                "soft reset still running after {} ms, continuing",
                timeouts.reset_ms
            );
        }
        Ok(())
    }

    /// Enable both antenna drivers unless they already are.
    pub fn antenna_on(&mut self) -> Result<()> {
        let value = self.regs.read(Register::TxControl)?;
        if value & ANTENNA_MASK != ANTENNA_MASK {
            self.regs.set_bits(Register::TxControl, ANTENNA_MASK)?;
        }
        Ok(())
    }

    /// Full bring-up: reset, timer/modulation/CRC setup, antenna on.
    /// Replaying it on a running chip yields the same configuration.
    pub fn init_chip(&mut self) -> Result<()> {
        self.soft_reset()?;
        for (reg, value) in INIT_SEQUENCE {
            self.regs.write(reg, value)?;
        }
        self.antenna_on()?;
        debug!("reader initialized at {:#04x}", self.address().as_u8());
        Ok(())
    }
}
