// rfid2/src/types.rs

use crate::constants::{
    ADDRESS_MASK, ADDRESS_MAX, ADDRESS_MIN, DEFAULT_ADDRESS, SAK_CASCADE,
};
use crate::Error;
use std::convert::TryFrom;
use std::str::FromStr;

/// 7-bit bus address of the reader chip. Always masked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceAddress(u8);

impl DeviceAddress {
    pub const DEFAULT: Self = Self(DEFAULT_ADDRESS);

    /// Values outside 7 bits are masked into range, never rejected.
    pub const fn new(addr: u8) -> Self {
        Self(addr & ADDRESS_MASK)
    }

    /// Build an address from a high (0..=7) and low (0..=F) nibble.
    /// Reserved addresses fall back to [`DeviceAddress::DEFAULT`].
    pub fn from_nibbles(hi: u8, lo: u8) -> Self {
        let a = ((hi & 0x7) << 4) | (lo & 0xF);
        if !(ADDRESS_MIN..=ADDRESS_MAX).contains(&a) {
            return Self::DEFAULT;
        }
        Self(a)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for DeviceAddress {
    fn from(addr: u8) -> Self {
        Self::new(addr)
    }
}

/// UID - Newtype Pattern (4 バイト, single cascade level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 4]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Block check character: XOR of the four UID bytes
    pub fn bcc(&self) -> u8 {
        self.0.iter().fold(0u8, |acc, &b| acc ^ b)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(&bytes[..4]);
        Ok(Self(arr))
    }
}

impl FromStr for Uid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidHex)?;
        Self::try_from(&bytes[..])
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// ATQA - answer to REQA/WUPA (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Atqa {
    type Error = Error;

    /// Cards may append more bytes than the ATQA; only the first two are kept.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 2 {
            return Err(Error::ShortReply {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// SAK - select acknowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sak(u8);

impl Sak {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// UID not complete, another cascade level follows
    pub fn is_cascade(&self) -> bool {
        self.0 & SAK_CASCADE != 0
    }
}

/// Best-effort classification of the version register
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ChipVersion {
    #[display(fmt = "FM17522")]
    Fm17522,
    #[display(fmt = "MFRC522 v0.0")]
    Mfrc522V0,
    #[display(fmt = "MFRC522 v1.0")]
    Mfrc522V1,
    #[display(fmt = "MFRC522 v2.0")]
    Mfrc522V2,
    #[display(fmt = "counterfeit ({:#04x})", _0)]
    Counterfeit(u8),
    #[display(fmt = "unknown ({:#04x})", _0)]
    Unknown(u8),
}

impl ChipVersion {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x88 => Self::Fm17522,
            0x90 => Self::Mfrc522V0,
            0x91 => Self::Mfrc522V1,
            0x92 => Self::Mfrc522V2,
            0x12 => Self::Counterfeit(raw),
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            Self::Fm17522 => 0x88,
            Self::Mfrc522V0 => 0x90,
            Self::Mfrc522V1 => 0x91,
            Self::Mfrc522V2 => 0x92,
            Self::Counterfeit(v) | Self::Unknown(v) => *v,
        }
    }
}
