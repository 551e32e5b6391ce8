//! Hexadecimal helpers for UIDs and frame logging.

use std::fmt::Write;

/// Lowercase hex, exactly two digits per byte, no separators.
///
/// Example: `&[0xab, 0x01]` -> `"ab01"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        // formatting into a String cannot fail
        let _ = write!(out, "{:02x}", b);
        out
    })
}

/// Same digits as [`bytes_to_hex`], one space between bytes. Used when
/// logging frames.
///
/// Example: `&[0x93, 0x20]` -> `"93 20"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes. ASCII whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
