//! # Program Loader
//!
//! Turns a whitespace-separated stream of hexadecimal byte tokens into
//! memory contents. Tokens may carry a `0x`/`0X` prefix:
//!
//! ```text
//! 0xA2 0x21 8E 00 04
//! ```
//!
//! Parsing happens before anything is written, so a rejected program leaves
//! memory untouched.

use log::debug;
use thiserror::Error;

use crate::MemoryBus;

/// Error returned when a program text cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Token is not a hexadecimal number.
    #[error("token {index} ({token:?}) is not a hex byte")]
    InvalidToken { index: usize, token: String },

    /// Token parsed but does not fit in a byte.
    #[error("token {index} ({token:?}) is larger than 0xFF")]
    ValueOutOfRange { index: usize, token: String },

    /// Program would run past 0xFFFF.
    #[error("{len} bytes at ${start:04X} run past the end of memory")]
    ProgramTooLarge { start: u16, len: usize },
}

/// Parses program text into bytes.
///
/// ```
/// use emu6502::parse_program;
///
/// assert_eq!(parse_program("0xA9 1 ff").unwrap(), vec![0xA9, 0x01, 0xFF]);
/// assert!(parse_program("A9 100").is_err());
/// ```
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect()
}

fn parse_token(index: usize, token: &str) -> Result<u8, LoadError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LoadError::InvalidToken {
            index,
            token: token.to_string(),
        });
    }

    // Leading zeros are allowed, so only the significant digits decide range.
    let significant = digits.trim_start_matches('0');
    if significant.len() > 2 {
        return Err(LoadError::ValueOutOfRange {
            index,
            token: token.to_string(),
        });
    }

    let low_digits = &digits[digits.len().saturating_sub(2)..];
    u8::from_str_radix(low_digits, 16).map_err(|_| LoadError::InvalidToken {
        index,
        token: token.to_string(),
    })
}

/// Parses `text` and writes it to `bus` starting at `start`.
///
/// Returns the number of bytes written.
pub fn load_program<M: MemoryBus + ?Sized>(
    bus: &mut M,
    start: u16,
    text: &str,
) -> Result<usize, LoadError> {
    let bytes = parse_program(text)?;

    if start as usize + bytes.len() > 0x1_0000 {
        return Err(LoadError::ProgramTooLarge {
            start,
            len: bytes.len(),
        });
    }

    for (addr, &byte) in (start..=u16::MAX).zip(&bytes) {
        bus.write(addr, byte);
    }

    debug!("loaded {} bytes at ${:04X}", bytes.len(), start);
    Ok(bytes.len())
}
