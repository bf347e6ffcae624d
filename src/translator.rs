//! # Mnemonic Translator
//!
//! A small one-pass translator from `MNEMONIC [operand]` text to machine
//! code. There are no labels, directives or expressions; it exists to write
//! short test programs without hand-encoding opcodes.
//!
//! ## Operand Syntax
//!
//! | Syntax | Mode |
//! |--------|------|
//! | *(none)* | implicit, used whenever the mnemonic has that form |
//! | `$HH` after a branch | relative |
//! | `#HH`, `#$HH` | immediate |
//! | `A` | accumulator |
//! | `$HH`, `$HH,X`, `$HH,Y` | zero page, indexed |
//! | `$HHHH`, `$HHHH,X`, `$HHHH,Y` | absolute, indexed |
//! | `($HH,X)` | indexed indirect |
//! | `($HH),Y` | indirect indexed |
//! | `($HHHH)` | indirect |
//!
//! Opcodes come from a reverse lookup in
//! [`INSTRUCTION_TABLE`](crate::INSTRUCTION_TABLE), so the translator can
//! never disagree with the decoder.

use thiserror::Error;

use crate::addressing::AddressingMode;
use crate::opcodes::{encode, Operation};

/// Error returned when translation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("unknown mnemonic {0:?}")]
    UnknownMnemonic(String),

    #[error("{0} needs an operand")]
    MissingOperand(Operation),

    #[error("invalid operand {operand:?} for {operation}")]
    InvalidOperand {
        operation: Operation,
        operand: String,
    },

    #[error("{operation} has no {mode} form")]
    UnsupportedMode {
        operation: Operation,
        mode: AddressingMode,
    },
}

/// Parsed operand: the addressing mode it selects and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Operand {
    mode: AddressingMode,
    value: u16,
}

/// Translates program text into machine code.
///
/// ```
/// use emu6502::translate;
///
/// let bytes = translate("LDX #$21 STX $0400").unwrap();
/// assert_eq!(bytes, vec![0xA2, 0x21, 0x8E, 0x00, 0x04]);
/// ```
pub fn translate(source: &str) -> Result<Vec<u8>, TranslateError> {
    let mut tokens = source.split_whitespace();
    let mut bytes = Vec::new();

    while let Some(token) = tokens.next() {
        let operation = Operation::from_mnemonic(token)
            .ok_or_else(|| TranslateError::UnknownMnemonic(token.to_string()))?;

        if let Some(opcode) = encode(operation, AddressingMode::Implicit) {
            bytes.push(opcode);
            continue;
        }

        let text = tokens
            .next()
            .ok_or(TranslateError::MissingOperand(operation))?;
        let operand = if operation.is_branch() {
            parse_relative(text)
        } else {
            parse_operand(text)
        }
        .ok_or_else(|| TranslateError::InvalidOperand {
            operation,
            operand: text.to_string(),
        })?;

        let opcode = encode(operation, operand.mode).ok_or(TranslateError::UnsupportedMode {
            operation,
            mode: operand.mode,
        })?;

        bytes.push(opcode);
        match operand.mode.operand_bytes() {
            1 => bytes.push(operand.value as u8),
            2 => bytes.extend_from_slice(&operand.value.to_le_bytes()),
            _ => {}
        }
    }

    Ok(bytes)
}

/// Translates program text into loader-compatible `0xHH` tokens.
///
/// ```
/// use emu6502::translate_to_hex;
///
/// assert_eq!(translate_to_hex("INX BNE $FD").unwrap(), "0xE8 0xD0 0xFD");
/// ```
pub fn translate_to_hex(source: &str) -> Result<String, TranslateError> {
    let bytes = translate(source)?;
    let tokens: Vec<String> = bytes.iter().map(|b| format!("0x{b:02X}")).collect();
    Ok(tokens.join(" "))
}

fn parse_relative(text: &str) -> Option<Operand> {
    let value = hex_exact(text.strip_prefix('$')?, 2)?;
    Some(Operand {
        mode: AddressingMode::Relative,
        value,
    })
}

fn parse_operand(text: &str) -> Option<Operand> {
    if text.eq_ignore_ascii_case("A") {
        return Some(Operand {
            mode: AddressingMode::Accumulator,
            value: 0,
        });
    }

    if let Some(imm) = text.strip_prefix('#') {
        let digits = imm.strip_prefix('$').unwrap_or(imm);
        return Some(Operand {
            mode: AddressingMode::Immediate,
            value: hex_exact(digits, 2)?,
        });
    }

    if let Some(inner) = text.strip_prefix("($") {
        return parse_indirect(inner);
    }

    let body = text.strip_prefix('$')?;
    let (digits, index) = split_index(body);
    let (zero_page, absolute) = match index {
        None => (AddressingMode::ZeroPage, AddressingMode::Absolute),
        Some('X') => (AddressingMode::ZeroPageX, AddressingMode::AbsoluteX),
        Some(_) => (AddressingMode::ZeroPageY, AddressingMode::AbsoluteY),
    };

    match digits.len() {
        2 => Some(Operand {
            mode: zero_page,
            value: hex_exact(digits, 2)?,
        }),
        4 => Some(Operand {
            mode: absolute,
            value: hex_exact(digits, 4)?,
        }),
        _ => None,
    }
}

fn parse_indirect(inner: &str) -> Option<Operand> {
    let upper = inner.to_ascii_uppercase();

    if let Some(digits) = upper.strip_suffix(",X)") {
        return Some(Operand {
            mode: AddressingMode::IndirectX,
            value: hex_exact(digits, 2)?,
        });
    }
    if let Some(digits) = upper.strip_suffix("),Y") {
        return Some(Operand {
            mode: AddressingMode::IndirectY,
            value: hex_exact(digits, 2)?,
        });
    }

    let digits = upper.strip_suffix(')')?;
    Some(Operand {
        mode: AddressingMode::Indirect,
        value: hex_exact(digits, 4)?,
    })
}

/// Splits a trailing `,X` / `,Y` (any case) off `body`.
fn split_index(body: &str) -> (&str, Option<char>) {
    for (suffix, index) in [(",X", 'X'), (",x", 'X'), (",Y", 'Y'), (",y", 'Y')] {
        if let Some(digits) = body.strip_suffix(suffix) {
            return (digits, Some(index));
        }
    }
    (body, None)
}

/// Parses exactly `len` hex digits.
fn hex_exact(digits: &str, len: usize) -> Option<u16> {
    if digits.len() != len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}
