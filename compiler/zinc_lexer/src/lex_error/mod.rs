//! Fatal lexer errors.
//!
//! There are exactly two, and both end the scan: no resynchronization is
//! attempted and no further tokens are produced. The scanner surfaces them
//! as the `Err` arm of its per-call result; the caller's pull loop stops at
//! the first one.

use thiserror::Error;

/// A fatal lexical error.
///
/// Carries the byte offset and 1-based line where the condition was
/// detected, so a driver can render the offending source line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexError {
    /// The start state saw a byte outside every recognized class.
    #[error("unhandled character `{}` at offset {offset} (line {line})", printable(.byte))]
    UnhandledCharacter { byte: u8, offset: u32, line: u32 },

    /// A string literal reached end-of-input before its closing `"`.
    ///
    /// `offset` is the opening quote of the literal.
    #[error("string literal missing closing `\"` at end of input (started at offset {offset}, line {line})")]
    UnterminatedString { offset: u32, line: u32 },
}

impl LexError {
    /// Build an [`UnhandledCharacter`](Self::UnhandledCharacter) error.
    #[cold]
    pub(crate) fn unhandled_character(byte: u8, offset: u32, line: u32) -> Self {
        Self::UnhandledCharacter { byte, offset, line }
    }

    /// Build an [`UnterminatedString`](Self::UnterminatedString) error.
    #[cold]
    pub(crate) fn unterminated_string(offset: u32, line: u32) -> Self {
        Self::UnterminatedString { offset, line }
    }

    /// Byte offset the error points at.
    pub fn offset(&self) -> u32 {
        match self {
            Self::UnhandledCharacter { offset, .. } | Self::UnterminatedString { offset, .. } => {
                *offset
            }
        }
    }

    /// 1-based line the error points at.
    pub fn line(&self) -> u32 {
        match self {
            Self::UnhandledCharacter { line, .. } | Self::UnterminatedString { line, .. } => *line,
        }
    }
}

/// Render a byte for an error message: the character itself when printable
/// ASCII, a hex escape otherwise.
fn printable(byte: &u8) -> String {
    if byte.is_ascii_graphic() || *byte == b' ' {
        char::from(*byte).to_string()
    } else {
        format!("0x{byte:02X}")
    }
}
