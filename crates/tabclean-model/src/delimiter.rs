//! Field delimiters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Field separator of a delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Tab,
    Comma,
    Pipe,
    Semicolon,
    /// Any other single ASCII byte, only chosen explicitly by the user.
    Custom(u8),
}

impl Delimiter {
    /// Delimiters considered during detection, in tie-break precedence order.
    pub const DETECTABLE: [Delimiter; 4] = [
        Delimiter::Tab,
        Delimiter::Comma,
        Delimiter::Pipe,
        Delimiter::Semicolon,
    ];

    /// Maps a byte to its named variant, falling back to `Custom`.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\t' => Self::Tab,
            b',' => Self::Comma,
            b'|' => Self::Pipe,
            b';' => Self::Semicolon,
            other => Self::Custom(other),
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
            Self::Pipe => b'|',
            Self::Semicolon => b';',
            Self::Custom(byte) => byte,
        }
    }

    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }

    /// Format token printed by the identifier (`TSV`, `CSV`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Tab => "TSV",
            Self::Comma => "CSV",
            Self::Pipe => "PIPE",
            Self::Semicolon => "SEMICOLON",
            Self::Custom(_) => "CUSTOM",
        }
    }

    /// Quoted, escaped rendering for human-readable output, e.g. `'\t'`.
    pub fn escaped(self) -> String {
        format!("'{}'", self.as_char().escape_default())
    }

    /// Parses a user-supplied delimiter.
    ///
    /// Accepts a single ASCII character, the escapes `\t` and `\\`, or one of
    /// the words `tab`, `comma`, `pipe`, `semicolon` (case-insensitive).
    /// Quote characters and line breaks cannot separate fields and are
    /// rejected.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = |reason| ModelError::InvalidDelimiter {
            value: value.to_string(),
            reason,
        };

        match value.to_ascii_lowercase().as_str() {
            "\\t" | "tab" | "tsv" => return Ok(Self::Tab),
            "\\\\" => return Ok(Self::Custom(b'\\')),
            "comma" | "csv" => return Ok(Self::Comma),
            "pipe" => return Ok(Self::Pipe),
            "semicolon" => return Ok(Self::Semicolon),
            _ => {}
        }

        let mut chars = value.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(invalid("expected a single character"));
        };
        if !ch.is_ascii() {
            return Err(invalid("delimiter must be an ASCII character"));
        }
        match ch {
            '"' => Err(invalid("the quote character cannot be a delimiter")),
            '\r' | '\n' => Err(invalid("line breaks cannot be a delimiter")),
            _ => Ok(Self::from_byte(ch as u8)),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
