use std::fmt;

use text_size::{TextRange, TextSize};
use thiserror::Error;

use crate::Diagnostic;

/// Location of a character in the source text.
///
/// `line` is 1-based. `column` is 1-based within the line and counts
/// characters, `offset` is the 0-based byte index into the whole text.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: TextSize,
}

impl Position {
    /// Position carried by the null sentinel token.
    pub const NONE: Self = Self { line: 0, column: 0, offset: TextSize::new(0) };

    pub const fn new(line: u32, column: u32, offset: TextSize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.line, self.column, u32::from(self.offset) + 1)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Error)]
pub enum ErrorCode {
    #[default]
    #[error("ok")]
    None,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("unexpected numeric point")]
    UnexpectedNumericPoint,
    #[error("unknown escape sequence")]
    UnknownEscapeSequence,
}

/// Result record of a tokenizer or builder run.
///
/// A syntax fault is an ordinary value: whatever was produced before the
/// fault stays valid and is handed back next to the report.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Error)]
#[error("{code} at {position}")]
pub struct Report {
    pub code: ErrorCode,
    pub position: Position,
}

impl Report {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn error(code: ErrorCode, position: Position) -> Self {
        Self { code, position }
    }

    pub fn is_ok(&self) -> bool {
        self.code == ErrorCode::None
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }

    /// Builds a diagnostic pointing at the offending character of `text`.
    ///
    /// Returns `None` for a successful run.
    pub fn to_diagnostic(&self, text: &str) -> Option<Diagnostic> {
        if self.is_ok() {
            return None;
        }

        let start = usize::from(self.position.offset).min(text.len());
        let len = text[start..].chars().next().map_or(0, char::len_utf8);
        let range = TextRange::at(self.position.offset, TextSize::new(len as u32));

        Some(Diagnostic::error(self.code.to_string(), range))
    }
}
