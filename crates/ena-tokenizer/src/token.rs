use std::fmt;

use ena_errors::Position;

/// Token variant together with the payload it owns.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Identifier(Box<str>),
    String(Box<str>),
    EscapedIdentifier(Box<str>),
    BlockOpen,
    BlockClose,
    /// Returned for out-of-range lookups; never produced by the tokenizer.
    Null,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NUMBER",
            Self::Identifier(_) => "IDENTIFIER",
            Self::String(_) => "STRING",
            Self::EscapedIdentifier(_) => "ESCAPED_IDENTIFIER",
            Self::BlockOpen => "BLOCK_OPEN",
            Self::BlockClose => "BLOCK_CLOSE",
            Self::Null => "NULL",
        }
    }

    pub fn number(&self) -> Option<f64> {
        match *self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Identifier(text) | Self::String(text) | Self::EscapedIdentifier(text) => {
                Some(text)
            }
            _ => None,
        }
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self, Self::BlockOpen | Self::BlockClose)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub const NULL: Self = Self { kind: TokenKind::Null, position: Position::NONE };

    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, TokenKind::Null)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.position.line, self.position.column, self.kind.name())?;
        match &self.kind {
            TokenKind::Number(value) => write!(f, " {value}"),
            TokenKind::Identifier(text)
            | TokenKind::String(text)
            | TokenKind::EscapedIdentifier(text) => write!(f, " {text:?}"),
            TokenKind::BlockOpen | TokenKind::BlockClose | TokenKind::Null => Ok(()),
        }
    }
}
