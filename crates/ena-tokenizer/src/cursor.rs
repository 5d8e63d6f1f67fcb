use std::str::Chars;

use ena_errors::Position;
use text_size::{TextLen, TextSize};

/// Returned past the end of input. A literal `\0` in the text also ends it.
pub(crate) const EOF_CHAR: char = '\0';

pub(crate) struct Cursor<'text> {
    chars: Chars<'text>,
    len: TextSize,
    line: u32,
    column: u32,
    position: Position,
}

impl<'text> Cursor<'text> {
    pub(crate) fn new(text: &'text str) -> Self {
        Self { chars: text.chars(), len: text.text_len(), line: 1, column: 0, position: Position::NONE }
    }

    /// Byte offset of the next character.
    pub(crate) fn offset(&self) -> TextSize {
        self.len - TextSize::new(self.chars.as_str().len() as u32)
    }

    /// Position of the most recently consumed character.
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.peek() == EOF_CHAR
    }

    pub(crate) fn advance(&mut self) -> char {
        let offset = self.offset();
        let Some(c) = self.chars.next() else {
            return EOF_CHAR;
        };

        self.column += 1;
        self.position = Position::new(self.line, self.column, offset);

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        }

        c
    }

    pub(crate) fn advance_while(&mut self, f: impl Fn(char) -> bool + Copy) {
        while !self.is_eof() && f(self.peek()) {
            self.advance();
        }
    }
}
