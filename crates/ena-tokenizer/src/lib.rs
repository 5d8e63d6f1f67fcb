//! Scanner turning source text into a [`TokenList`].
//!
//! Scanning halts at the first lexical fault. The tokens emitted before the
//! fault are returned together with a [`Report`] locating it.

mod cursor;
mod list;
mod token;

use cursor::Cursor;
pub use ena_errors::{ErrorCode, Position, Report};
pub use list::TokenList;
pub use token::{Token, TokenKind};

/// Tokenizes `text` into a fresh list with the default capacity.
pub fn tokenize(text: &str) -> (TokenList, Report) {
    Tokenizer::with_capacity(text, TokenList::DEFAULT_CAPACITY).run()
}

pub struct Tokenizer<'text> {
    text: &'text str,
    cursor: Cursor<'text>,
    tokens: TokenList,
}

impl<'text> Tokenizer<'text> {
    pub fn new(text: &'text str) -> Self {
        Self::with_capacity(text, TokenList::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(text: &'text str, capacity: usize) -> Self {
        Self { text, cursor: Cursor::new(text), tokens: TokenList::with_capacity(capacity) }
    }

    /// Scans to the end of input or to the first fault.
    pub fn run(mut self) -> (TokenList, Report) {
        let report = match self.scan() {
            Ok(()) => Report::ok(),
            Err(report) => report,
        };
        (self.tokens, report)
    }

    fn scan(&mut self) -> Result<(), Report> {
        while !self.cursor.is_eof() {
            self.token()?;
        }
        Ok(())
    }

    fn token(&mut self) -> Result<(), Report> {
        let first_char = self.cursor.advance();
        let position = self.cursor.position();

        let kind = match first_char {
            '\n' => return Ok(()),
            '{' => TokenKind::BlockOpen,
            '}' => TokenKind::BlockClose,
            c if is_identifier(c) => TokenKind::Identifier(self.identifier_run(position)),
            '"' => TokenKind::String(self.string(position)?),
            '\'' => {
                let start = Position { offset: self.cursor.offset(), ..position };
                TokenKind::EscapedIdentifier(self.identifier_run(start))
            }
            c if is_whitespace(c) => return Ok(()),
            '0'..='9' => TokenKind::Number(self.number(position)?),
            _ => return Err(Report::error(ErrorCode::UnexpectedToken, position)),
        };

        self.tokens.push(Token::new(kind, position));
        Ok(())
    }

    /// Consumes the rest of an identifier run that began at `start`.
    fn identifier_run(&mut self, start: Position) -> Box<str> {
        self.cursor.advance_while(is_identifier);
        self.slice(start).into()
    }

    fn number(&mut self, start: Position) -> Result<f64, Report> {
        let mut had_point = false;

        loop {
            match self.cursor.peek() {
                '0'..='9' => {}
                '.' if !had_point => had_point = true,
                '.' => {
                    self.cursor.advance();
                    return Err(Report::error(
                        ErrorCode::UnexpectedNumericPoint,
                        self.cursor.position(),
                    ));
                }
                _ => break,
            }
            self.cursor.advance();
        }

        match self.slice(start).parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(Report::error(ErrorCode::UnexpectedToken, start)),
        }
    }

    /// Decodes a string literal whose opening quote is at `open`.
    fn string(&mut self, open: Position) -> Result<Box<str>, Report> {
        let unterminated = Report::error(ErrorCode::UnexpectedToken, open);
        let mut value = String::new();

        loop {
            if self.cursor.is_eof() {
                return Err(unterminated);
            }

            match self.cursor.advance() {
                '"' => break,
                '\\' => {
                    if self.cursor.is_eof() {
                        return Err(unterminated);
                    }
                    let escaped = self.cursor.advance();
                    let Some(decoded) = unescape(escaped) else {
                        return Err(Report::error(
                            ErrorCode::UnknownEscapeSequence,
                            self.cursor.position(),
                        ));
                    };
                    value.push(decoded);
                }
                c => value.push(c),
            }
        }

        Ok(value.into_boxed_str())
    }

    fn slice(&self, start: Position) -> &'text str {
        let range = usize::from(start.offset)..usize::from(self.cursor.offset());
        &self.text[range]
    }
}

/// Alphabetic characters and `. ? - _ + / *`.
pub fn is_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '.' | '?' | '-' | '_' | '+' | '/' | '*')
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0B' | '\x0C')
}

fn unescape(c: char) -> Option<char> {
    Some(match c {
        'n' => '\n',
        'r' => '\r',
        '"' => '"',
        'a' => '\x07',
        'e' => '\x1B',
        'f' => '\x0C',
        't' => '\t',
        'v' => '\x0B',
        '\\' => '\\',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use text_size::TextSize;

    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        let (tokens, report) = tokenize(text);
        assert!(report.is_ok(), "{text:?}: {report}");
        tokens.kinds().cloned().collect()
    }

    fn fault(text: &str) -> (Vec<TokenKind>, Report) {
        let (tokens, report) = tokenize(text);
        assert!(!report.is_ok(), "{text:?} tokenized without a fault");
        (tokens.kinds().cloned().collect(), report)
    }

    fn at(line: u32, column: u32, offset: u32) -> Position {
        Position::new(line, column, TextSize::new(offset))
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        for text in ["", " ", "\n\n", " \t\r\n\x0B\x0C ", "\t\n  \n"] {
            let (tokens, report) = tokenize(text);
            assert!(tokens.is_empty(), "{text:?}");
            assert_eq!(report.code, ErrorCode::None);
        }
    }

    #[test]
    fn decimal_number() {
        let (tokens, report) = tokenize("123.45");
        assert!(report.is_ok());
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens.at(0).kind, TokenKind::Number(123.45));
        assert_eq!(tokens.at(0).position, at(1, 1, 0));
    }

    #[test]
    fn number_with_trailing_point() {
        assert_eq!(kinds("12."), vec![TokenKind::Number(12.0)]);
        assert_eq!(kinds("7"), vec![TokenKind::Number(7.0)]);
    }

    #[test]
    fn second_numeric_point_is_a_fault() {
        let (tokens, report) = fault("12.3.4");
        assert!(tokens.is_empty());
        assert_eq!(report.code, ErrorCode::UnexpectedNumericPoint);
        assert_eq!(report.position, at(1, 5, 4));
        assert_eq!(report.to_string(), "unexpected numeric point at 1:5(5)");
    }

    #[test]
    fn number_stops_at_identifier_characters() {
        assert_eq!(
            kinds("12abc"),
            vec![TokenKind::Number(12.0), TokenKind::Identifier("abc".into())]
        );
    }

    #[test]
    fn identifier_run_covers_operator_characters() {
        assert_eq!(
            kinds("a.b?c-d_e+f/g*h"),
            vec![TokenKind::Identifier("a.b?c-d_e+f/g*h".into())]
        );
        assert_eq!(kinds("+"), vec![TokenKind::Identifier("+".into())]);
    }

    #[test]
    fn identifier_does_not_swallow_its_terminator() {
        assert_eq!(
            kinds("{foo}"),
            vec![
                TokenKind::BlockOpen,
                TokenKind::Identifier("foo".into()),
                TokenKind::BlockClose,
            ]
        );

        let (tokens, _) = tokenize("foo\nbar");
        assert_eq!(tokens.at(1).position, at(2, 1, 4));
    }

    #[test]
    fn delimiters_carry_their_position() {
        let (tokens, report) = tokenize("  {\n }");
        assert!(report.is_ok());
        assert_eq!(tokens.at(0), &Token::new(TokenKind::BlockOpen, at(1, 3, 2)));
        assert_eq!(tokens.at(1), &Token::new(TokenKind::BlockClose, at(2, 2, 5)));
    }

    #[test]
    fn string_escapes_decode_to_control_characters() {
        let text = r#""\n\r\"\a\e\f\t\v\\""#;
        assert_eq!(
            kinds(text),
            vec![TokenKind::String("\n\r\"\x07\x1B\x0C\t\x0B\\".into())]
        );
    }

    #[test]
    fn string_keeps_raw_content() {
        assert_eq!(kinds(r#""héllo world""#), vec![TokenKind::String("héllo world".into())]);
        assert_eq!(kinds(r#""""#), vec![TokenKind::String("".into())]);
    }

    #[test]
    fn unknown_escape_is_reported_at_the_escaped_character() {
        let (tokens, report) = fault(r#"x "ab\q""#);
        assert_eq!(tokens, vec![TokenKind::Identifier("x".into())]);
        assert_eq!(report.code, ErrorCode::UnknownEscapeSequence);
        assert_eq!(report.position, at(1, 7, 6));
    }

    #[test]
    fn unterminated_string_is_reported_at_the_opening_quote() {
        let (_, report) = fault("a \"open");
        assert_eq!(report, Report::error(ErrorCode::UnexpectedToken, at(1, 3, 2)));

        let (_, report) = fault("\"trailing\\");
        assert_eq!(report.position, at(1, 1, 0));
    }

    #[test]
    fn newline_inside_string_advances_line() {
        let (tokens, report) = tokenize("\"a\nb\" c");
        assert!(report.is_ok());
        assert_eq!(tokens.at(0).kind, TokenKind::String("a\nb".into()));
        assert_eq!(tokens.at(1).position, at(2, 4, 6));
    }

    #[test]
    fn escaped_identifier() {
        let (tokens, report) = tokenize("'if 'x");
        assert!(report.is_ok());
        assert_eq!(tokens.at(0), &Token::new(TokenKind::EscapedIdentifier("if".into()), at(1, 1, 0)));
        assert_eq!(tokens.at(1), &Token::new(TokenKind::EscapedIdentifier("x".into()), at(1, 5, 4)));
    }

    #[test]
    fn lone_quote_is_an_empty_escaped_identifier() {
        assert_eq!(
            kinds("' 1"),
            vec![TokenKind::EscapedIdentifier("".into()), TokenKind::Number(1.0)]
        );
    }

    #[test]
    fn unknown_character_halts_scanning() {
        let (tokens, report) = fault("ok\n  a # b");
        assert_eq!(
            tokens,
            vec![TokenKind::Identifier("ok".into()), TokenKind::Identifier("a".into())]
        );
        assert_eq!(report.code, ErrorCode::UnexpectedToken);
        assert_eq!(report.position, at(2, 5, 7));
        assert_eq!(report.to_string(), "unexpected token at 2:5(8)");
    }

    #[test]
    fn non_ascii_outside_strings_is_unexpected() {
        let (_, report) = fault("é");
        assert_eq!(report.position, at(1, 1, 0));
    }

    #[test]
    fn nul_terminates_the_source() {
        assert_eq!(kinds("a\0#"), vec![TokenKind::Identifier("a".into())]);
    }

    #[test]
    fn mixed_program() {
        let text = "if x {\n  print \"yes\" 'done 3.5\n}";
        let (tokens, report) = tokenize(text);
        assert!(report.is_ok());

        let dump = tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
        assert_eq!(
            dump,
            [
                r#"1:1 IDENTIFIER "if""#,
                r#"1:4 IDENTIFIER "x""#,
                "1:6 BLOCK_OPEN",
                r#"2:3 IDENTIFIER "print""#,
                r#"2:9 STRING "yes""#,
                r#"2:15 ESCAPED_IDENTIFIER "done""#,
                "2:21 NUMBER 3.5",
                "3:1 BLOCK_CLOSE",
            ]
            .join("\n")
        );
    }
}
