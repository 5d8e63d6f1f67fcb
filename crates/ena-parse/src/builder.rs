use ena_errors::{ErrorCode, Position, Report};
use ena_syntax::{Host, Keyword, Node};
use ena_tokenizer::{Token, TokenKind, TokenList};

struct Builder<'t> {
    tokens: &'t TokenList,
    at: usize,
    report: Report,
}

impl<'t> Builder<'t> {
    fn new(tokens: &'t TokenList, at: usize) -> Self {
        Self { tokens, at, report: Report::ok() }
    }

    fn at_end(&self) -> bool {
        self.at >= self.tokens.len()
    }

    fn peek(&self) -> &'t Token {
        self.tokens.at(self.at)
    }

    fn advance(&mut self) {
        self.at += 1;
    }

    /// Only the first rejected token is recorded.
    fn error(&mut self, position: Position) {
        if self.report.is_ok() {
            self.report = Report::error(ErrorCode::UnexpectedToken, position);
        }
    }
}

/// Appends one node per accepted token to `dest`, starting at `*at`.
///
/// Block delimiters are not nested: they are flagged on the returned report
/// and skipped, and building carries on into the same `dest`. On return
/// `*at` equals the number of tokens.
pub fn walk(dest: &mut Host, tokens: &TokenList, at: &mut usize) -> Report {
    let mut b = Builder::new(tokens, *at);

    while !b.at_end() {
        let token = b.peek();
        match node(&token.kind) {
            Some(node) => dest.push(node),
            None => b.error(token.position),
        }
        b.advance();
    }

    *at = b.at;
    b.report
}

/// Builds a fresh program from the whole token list.
pub fn build(tokens: &TokenList) -> (Node, Report) {
    let mut host = Host::new();
    let mut at = 0;
    let report = walk(&mut host, tokens, &mut at);
    (Node::Program(host), report)
}

fn node(kind: &TokenKind) -> Option<Node> {
    let node = match kind {
        TokenKind::Number(value) => Node::number(*value),
        TokenKind::Identifier(text) => match Keyword::from_ident(text) {
            Some(keyword) => Node::keyword(keyword),
            None => Node::identifier(text.clone()),
        },
        TokenKind::EscapedIdentifier(text) => Node::escaped_identifier(text.clone()),
        TokenKind::String(text) => Node::string(text.clone()),
        TokenKind::BlockOpen | TokenKind::BlockClose | TokenKind::Null => return None,
    };
    Some(node)
}
