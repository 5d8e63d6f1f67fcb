use ena_errors::fatal;

use crate::{Token, TokenKind};

static NULL_TOKEN: Token = Token::NULL;

/// Ordered, index-addressable token storage.
///
/// Capacity doubles whenever a push would overflow it, so appends are
/// amortized O(1). Growth failures are fatal, see [`ena_errors::fatal`].
#[derive(Debug, Clone)]
pub struct TokenList {
    tokens: Vec<Token>,
    capacity: usize,
}

impl TokenList {
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty list. A zero `capacity` is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut list = Self { tokens: Vec::new(), capacity: 0 };
        list.reallocate(capacity.max(1));
        list
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, token: Token) {
        if self.tokens.len() == self.capacity {
            self.reallocate(fatal::doubled(self.capacity));
        }
        self.tokens.push(token);
    }

    /// Grows the backing storage to hold `capacity` tokens. Never shrinks
    /// below the current length.
    pub fn reallocate(&mut self, capacity: usize) {
        fatal::reserve(&mut self.tokens, capacity, "TokenList::reallocate");
        self.capacity = capacity.max(self.tokens.len());
    }

    /// Token at `index`, or the null sentinel when out of bounds.
    pub fn at(&self, index: usize) -> &Token {
        self.tokens.get(index).unwrap_or(&NULL_TOKEN)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn kinds(&self) -> impl Iterator<Item = &TokenKind> {
        self.tokens.iter().map(|token| &token.kind)
    }

    /// Empties the list and releases its storage.
    ///
    /// With `free_payloads` the tokens are dropped here; otherwise they are
    /// handed back and the caller owns their payloads. Disposing twice is a
    /// no-op the second time.
    pub fn dispose(&mut self, free_payloads: bool) -> Vec<Token> {
        self.capacity = 0;
        let tokens = std::mem::take(&mut self.tokens);
        if free_payloads { Vec::new() } else { tokens }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
