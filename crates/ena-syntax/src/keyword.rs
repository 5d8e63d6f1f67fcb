use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    If,
    Unless,
    While,
}

impl Keyword {
    pub const ALL: [Self; 3] = [Self::If, Self::Unless, Self::While];

    /// Matches the full text of an identifier against the reserved words.
    pub fn from_ident(text: &str) -> Option<Self> {
        match text {
            "if" => Some(Self::If),
            "unless" => Some(Self::Unless),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Unless => "unless",
            Self::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
