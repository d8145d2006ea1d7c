use std::fmt;

/// Zero-based line and column of a character in the source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Location { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    String,
    Numeric,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// A classified fragment of source text.
///
/// `value` is already normalized for its kind: keywords and unquoted
/// identifiers are lower-cased, strings and quoted identifiers keep their
/// inner text with escapes resolved, numerics and symbols are verbatim.
/// `location` points at the first character of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, location: Location) -> Self {
        Token {
            value: value.into(),
            kind,
            location,
        }
    }

    /// Compares value and kind, ignoring where the token was found.
    pub fn equals(&self, other: &Token) -> bool {
        self.value == other.value && self.kind == other.kind
    }
}
