use bytes::{BufMut, BytesMut};
use tracing::{debug, trace};

use super::{
    cursor::Cursor,
    error::{LexError, Result},
    keywords::{KEYWORDS, SYMBOLS},
    matcher::longest_match,
    token::{Token, TokenKind},
};

/// Outcome of a strategy that claimed the text at the cursor.
///
/// `token` is `None` for input that is consumed but produces nothing (whitespace).
#[derive(Debug)]
pub struct Scanned {
    pub token: Option<Token>,
    pub cursor: Cursor,
}

impl Scanned {
    fn token(token: Token, cursor: Cursor) -> Self {
        Scanned {
            token: Some(token),
            cursor,
        }
    }

    fn skip(cursor: Cursor) -> Self {
        Scanned {
            token: None,
            cursor,
        }
    }
}

/// Tries to recognize one token at the cursor. Returns `None` to decline,
/// in which case nothing was consumed.
pub type ScanFn = fn(&str, Cursor) -> Option<Scanned>;

// Keyword must run before identifier, otherwise `select` would come out as an identifier.
const SCANNERS: [ScanFn; 5] = [
    lex_keyword,
    lex_symbol,
    lex_string,
    lex_numeric,
    lex_identifier,
];

pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    cursor: Cursor,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            tokens: Vec::new(),
            cursor: Cursor::default(),
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>> {
        while !self.cursor.is_at_end(self.source) {
            self.scan_token()?;
        }
        debug!(count = self.tokens.len(), "lexed source");
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<()> {
        for scan in SCANNERS {
            if let Some(Scanned { token, cursor }) = scan(self.source, self.cursor) {
                debug_assert!(cursor.pointer > self.cursor.pointer);
                self.cursor = cursor;
                if let Some(token) = token {
                    trace!(
                        kind = %token.kind,
                        value = %token.value,
                        line = token.location.line,
                        col = token.location.col,
                        "token"
                    );
                    self.tokens.push(token);
                }
                return Ok(());
            }
        }

        let hint = self.tokens.last().map(|t| t.value.clone());
        debug!(location = %self.cursor.loc, ?hint, "no strategy matched");
        Err(LexError::unlexable(self.cursor.loc, hint))
    }
}

/// Splits `source` into tokens, or fails at the first position nothing recognizes.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_tokens()
}

pub fn lex_keyword(source: &str, ic: Cursor) -> Option<Scanned> {
    let keyword = longest_match(source, ic, KEYWORDS)?;
    let mut cur = ic;
    cur.advance(keyword.len());
    Some(Scanned::token(
        Token::new(keyword, TokenKind::Keyword, ic.loc),
        cur,
    ))
}

/// Skips one whitespace character, or matches a symbol.
pub fn lex_symbol(source: &str, ic: Cursor) -> Option<Scanned> {
    let mut cur = ic;
    match cur.current(source)? {
        b'\n' => {
            cur.newline();
            return Some(Scanned::skip(cur));
        }
        b'\t' | b' ' => {
            cur.advance(1);
            return Some(Scanned::skip(cur));
        }
        _ => {}
    }

    let symbol = longest_match(source, ic, SYMBOLS)?;
    cur.advance(symbol.len());
    Some(Scanned::token(
        Token::new(symbol, TokenKind::Symbol, ic.loc),
        cur,
    ))
}

pub fn lex_string(source: &str, ic: Cursor) -> Option<Scanned> {
    lex_character_delimited(source, ic, b'\'', TokenKind::String)
}

/// Lexes text wrapped in `delimiter`. A doubled delimiter inside the text
/// stands for one literal delimiter (`'here''s'` is `here's`).
fn lex_character_delimited(
    source: &str,
    ic: Cursor,
    delimiter: u8,
    kind: TokenKind,
) -> Option<Scanned> {
    let mut cur = ic;
    if cur.current(source)? != delimiter {
        return None;
    }
    cur.advance(1);

    let mut value = BytesMut::new();
    while let Some(c) = cur.current(source) {
        if c == delimiter {
            if cur.peek(source) != Some(delimiter) {
                cur.advance(1);
                let value = String::from_utf8(value.to_vec()).ok()?;
                return Some(Scanned::token(Token::new(value, kind, ic.loc), cur));
            }
            value.put_u8(delimiter);
            cur.advance(2);
            continue;
        }
        value.put_u8(c);
        cur.advance(1);
    }

    // Unterminated
    None
}

pub fn lex_numeric(source: &str, ic: Cursor) -> Option<Scanned> {
    let mut cur = ic;
    let mut period_found = false;
    let mut exp_marker_found = false;
    let mut digit_found = false;

    while let Some(c) = cur.current(source) {
        let is_digit = c.is_ascii_digit();
        let is_period = c == b'.';
        let is_exp_marker = c == b'e';

        if cur.pointer == ic.pointer {
            if !is_digit && !is_period {
                return None;
            }
            period_found = is_period;
            digit_found = is_digit;
            cur.advance(1);
            continue;
        }

        if is_period {
            if period_found {
                return None;
            }
            period_found = true;
            cur.advance(1);
            continue;
        }

        if is_exp_marker {
            if exp_marker_found {
                return None;
            }
            // No periods after the exponent marker
            period_found = true;
            exp_marker_found = true;

            if cur.pointer == source.len() - 1 {
                return None;
            }
            cur.advance(1);
            if matches!(cur.current(source), Some(b'-' | b'+')) {
                cur.advance(1);
            }
            continue;
        }

        if !is_digit {
            break;
        }
        digit_found = true;
        cur.advance(1);
    }

    if cur.pointer == ic.pointer || !digit_found {
        return None;
    }

    Some(Scanned::token(
        Token::new(&source[ic.pointer..cur.pointer], TokenKind::Numeric, ic.loc),
        cur,
    ))
}

/// Lexes a double-quoted identifier verbatim, or a bare identifier folded to lower case.
pub fn lex_identifier(source: &str, ic: Cursor) -> Option<Scanned> {
    if let Some(scanned) = lex_character_delimited(source, ic, b'"', TokenKind::Identifier) {
        return Some(scanned);
    }

    let rest = source.as_bytes().get(ic.pointer..)?;
    if !rest.first()?.is_ascii_alphabetic() {
        return None;
    }
    let len = 1 + rest[1..]
        .iter()
        .take_while(|&&c| is_identifier_continuation(c))
        .count();

    let value = source[ic.pointer..ic.pointer + len].to_ascii_lowercase();
    let mut cur = ic;
    cur.advance(len);
    Some(Scanned::token(
        Token::new(value, TokenKind::Identifier, ic.loc),
        cur,
    ))
}

// `0` is deliberately not a continuation digit: `a0` lexes as `a` then `0`.
fn is_identifier_continuation(c: u8) -> bool {
    c.is_ascii_alphabetic() || (b'1'..=b'9').contains(&c) || c == b'$' || c == b'_'
}
