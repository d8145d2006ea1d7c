//! Lexer for a small SQL dialect: `select`, `create table` and
//! `insert into ... values` statements with `int`/`text` columns.
//!
//! [`lex`] turns source text into a flat list of [`Token`]s, or fails with a
//! [`LexError`] pointing at the first character it cannot classify.

pub mod sql;

pub use sql::{lex, LexError, Location, Token, TokenKind};
