pub mod cursor;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod scanner;
pub mod token;

pub use error::{LexError, Result};
pub use scanner::lex;
pub use token::{Location, Token, TokenKind};
