use thiserror::Error;

use super::token::Location;

pub type Result<T> = std::result::Result<T, LexError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No scan strategy recognizes the text at `location`.
    #[error(
        "unable to lex token{} at {location}",
        .hint.as_deref().map(|h| format!(" after {h}")).unwrap_or_default()
    )]
    UnlexableInput {
        location: Location,
        /// Value of the last token accepted before the failure.
        hint: Option<String>,
    },
}

impl LexError {
    pub fn unlexable(location: Location, hint: Option<String>) -> Self {
        Self::UnlexableInput { location, hint }
    }

    pub fn location(&self) -> Location {
        match self {
            Self::UnlexableInput { location, .. } => *location,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::UnlexableInput { hint, .. } => hint.as_deref(),
        }
    }
}
