//! Error types for statement conversion.
//!
//! Only two things can go wrong once the input bytes are in hand: the document contains a value
//! that makes the rest of it untrustworthy (`Error::Parse`), or the assembled record cannot be
//! encoded (`Error::Encoding`). Everything else is tolerated by the parser.

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::process::ExitCode;

pub type Result<T> = std::result::Result<T, Error>;

/// The errors that abort a conversion.
#[derive(Debug)]
pub enum Error {
    /// A structurally fatal problem was found in the document.
    Parse(ParseError),
    /// The parsed statement could not be serialized.
    Encoding(serde_json::Error),
}

impl Error {
    /// The process exit status that corresponds to this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            Error::Parse(_) => 1,
            Error::Encoding(_) => 2,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(_) => write!(f, "Failed to parse input"),
            Error::Encoding(_) => write!(f, "Failed to encode statement as JSON"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Encoding(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Error::Parse(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Encoding(value)
    }
}

/// A structurally fatal condition found while parsing a statement document.
pub enum ParseError {
    /// A required date field had fewer than the eight `YYYYMMDD` characters.
    DateTooShort { text: String },
    /// A required date field's `YYYYMMDD` prefix is not a calendar date.
    InvalidDate {
        text: String,
        source: chrono::ParseError,
    },
    /// The document nests deeper than the open-element path can hold.
    PathTooDeep { depth: usize },
}

impl Debug for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::DateTooShort { text } => {
                write!(f, "'{text}' is too short to hold a YYYYMMDD date")
            }
            ParseError::InvalidDate { text, .. } => {
                write!(f, "'{text}' does not start with a YYYYMMDD date")
            }
            ParseError::PathTooDeep { depth } => {
                write!(f, "Elements are nested more than {depth} levels deep")
            }
        }
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ParseError::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}
