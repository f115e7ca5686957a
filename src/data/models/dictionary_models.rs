use std::path::PathBuf;

use thiserror::Error;

// Reasons a single dictionary line cannot be turned into an entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '/' between headword and definitions")]
    MissingSlash,
    #[error("missing '[' before pinyin")]
    MissingBracket,
    #[error("expected traditional and simplified headwords, found {found} token(s)")]
    HeadwordCount { found: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown field '{0}', expected one of: definitions, pinyin, simplified, traditional")]
pub struct UnknownField(pub String);

// Errors raised while building a dictionary
#[derive(Error, Debug)]
pub enum DictError {
    #[error("malformed line {line_number}: {source}: {line:?}")]
    Malformed {
        line_number: usize,
        line: String,
        #[source]
        source: ParseError,
    },
    #[error("I/O error while reading dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to open dataset {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode dataset: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, DictError>;
