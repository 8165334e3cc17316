//! Parser and import-resolution error types.
//!
//! The first parse error is fatal for the compilation unit; there is no
//! recovery. Every variant names the source line.

use thiserror::Error;

/// Error type for parsing
#[derive(Debug, Error)]
pub enum ParseError {
    /// The current token cannot start or continue the construct being
    /// parsed.
    #[error("unexpected {found} on line {line}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
    },

    /// A number literal that does not fit a 64-bit integer.
    #[error("number literal '{lexeme}' out of range on line {line}")]
    InvalidNumber { lexeme: String, line: u32 },
}

/// Error type for import resolution
#[derive(Debug, Error)]
pub enum ImportError {
    /// The imported file could not be read. The path is used verbatim.
    #[error("cannot read import \"{path}\": {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The imported file failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
