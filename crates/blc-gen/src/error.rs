//! Error types for code generation.

use thiserror::Error;

/// Hard failures during code generation.
///
/// Almost everything the generator dislikes becomes a collected
/// diagnostic so emission can continue; a program without an entry point
/// is the exception and aborts immediately.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// No function named `main` in the program.
    #[error("no main function defined")]
    MissingMain,
}

/// Result type alias for code generation operations
pub type Result<T> = std::result::Result<T, CodeGenError>;
