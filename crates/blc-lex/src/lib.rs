//! blc-lex - Lexical analyzer for the B language.
//!
//! The lexer transforms raw source bytes into a stream of [`Token`]s. It
//! is a single-lookahead state machine: every token is recognized from the
//! current byte plus at most one byte of peek.
//!
//! Points worth knowing before reading on:
//!
//! - Newlines are *tokens*, not whitespace. Statements in B are separated
//!   by line breaks, so the parser needs to see them.
//! - Comments (`//` and `/* */`) produce no tokens but keep the line
//!   counter honest, including for newlines buried inside block comments.
//! - The lexer never fails. Bytes it cannot place (including a lone `&`
//!   or `|`) are consumed and dropped, and an unterminated string or block
//!   comment at end of input is accepted with whatever was collected.
//! - Lexemes are capped at 255 bytes; anything longer is truncated.

pub mod cursor;
mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword, Token, TokenKind};
