//! blc-par - Recursive-descent parser for the B language.
//!
//! The parser consumes tokens straight from the lexer with a single token
//! of lookahead and builds the AST defined in [`ast`]. Statements are
//! newline-separated; the parser skips `Newline` tokens at statement and
//! item boundaries and nowhere else, so an expression cannot span lines.
//!
//! Parsing is all-or-nothing: the first unexpected token aborts with a
//! [`ParseError`] carrying the offending line. After a successful parse,
//! [`resolve_imports`] splices the top-level functions of every imported
//! file into the program.

pub mod ast;
pub mod error;
pub mod fmt;
mod expr;
mod imports;
mod items;
mod stmt;

use blc_lex::{Lexer, Token, TokenKind};

pub use ast::*;
pub use error::{ImportError, ParseError};
pub use imports::resolve_imports;

/// Parses a complete source buffer into a [`Program`]. The buffer is
/// raw bytes; `&str` and `&[u8]` sources are both accepted.
pub fn parse(source: &(impl AsRef<[u8]> + ?Sized)) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}

/// Parser over a token stream.
///
/// Holds the current token and exactly one token of peek; `advance`
/// shifts peek into current and pulls the next token from the lexer.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` and primes the lookahead.
    pub fn new<B: AsRef<[u8]> + ?Sized>(source: &'a B) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
        }
    }

    /// Parses the whole program: any mix of newlines, imports and
    /// function definitions until end of input.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_newlines();
            match self.current.kind {
                TokenKind::Eof => break,
                TokenKind::KwImport => items.push(Item::Import(self.parse_import()?)),
                TokenKind::KwFunc => items.push(Item::Function(self.parse_function()?)),
                _ => return Err(self.unexpected("'func' or 'import'")),
            }
        }
        Ok(Program { items })
    }

    /// Consumes the current token and returns it.
    pub(crate) fn advance(&mut self) -> Token {
        let pulled = self.lexer.next_token();
        let peeked = std::mem::replace(&mut self.peek, pulled);
        std::mem::replace(&mut self.current, peeked)
    }

    /// Consumes the current token if it has `kind`, or fails with the
    /// line of the offender.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// True if the current token has `kind`.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it has `kind`.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips any run of newline tokens.
    pub(crate) fn skip_newlines(&mut self) {
        while self.current.kind == TokenKind::Newline {
            self.advance();
        }
    }

    /// Builds an error describing the current token.
    pub(crate) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let found = match self.current.kind {
            TokenKind::Ident => format!("identifier '{}'", self.current.text()),
            TokenKind::Number | TokenKind::Float => format!("number '{}'", self.current.text()),
            TokenKind::Str => format!("string \"{}\"", self.current.text()),
            kind => kind.to_string(),
        };
        ParseError::UnexpectedToken {
            expected: expected.into(),
            found,
            line: self.current.line,
        }
    }
}
