//! Core dispatch loop.

use blc_util::MAX_LEXEME_LEN;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns the next token from the source.
    ///
    /// Skips spaces, tabs and carriage returns; emits `\n` as a `Newline`
    /// token. Bytes with no reading (and a lone `&` or `|`) are consumed
    /// silently and the scan continues.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let line = self.cursor.line();
            if self.cursor.is_at_end() {
                return Token::eof(line);
            }

            match self.cursor.current() {
                b'\n' => {
                    self.cursor.advance();
                    return Token::new(TokenKind::Newline, "\n", line);
                },
                b'/' => {
                    if self.cursor.peek() == b'/' {
                        self.skip_line_comment();
                        continue;
                    }
                    if self.cursor.peek() == b'*' {
                        self.skip_block_comment();
                        continue;
                    }
                    self.cursor.advance();
                    return Token::new(TokenKind::Slash, "/", line);
                },
                b'&' => {
                    self.cursor.advance();
                    if self.cursor.match_byte(b'&') {
                        return Token::new(TokenKind::AndAnd, "&&", line);
                    }
                    // A lone `&` has no reading; drop it and keep scanning.
                    continue;
                },
                b'|' => {
                    self.cursor.advance();
                    if self.cursor.match_byte(b'|') {
                        return Token::new(TokenKind::OrOr, "||", line);
                    }
                    continue;
                },
                b'"' => return self.lex_string(line),
                c if c.is_ascii_digit() => return self.lex_number(line),
                c if is_ident_start(c) => return self.lex_identifier(line),
                c => {
                    if let Some(token) = self.lex_operator(c, line) {
                        return token;
                    }
                    // Unexpected byte: consume it and keep scanning.
                    self.cursor.advance();
                },
            }
        }
    }

    /// Skips spaces, tabs and carriage returns. Newlines stay put; they
    /// are tokens.
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\r' => self.cursor.advance(),
                _ => break,
            }
        }
    }
}

/// First byte of an identifier: ASCII letter or underscore.
pub(crate) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Subsequent identifier byte: letter, digit or underscore.
pub(crate) fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Caps a collected lexeme at the 255-byte limit, silently.
pub(crate) fn truncate_lexeme(lexeme: &mut Vec<u8>) {
    lexeme.truncate(MAX_LEXEME_LEN);
}
