//! String literal lexing.

use super::core::truncate_lexeme;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `"`-delimited string literal.
    ///
    /// `\n`, `\t` and `\"` are resolved to their bytes here; any other
    /// backslash pair is kept as-is (the backslash followed by the next
    /// byte). Everything else, including bytes with no UTF-8 reading,
    /// passes through untouched. A string left open at end of input
    /// yields whatever was collected.
    pub(crate) fn lex_string(&mut self, line: u32) -> Token {
        // Opening quote.
        self.cursor.advance();

        let mut content: Vec<u8> = Vec::new();
        loop {
            if self.cursor.is_at_end() {
                break;
            }

            let c = self.cursor.current();
            if c == b'"' {
                self.cursor.advance();
                break;
            }

            if c == b'\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    content.push(b'\\');
                    break;
                }
                let escaped = self.cursor.current();
                self.cursor.advance();
                match escaped {
                    b'n' => content.push(b'\n'),
                    b't' => content.push(b'\t'),
                    b'"' => content.push(b'"'),
                    other => {
                        content.push(b'\\');
                        content.push(other);
                    },
                }
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        truncate_lexeme(&mut content);
        Token::new(TokenKind::Str, content, line)
    }
}
