//! Identifier and keyword lexing.

use super::core::{is_ident_continue, truncate_lexeme};
use crate::token::{keyword, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, then reclassifies it through the keyword table.
    pub(crate) fn lex_identifier(&mut self, line: u32) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        while is_ident_continue(self.cursor.current()) {
            self.cursor.advance();
        }

        let mut lexeme = self.cursor.slice_from(start).to_vec();
        truncate_lexeme(&mut lexeme);

        let kind = keyword(&lexeme).unwrap_or(TokenKind::Ident);
        Token::new(kind, lexeme, line)
    }
}
