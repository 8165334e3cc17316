//! Numeric literal lexing.

use super::core::truncate_lexeme;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of digits, optionally containing `.`.
    ///
    /// A `.` anywhere in the run makes the token a `Float`; otherwise it
    /// is a `Number`. There is no exponent syntax and no leading sign
    /// (unary minus belongs to the parser).
    pub(crate) fn lex_number(&mut self, line: u32) -> Token {
        let start = self.cursor.position();
        let mut is_float = false;

        loop {
            let c = self.cursor.current();
            if c == b'.' {
                is_float = true;
                self.cursor.advance();
            } else if c.is_ascii_digit() {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let mut lexeme = self.cursor.slice_from(start).to_vec();
        truncate_lexeme(&mut lexeme);

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Number
        };
        Token::new(kind, lexeme, line)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn first(source: &str) -> crate::Token {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_integer() {
        let token = first("42");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, b"42");
    }

    #[test]
    fn test_zero() {
        let token = first("0");
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, b"0");
    }

    #[test]
    fn test_float() {
        let token = first("3.14");
        assert_eq!(token.kind, TokenKind::Float);
        assert_eq!(token.lexeme, b"3.14");
    }

    #[test]
    fn test_trailing_dot_is_float() {
        let token = first("7.");
        assert_eq!(token.kind, TokenKind::Float);
        assert_eq!(token.lexeme, b"7.");
    }

    #[test]
    fn test_number_stops_at_identifier() {
        let mut lexer = Lexer::new("12abc");
        assert_eq!(lexer.next_token().kind, TokenKind::Number);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_no_leading_sign() {
        let mut lexer = Lexer::new("-5");
        assert_eq!(lexer.next_token().kind, TokenKind::Minus);
        assert_eq!(lexer.next_token().kind, TokenKind::Number);
    }
}
