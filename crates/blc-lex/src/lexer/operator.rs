//! Operator and punctuation lexing.
//!
//! Two-byte operators are recognized by one byte of lookahead; when the
//! second byte does not match, the one-byte form is emitted. `/`, `&` and
//! `|` never reach this module (comments and logical operators are
//! resolved in the dispatch loop).

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation byte, or returns `None` for a
    /// byte this module has no reading for.
    pub(crate) fn lex_operator(&mut self, c: u8, line: u32) -> Option<Token> {
        let token = match c {
            b'=' => self.one_or_two(b'=', TokenKind::EqEq, "==", TokenKind::Assign, "=", line),
            b'!' => self.one_or_two(b'=', TokenKind::NotEq, "!=", TokenKind::Bang, "!", line),
            b'<' => self.one_or_two(b'=', TokenKind::LtEq, "<=", TokenKind::Lt, "<", line),
            b'>' => self.one_or_two(b'=', TokenKind::GtEq, ">=", TokenKind::Gt, ">", line),
            b'+' => self.one_or_two(b'+', TokenKind::PlusPlus, "++", TokenKind::Plus, "+", line),
            b'-' => self.one_or_two(b'-', TokenKind::MinusMinus, "--", TokenKind::Minus, "-", line),
            b'*' => self.single(TokenKind::Star, "*", line),
            b'%' => self.single(TokenKind::Percent, "%", line),
            b'(' => self.single(TokenKind::LParen, "(", line),
            b')' => self.single(TokenKind::RParen, ")", line),
            b'{' => self.single(TokenKind::LBrace, "{", line),
            b'}' => self.single(TokenKind::RBrace, "}", line),
            b'[' => self.single(TokenKind::LBracket, "[", line),
            b']' => self.single(TokenKind::RBracket, "]", line),
            b',' => self.single(TokenKind::Comma, ",", line),
            _ => return None,
        };
        Some(token)
    }

    fn single(&mut self, kind: TokenKind, lexeme: &str, line: u32) -> Token {
        self.cursor.advance();
        Token::new(kind, lexeme, line)
    }

    fn one_or_two(
        &mut self,
        second: u8,
        two_kind: TokenKind,
        two_lexeme: &str,
        one_kind: TokenKind,
        one_lexeme: &str,
        line: u32,
    ) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(second) {
            Token::new(two_kind, two_lexeme, line)
        } else {
            Token::new(one_kind, one_lexeme, line)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_eq_eq_is_one_token() {
        assert_eq!(kinds("=="), vec![TokenKind::EqEq]);
        assert_eq!(kinds("= ="), vec![TokenKind::Assign, TokenKind::Assign]);
    }

    #[test]
    fn test_two_byte_operators() {
        assert_eq!(kinds("!="), vec![TokenKind::NotEq]);
        assert_eq!(kinds("<="), vec![TokenKind::LtEq]);
        assert_eq!(kinds(">="), vec![TokenKind::GtEq]);
        assert_eq!(kinds("++"), vec![TokenKind::PlusPlus]);
        assert_eq!(kinds("--"), vec![TokenKind::MinusMinus]);
    }

    #[test]
    fn test_one_byte_operators() {
        assert_eq!(kinds("="), vec![TokenKind::Assign]);
        assert_eq!(kinds("!"), vec![TokenKind::Bang]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt]);
        assert_eq!(kinds(">"), vec![TokenKind::Gt]);
        assert_eq!(kinds("+"), vec![TokenKind::Plus]);
        assert_eq!(kinds("-"), vec![TokenKind::Minus]);
        assert_eq!(kinds("*"), vec![TokenKind::Star]);
        assert_eq!(kinds("%"), vec![TokenKind::Percent]);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("(){}[],"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_adjacent_mixed_operators() {
        // `a+-b` is plus then minus, not an increment.
        assert_eq!(
            kinds("a+-b"),
            vec![
                TokenKind::Ident,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_triple_plus() {
        // `+++` groups greedily: `++` then `+`.
        assert_eq!(kinds("+++"), vec![TokenKind::PlusPlus, TokenKind::Plus]);
    }
}
