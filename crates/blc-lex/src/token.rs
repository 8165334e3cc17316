//! Token model for the B language.

use std::fmt;

/// The kinds of token the lexer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Type keywords
    KwInt,
    KwFloat,
    KwBool,
    KwString,

    // Control keywords
    KwImport,
    KwFunc,
    KwReturn,
    KwIf,
    KwElse,
    KwLoop,
    KwBreak,
    KwContinue,

    // Literals and names
    Number,
    Float,
    Str,
    Ident,

    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Bang,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,

    Newline,
    Eof,
}

impl TokenKind {
    /// True for the four type keywords that open a variable declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KwInt | TokenKind::KwFloat | TokenKind::KwBool | TokenKind::KwString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::KwInt => "'int'",
            TokenKind::KwFloat => "'float'",
            TokenKind::KwBool => "'bool'",
            TokenKind::KwString => "'string'",
            TokenKind::KwImport => "'import'",
            TokenKind::KwFunc => "'func'",
            TokenKind::KwReturn => "'return'",
            TokenKind::KwIf => "'if'",
            TokenKind::KwElse => "'else'",
            TokenKind::KwLoop => "'loop'",
            TokenKind::KwBreak => "'break'",
            TokenKind::KwContinue => "'continue'",
            TokenKind::Number => "number",
            TokenKind::Float => "float literal",
            TokenKind::Str => "string literal",
            TokenKind::Ident => "identifier",
            TokenKind::Assign => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::PlusPlus => "'++'",
            TokenKind::MinusMinus => "'--'",
            TokenKind::EqEq => "'=='",
            TokenKind::NotEq => "'!='",
            TokenKind::Lt => "'<'",
            TokenKind::Gt => "'>'",
            TokenKind::LtEq => "'<='",
            TokenKind::GtEq => "'>='",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Bang => "'!'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
        };
        f.write_str(text)
    }
}

/// A token: its kind, the raw source bytes it covers, and the line it
/// starts on.
///
/// Lexemes are bytes, not text: the language has no Unicode awareness,
/// and string literals may carry any byte the source file does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Vec<u8>,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<Vec<u8>>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// The lexeme as text, converted lossily. Identifiers, numbers and
    /// operators are always ASCII; only string literals can carry bytes
    /// with no UTF-8 reading.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.lexeme).into_owned()
    }
}

/// Looks an identifier up in the keyword table.
pub fn keyword(ident: &[u8]) -> Option<TokenKind> {
    let kind = match ident {
        b"int" => TokenKind::KwInt,
        b"float" => TokenKind::KwFloat,
        b"bool" => TokenKind::KwBool,
        b"string" => TokenKind::KwString,
        b"import" => TokenKind::KwImport,
        b"func" => TokenKind::KwFunc,
        b"return" => TokenKind::KwReturn,
        b"if" => TokenKind::KwIf,
        b"else" => TokenKind::KwElse,
        b"loop" => TokenKind::KwLoop,
        b"break" => TokenKind::KwBreak,
        b"continue" => TokenKind::KwContinue,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword(b"func"), Some(TokenKind::KwFunc));
        assert_eq!(keyword(b"loop"), Some(TokenKind::KwLoop));
        assert_eq!(keyword(b"string"), Some(TokenKind::KwString));
        assert_eq!(keyword(b"funcs"), None);
        assert_eq!(keyword(b""), None);
    }

    #[test]
    fn test_type_keywords() {
        assert!(TokenKind::KwInt.is_type_keyword());
        assert!(TokenKind::KwFloat.is_type_keyword());
        assert!(TokenKind::KwBool.is_type_keyword());
        assert!(TokenKind::KwString.is_type_keyword());
        assert!(!TokenKind::KwFunc.is_type_keyword());
        assert!(!TokenKind::Ident.is_type_keyword());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::EqEq.to_string(), "'=='");
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
    }

    #[test]
    fn test_text_is_lossy_for_raw_bytes() {
        let token = Token::new(TokenKind::Str, vec![b'h', 0xff, b'i'], 1);
        assert_eq!(token.lexeme, vec![b'h', 0xff, b'i']);
        assert_eq!(token.text(), "h\u{fffd}i");
    }
}
