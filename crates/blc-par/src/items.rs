//! Top-level item parsing: imports and function definitions.

use blc_lex::TokenKind;

use crate::ast::*;
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses `import "path"`.
    pub(crate) fn parse_import(&mut self) -> Result<Import, ParseError> {
        let line = self.current.line;
        self.expect(TokenKind::KwImport)?;
        let path = self.expect(TokenKind::Str)?.text();
        Ok(Import { path, line })
    }

    /// Parses `func name(params) { ... }`.
    pub(crate) fn parse_function(&mut self) -> Result<Function, ParseError> {
        let line = self.current.line;
        self.expect(TokenKind::KwFunc)?;
        let name = self.expect(TokenKind::Ident)?.text();
        self.expect(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Function {
            name,
            params,
            body,
            line,
        })
    }

    /// Parses a possibly empty comma-separated parameter list. Each
    /// parameter is a type keyword followed by a name.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            let ty = self.parse_type_name()?;
            let name = self.expect(TokenKind::Ident)?.text();
            params.push(Param { name, ty });
            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    /// Consumes a type keyword.
    pub(crate) fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let ty = match self.current.kind {
            TokenKind::KwInt => TypeName::Int,
            TokenKind::KwFloat => TypeName::Float,
            TokenKind::KwBool => TypeName::Bool,
            TokenKind::KwString => TypeName::Str,
            _ => return Err(self.unexpected("a type name")),
        };
        self.advance();
        Ok(ty)
    }
}
