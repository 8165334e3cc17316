//! Statement parsing.
//!
//! A statement starting with an identifier is disambiguated by one token
//! of peek: `++`/`--` make it an increment or decrement, `=` or `[` make
//! it an assignment, anything else leaves it an expression statement.

use blc_lex::TokenKind;

use crate::ast::*;
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a `{ ... }` block of newline-separated statements.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(TokenKind::RBrace) {
                break;
            }
            if self.check(TokenKind::Eof) {
                return Err(self.unexpected("'}'"));
            }
            stmts.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Block { stmts })
    }

    /// Parses one statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current.kind {
            kind if kind.is_type_keyword() => self.parse_var_decl(),
            TokenKind::KwReturn => self.parse_return(),
            TokenKind::KwIf => Ok(Stmt::If(self.parse_if()?)),
            TokenKind::KwLoop => self.parse_loop(),
            TokenKind::KwBreak => {
                let line = self.current.line;
                self.advance();
                Ok(Stmt::Break { line })
            },
            TokenKind::KwContinue => {
                let line = self.current.line;
                self.advance();
                Ok(Stmt::Continue { line })
            },
            TokenKind::Ident => self.parse_ident_statement(),
            _ => Ok(Stmt::Expr(self.parse_expression()?)),
        }
    }

    /// Parses `type name`, `type name = expr` or `type name[size]`.
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current.line;
        let ty = self.parse_type_name()?;
        let name = self.expect(TokenKind::Ident)?.text();

        if self.match_kind(TokenKind::LBracket) {
            let size = self.parse_expression()?;
            self.expect(TokenKind::RBracket)?;
            return Ok(Stmt::ArrayDecl(ArrayDecl {
                name,
                ty,
                size,
                line,
            }));
        }

        let init = if self.match_kind(TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(Stmt::VarDecl(VarDecl {
            name,
            ty,
            init,
            line,
        }))
    }

    /// Parses a statement that begins with an identifier.
    fn parse_ident_statement(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current.line;
        match self.peek.kind {
            TokenKind::PlusPlus => {
                let name = self.advance().text();
                self.advance();
                Ok(Stmt::Increment { name, line })
            },
            TokenKind::MinusMinus => {
                let name = self.advance().text();
                self.advance();
                Ok(Stmt::Decrement { name, line })
            },
            TokenKind::Assign => {
                let name = self.advance().text();
                self.advance();
                let value = self.parse_expression()?;
                Ok(Stmt::Assign(Assign {
                    name,
                    index: None,
                    value,
                    line,
                }))
            },
            TokenKind::LBracket => {
                let name = self.advance().text();
                self.advance();
                let index = self.parse_expression()?;
                self.expect(TokenKind::RBracket)?;
                self.expect(TokenKind::Assign)?;
                let value = self.parse_expression()?;
                Ok(Stmt::Assign(Assign {
                    name,
                    index: Some(index),
                    value,
                    line,
                }))
            },
            _ => Ok(Stmt::Expr(self.parse_expression()?)),
        }
    }

    /// Parses `return` with an optional same-line expression.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::KwReturn)?;
        let expr = match self.current.kind {
            TokenKind::Newline | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(self.parse_expression()?),
        };
        Ok(Stmt::Return(expr))
    }

    /// Parses an `if` statement with its optional `else`/`else if` tail.
    pub(crate) fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
        self.expect(TokenKind::KwIf)?;
        let cond = self.parse_expression()?;
        let then_block = self.parse_block()?;

        self.skip_newlines();
        let else_clause = if self.match_kind(TokenKind::KwElse) {
            if self.check(TokenKind::KwIf) {
                Some(ElseClause::If(Box::new(self.parse_if()?)))
            } else {
                Some(ElseClause::Block(self.parse_block()?))
            }
        } else {
            None
        };

        Ok(IfStmt {
            cond,
            then_block,
            else_clause,
        })
    }

    /// Parses `loop cond { ... }`.
    fn parse_loop(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::KwLoop)?;
        let cond = self.parse_expression()?;
        let body = self.parse_block()?;
        Ok(Stmt::Loop(LoopStmt { cond, body }))
    }
}
