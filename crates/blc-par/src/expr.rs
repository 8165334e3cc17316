//! Expression parsing by precedence climbing.
//!
//! One function per precedence tier, lowest binding first:
//!
//! | Tier | Operators |
//! |------|-----------|
//! | logical | `&&`, `||` (one shared level) |
//! | comparison | `==`, `!=`, `<`, `>`, `<=`, `>=` |
//! | additive | `+`, `-` |
//! | multiplicative | `*`, `/`, `%` |
//! | unary | `!`, `-` |
//!
//! Every binary tier is left-associative, and comparisons chain:
//! `a < b < c` parses as `(a < b) < c`.

use blc_lex::TokenKind;

use crate::ast::*;
use crate::error::ParseError;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a full expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_logical()
    }

    fn parse_logical(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_comparison()?;
        loop {
            let op = match self.current.kind {
                TokenKind::AndAnd => BinOp::And,
                TokenKind::OrOr => BinOp::Or,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_comparison()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.current.kind {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::LtEq => BinOp::Le,
                TokenKind::GtEq => BinOp::Ge,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                TokenKind::Percent => BinOp::Mod,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current.kind {
            TokenKind::Bang => UnOp::Not,
            TokenKind::Minus => UnOp::Neg,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance();
                let text = token.text();
                let value = text.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                    lexeme: text.clone(),
                    line: token.line,
                })?;
                Ok(Expr::Number(value))
            },
            TokenKind::Str => {
                // String contents stay raw bytes all the way to codegen.
                let token = self.advance();
                Ok(Expr::Str(token.lexeme))
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            },
            TokenKind::Ident => {
                let name = self.advance().text();
                if self.check(TokenKind::LParen) {
                    self.advance();
                    let args = self.parse_args()?;
                    Ok(Expr::Call { callee: name, args })
                } else if self.match_kind(TokenKind::LBracket) {
                    let index = self.parse_expression()?;
                    self.expect(TokenKind::RBracket)?;
                    Ok(Expr::Index {
                        name,
                        index: Box::new(index),
                    })
                } else {
                    Ok(Expr::Ident(name))
                }
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses call arguments up to and including the closing paren.
    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::Parser;

    fn expr(source: &str) -> Expr {
        Parser::new(source).parse_expression().unwrap()
    }

    fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(
            expr("1 + 2 * 3"),
            binary(
                BinOp::Add,
                Expr::Number(1),
                binary(BinOp::Mul, Expr::Number(2), Expr::Number(3)),
            )
        );
    }

    #[test]
    fn test_comparison_binds_tighter_than_logical() {
        let parsed = expr("a == b && c == d");
        let Expr::Binary { op: BinOp::And, lhs, rhs } = parsed else {
            panic!("expected '&&' at the root");
        };
        assert!(matches!(*lhs, Expr::Binary { op: BinOp::Eq, .. }));
        assert!(matches!(*rhs, Expr::Binary { op: BinOp::Eq, .. }));
    }

    #[test]
    fn test_and_or_share_one_level() {
        // Flat precedence: `a || b && c` associates left to right.
        let parsed = expr("a || b && c");
        let Expr::Binary { op: BinOp::And, lhs, .. } = parsed else {
            panic!("expected '&&' at the root");
        };
        assert!(matches!(*lhs, Expr::Binary { op: BinOp::Or, .. }));
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            expr("10 - 4 - 3"),
            binary(
                BinOp::Sub,
                binary(BinOp::Sub, Expr::Number(10), Expr::Number(4)),
                Expr::Number(3),
            )
        );
    }

    #[test]
    fn test_comparisons_chain() {
        let parsed = expr("a < b < c");
        let Expr::Binary { op: BinOp::Lt, lhs, rhs } = parsed else {
            panic!("expected '<' at the root");
        };
        assert!(matches!(*lhs, Expr::Binary { op: BinOp::Lt, .. }));
        assert_eq!(*rhs, Expr::Ident("c".into()));
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            expr("(1 + 2) * 3"),
            binary(
                BinOp::Mul,
                binary(BinOp::Add, Expr::Number(1), Expr::Number(2)),
                Expr::Number(3),
            )
        );
    }

    #[test]
    fn test_unary_minus_and_not() {
        assert_eq!(
            expr("-x"),
            Expr::Unary {
                op: UnOp::Neg,
                operand: Box::new(Expr::Ident("x".into())),
            }
        );
        assert_eq!(
            expr("!!b"),
            Expr::Unary {
                op: UnOp::Not,
                operand: Box::new(Expr::Unary {
                    op: UnOp::Not,
                    operand: Box::new(Expr::Ident("b".into())),
                }),
            }
        );
    }

    #[test]
    fn test_unary_binds_tighter_than_multiplication() {
        assert_eq!(
            expr("-a * b"),
            binary(
                BinOp::Mul,
                Expr::Unary {
                    op: UnOp::Neg,
                    operand: Box::new(Expr::Ident("a".into())),
                },
                Expr::Ident("b".into()),
            )
        );
    }

    #[test]
    fn test_call_and_index() {
        assert_eq!(
            expr("f(1, x)"),
            Expr::Call {
                callee: "f".into(),
                args: vec![Expr::Number(1), Expr::Ident("x".into())],
            }
        );
        assert_eq!(
            expr("a[i + 1]"),
            Expr::Index {
                name: "a".into(),
                index: Box::new(binary(
                    BinOp::Add,
                    Expr::Ident("i".into()),
                    Expr::Number(1),
                )),
            }
        );
    }

    #[test]
    fn test_empty_call() {
        assert_eq!(
            expr("input()"),
            Expr::Call {
                callee: "input".into(),
                args: vec![],
            }
        );
    }

    #[test]
    fn test_float_literal_is_rejected() {
        let err = Parser::new("1.5 + 2").parse_expression().unwrap_err();
        assert!(err.to_string().contains("an expression"));
    }

    #[test]
    fn test_number_out_of_range() {
        let err = Parser::new("99999999999999999999").parse_expression().unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_missing_operand() {
        let err = Parser::new("1 +").parse_expression().unwrap_err();
        assert!(err.to_string().contains("an expression"));
    }
}
