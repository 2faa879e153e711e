//! Expression parsing with full operator precedence.
//!
//! Precedence (lowest → highest):
//! 8. `?:` (conditional)
//! 7. `||`
//! 6. `&&`
//! 5. `==`, `!=`, `===`, `!==`
//! 4. `<`, `>`, `<=`, `>=`
//! 3. `+`, `-`
//! 2. `*`, `/`
//! 1. unary `!`, `-`, `+`
//! 0. postfix `.name`, `[expr]`, `(args)`

use minijs_lexer::token::TokenKind;
use minijs_types::ast::*;
use minijs_types::SyntaxError;

use crate::parser::{Parser, MAX_DEPTH};

impl Parser {
    // ══════════════════════════════════════════════════════════════════════════
    // Entry Point
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            self.depth -= 1;
            return Err(SyntaxError::new(
                "Maximum call stack size exceeded",
                self.current_span(),
            ));
        }
        let result = self.parse_conditional();
        self.depth -= 1;
        result
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `ConditionalExpr = OrExpr [ "?" Expr ":" ConditionalExpr ]`
    fn parse_conditional(&mut self) -> Result<Expr, SyntaxError> {
        let condition = self.parse_or()?;
        if !self.eat(&TokenKind::Question) {
            return Ok(condition);
        }
        let consequent = self.parse_expression()?;
        self.expect(&TokenKind::Colon)?;
        let alternate = self.parse_expression()?;
        let span = condition.span.merge(alternate.span);
        Ok(Expr::new(
            ExprKind::Conditional {
                condition: Box::new(condition),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
            span,
        ))
    }

    /// `OrExpr = AndExpr { "||" AndExpr }`
    fn parse_or(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_and()?;
        while self.eat(&TokenKind::PipePipe) {
            let right = self.parse_and()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Logical {
                    left: Box::new(left),
                    op: LogicalOp::Or,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `AndExpr = EqualityExpr { "&&" EqualityExpr }`
    fn parse_and(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_equality()?;
        while self.eat(&TokenKind::AmpAmp) {
            let right = self.parse_equality()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Logical {
                    left: Box::new(left),
                    op: LogicalOp::And,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `EqualityExpr = RelationalExpr { ("==" | "!=" | "===" | "!==") RelationalExpr }`
    fn parse_equality(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::BangEq => BinOp::NotEq,
                TokenKind::EqEqEq => BinOp::StrictEq,
                TokenKind::BangEqEq => BinOp::StrictNotEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_relational()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `RelationalExpr = AddExpr { ("<" | ">" | "<=" | ">=") AddExpr }`
    fn parse_relational(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Less => BinOp::Less,
                TokenKind::Greater => BinOp::Greater,
                TokenKind::LessEq => BinOp::LessEq,
                TokenKind::GreaterEq => BinOp::GreaterEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_additive(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `MulExpr = UnaryExpr { ("*" | "/") UnaryExpr }`
    fn parse_multiplicative(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `UnaryExpr = ("!" | "-" | "+") UnaryExpr | PostfixExpr`
    fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current_span();
        let op = match self.peek_kind() {
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        };
        match op {
            Some(op) => {
                self.advance();
                self.depth += 1;
                if self.depth > MAX_DEPTH {
                    self.depth -= 1;
                    return Err(SyntaxError::new(
                        "Maximum call stack size exceeded",
                        self.current_span(),
                    ));
                }
                let operand = self.parse_unary();
                self.depth -= 1;
                let operand = operand?;
                let span = start.merge(operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            None => self.parse_postfix(),
        }
    }

    /// `PostfixExpr = PrimaryExpr { "." Name | "[" Expr "]" | "(" ArgList ")" }`
    fn parse_postfix(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.peek_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let property = self.expect_property_name()?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Member {
                            object: Box::new(expr),
                            property,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(&TokenKind::RBracket)?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Index {
                            object: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                TokenKind::LParen => {
                    self.advance();
                    let args = self.parse_arg_list()?;
                    self.expect(&TokenKind::RParen)?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Primary Expressions
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current_span();
        match self.peek_kind().clone() {
            // ── Literals ────────────────────────────────────────────────
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::Number(n), start))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(Expr::new(ExprKind::String(s), start))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(true), start))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::new(ExprKind::Bool(false), start))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Expr::new(ExprKind::Null, start))
            }
            TokenKind::Undefined => {
                self.advance();
                Ok(Expr::new(ExprKind::Undefined, start))
            }

            // ── Identifiers ─────────────────────────────────────────────
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::new(ExprKind::Identifier(name), start))
            }

            // ── Collections ─────────────────────────────────────────────
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_object_literal(),

            // ── Grouping ────────────────────────────────────────────────
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                let span = start.merge(self.previous_span());
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }

            _ => Err(self.unexpected()),
        }
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Collection Literals
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse `[expr, ...]` — trailing comma allowed, elisions are not.
    fn parse_array_literal(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current_span();
        self.advance(); // eat `[`
        let mut elements = Vec::new();
        if !self.check(&TokenKind::RBracket) {
            loop {
                elements.push(self.parse_expression()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
                // Trailing comma
                if self.check(&TokenKind::RBracket) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RBracket)?;
        let span = start.merge(self.previous_span());
        Ok(Expr::new(ExprKind::Array(elements), span))
    }

    /// Parse `{ key: expr, ... }` or `{}` — identifier, keyword, string
    /// and number keys; trailing comma allowed.
    fn parse_object_literal(&mut self) -> Result<Expr, SyntaxError> {
        let start = self.current_span();
        self.advance(); // eat `{`
        let mut entries = Vec::new();
        if !self.check(&TokenKind::RBrace) {
            loop {
                let key = self.parse_object_key()?;
                self.expect(&TokenKind::Colon)?;
                let value = self.parse_expression()?;
                entries.push((key, value));
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
                // Trailing comma
                if self.check(&TokenKind::RBrace) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RBrace)?;
        let span = start.merge(self.previous_span());
        Ok(Expr::new(ExprKind::Object(entries), span))
    }

    /// Parse one object literal key. Reserved words are valid keys
    /// (`{null: 1}` parses, as in JavaScript).
    fn parse_object_key(&mut self) -> Result<ObjectKey, SyntaxError> {
        let kind = self.peek_kind().clone();
        match kind {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(ObjectKey::Identifier(name))
            }
            TokenKind::Str(s) => {
                self.advance();
                Ok(ObjectKey::String(s))
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(ObjectKey::Number(n))
            }
            _ if kind.is_keyword() => {
                self.advance();
                Ok(ObjectKey::Identifier(kind.to_string()))
            }
            _ => Err(self.unexpected()),
        }
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Call Arguments
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse a comma-separated argument list (inside parens).
    fn parse_arg_list(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
            // Trailing comma
            if self.check(&TokenKind::RParen) {
                break;
            }
        }
        Ok(args)
    }
}
