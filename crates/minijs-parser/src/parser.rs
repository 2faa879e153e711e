//! Core parser infrastructure: token cursor, error construction, helpers.

use minijs_lexer::token::{Token, TokenKind};
use minijs_types::{ast::Expr, Span, SyntaxError};

/// Maximum expression nesting depth. A recursive-descent parser walks
/// the native stack, so pathologically nested input is cut off with the
/// message a JavaScript engine reports for the same situation.
pub(crate) const MAX_DEPTH: u32 = 256;

/// The MiniJS parser.
///
/// Consumes a token stream produced by the lexer and builds a single
/// expression AST. Fails fast on the first syntax error — the console
/// surfaces one error per submission.
pub struct Parser {
    /// The token stream (always ends with `Eof`).
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Current expression nesting depth.
    pub(crate) depth: u32,
}

impl Parser {
    /// Create a new parser from a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the token stream as exactly one expression.
    ///
    /// Trailing tokens after the expression (a `;`, a second expression,
    /// a stray `)`, ...) are a syntax error — the grammar has no
    /// statements.
    pub fn parse(mut self) -> Result<Expr, SyntaxError> {
        let expr = self.parse_expression()?;
        if !self.at_end() {
            return Err(self.unexpected());
        }
        Ok(expr)
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should end with Eof")
        })
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(0)
        }
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Expect a specific token kind, or fail with an `Unexpected ...`
    /// error describing the token actually found.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<Token, SyntaxError> {
        if self.check(expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected())
        }
    }

    /// Expect an identifier or keyword usable as a property name after
    /// `.` (property positions admit reserved words: `x.null` parses).
    pub(crate) fn expect_property_name(&mut self) -> Result<String, SyntaxError> {
        let kind = self.peek_kind().clone();
        match kind {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            _ if kind.is_keyword() => {
                self.advance();
                Ok(kind.to_string())
            }
            _ => Err(self.unexpected()),
        }
    }

    // ── Error Construction ────────────────────────────────────────────────────

    /// Build the `Unexpected ...` syntax error for the current token.
    pub(crate) fn unexpected(&self) -> SyntaxError {
        SyntaxError::new(self.peek_kind().unexpected_message(), self.current_span())
    }
}
