//! Core MiniJS lexer — converts expression text to a token stream.
//!
//! Features:
//! - All MiniJS tokens (literals, operators, punctuation)
//! - Single- and double-quoted strings (no escape sequences — the
//!   backslash is outside the console's allowed character alphabet)
//! - Decimal and exponent number forms (`42`, `3.14`, `.5`, `1e3`)
//! - Fail-fast: the first invalid lexeme aborts with a [`SyntaxError`]
//!
//! Whitespace (including newlines) only separates tokens; the grammar
//! is a single expression, so there is no statement termination.

use minijs_types::{Span, SyntaxError};

use crate::token::{Token, TokenKind};

/// The MiniJS lexer.
///
/// Converts expression text into a vector of [`Token`]s, always ending
/// with [`TokenKind::Eof`] on success.
pub struct Lexer<'src> {
    /// The full source text as bytes.
    source: &'src [u8],
    /// Current byte offset into `source`.
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given expression text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    /// Lex the entire input into a token stream.
    pub fn lex(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() {
                tokens.push(Token::new(TokenKind::Eof, Span::point(self.pos)));
                return Ok(tokens);
            }
            let start = self.pos;
            let kind = self.scan_token()?;
            tokens.push(Token::new(kind, Span::new(start, self.pos)));
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    /// Extract the lexeme text between `start` and the current position.
    fn lexeme(&self, start: usize) -> &str {
        std::str::from_utf8(&self.source[start..self.pos]).unwrap_or("")
    }

    // ─────────────────────────────────────────────────────────────
    // Token scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token. The caller has already skipped whitespace and
    /// verified we are not at the end of input.
    fn scan_token(&mut self) -> Result<TokenKind, SyntaxError> {
        let start = self.pos;
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(TokenKind::Eof),
        };

        match ch {
            // ── String literals ──
            b'\'' | b'"' => self.scan_string(ch, start),

            // ── Number literals ──
            b'0'..=b'9' => Ok(self.scan_number(start)),
            b'.' if matches!(self.peek(), Some(b'0'..=b'9')) => Ok(self.scan_number(start)),

            // ── Identifiers & keywords ──
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => Ok(self.scan_identifier(start)),

            // ── Single-character operators & punctuation ──
            b'+' => Ok(TokenKind::Plus),
            b'-' => Ok(TokenKind::Minus),
            b'*' => Ok(TokenKind::Star),
            b'/' => Ok(TokenKind::Slash),
            b'(' => Ok(TokenKind::LParen),
            b')' => Ok(TokenKind::RParen),
            b'[' => Ok(TokenKind::LBracket),
            b']' => Ok(TokenKind::RBracket),
            b'{' => Ok(TokenKind::LBrace),
            b'}' => Ok(TokenKind::RBrace),
            b',' => Ok(TokenKind::Comma),
            b':' => Ok(TokenKind::Colon),
            b';' => Ok(TokenKind::Semicolon),
            b'.' => Ok(TokenKind::Dot),
            b'?' => Ok(TokenKind::Question),

            // ── Multi-character operators ──
            b'=' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    if self.peek() == Some(b'=') {
                        self.advance();
                        Ok(TokenKind::EqEqEq)
                    } else {
                        Ok(TokenKind::EqEq)
                    }
                } else {
                    // Assignment is not part of the expression grammar.
                    Err(SyntaxError::new(
                        "Unexpected token '='",
                        self.span_from(start),
                    ))
                }
            }

            b'!' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    if self.peek() == Some(b'=') {
                        self.advance();
                        Ok(TokenKind::BangEqEq)
                    } else {
                        Ok(TokenKind::BangEq)
                    }
                } else {
                    Ok(TokenKind::Bang)
                }
            }

            b'<' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Ok(TokenKind::LessEq)
                } else {
                    Ok(TokenKind::Less)
                }
            }

            b'>' => {
                if self.peek() == Some(b'=') {
                    self.advance();
                    Ok(TokenKind::GreaterEq)
                } else {
                    Ok(TokenKind::Greater)
                }
            }

            b'&' => {
                if self.peek() == Some(b'&') {
                    self.advance();
                    Ok(TokenKind::AmpAmp)
                } else {
                    // Bitwise operators are not supported.
                    Err(SyntaxError::new(
                        "Unexpected token '&'",
                        self.span_from(start),
                    ))
                }
            }

            b'|' => {
                if self.peek() == Some(b'|') {
                    self.advance();
                    Ok(TokenKind::PipePipe)
                } else {
                    Err(SyntaxError::new(
                        "Unexpected token '|'",
                        self.span_from(start),
                    ))
                }
            }

            _ => Err(SyntaxError::new(
                "Invalid or unexpected token",
                self.span_from(start),
            )),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    /// Scan a number after its first character (digit or leading dot)
    /// has been consumed. Accepts `42`, `3.14`, `5.`, `.5` and an
    /// optional exponent (`1e3`, `2.5e-1`).
    fn scan_number(&mut self, start: usize) -> TokenKind {
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }

        if self.peek() == Some(b'.') {
            self.advance();
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        // Optional exponent — only consumed when well-formed, otherwise
        // the `e` lexes as a trailing identifier and the parser rejects.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let after_sign = match self.peek_at(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if matches!(self.peek_at(after_sign), Some(b'0'..=b'9')) {
                self.advance(); // e
                if after_sign == 2 {
                    self.advance(); // sign
                }
                while let Some(b'0'..=b'9') = self.peek() {
                    self.advance();
                }
            }
        }

        let value: f64 = self.lexeme(start).parse().unwrap_or(0.0);
        TokenKind::Number(value)
    }

    // ─────────────────────────────────────────────────────────────
    // Identifiers & keywords
    // ─────────────────────────────────────────────────────────────

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'$' {
                self.advance();
            } else {
                break;
            }
        }
        let text = self.lexeme(start);
        TokenKind::from_keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()))
    }

    // ─────────────────────────────────────────────────────────────
    // String literals
    // ─────────────────────────────────────────────────────────────

    /// Scan a string literal after the opening quote. The closing quote
    /// must match the opening one and appear on the same line.
    fn scan_string(&mut self, quote: u8, start: usize) -> Result<TokenKind, SyntaxError> {
        let content_start = self.pos;
        loop {
            match self.peek() {
                None | Some(b'\n') => {
                    // Unterminated string literal
                    return Err(SyntaxError::new(
                        "Invalid or unexpected token",
                        self.span_from(start),
                    ));
                }
                Some(ch) if ch == quote => {
                    let text = std::str::from_utf8(&self.source[content_start..self.pos])
                        .unwrap_or("")
                        .to_string();
                    self.advance();
                    return Ok(TokenKind::Str(text));
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}
