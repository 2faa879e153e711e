//! Token types for the MiniJS lexer.
//!
//! Defines [`TokenKind`] covering every lexeme in the MiniJS expression
//! grammar and [`Token`], which pairs a kind with a source [`Span`].

use minijs_types::{js_number_to_string, Span};
use std::fmt;

/// The reserved literal keywords. Everything else alphabetic lexes as
/// an identifier — including `NaN` and `Infinity`, which are ordinary
/// globals resolved by the evaluator.
pub const ALL_KEYWORDS: &[&str] = &["true", "false", "null", "undefined"];

/// A single token produced by the MiniJS lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Every token kind in the MiniJS expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals ──────────────────────────────────────────────
    /// Numeric literal: `42`, `3.14`, `.5`
    Number(f64),
    /// String literal, single- or double-quoted (no escape sequences —
    /// the backslash is outside the console's allowed character set).
    Str(String),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `undefined`
    Undefined,

    // ── Identifiers ───────────────────────────────────────────
    /// `foo`, `$x`, `_tmp`
    Identifier(String),

    // ── Operators ─────────────────────────────────────────────
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `==`
    EqEq,
    /// `===`
    EqEqEq,
    /// `!=`
    BangEq,
    /// `!==`
    BangEqEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `!`
    Bang,
    /// `?`
    Question,

    // ── Punctuation ───────────────────────────────────────────
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;` — lexes, but the single-expression grammar rejects it.
    Semicolon,
    /// `.`
    Dot,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Map a reserved word to its keyword token, if it is one.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "null" => Some(TokenKind::Null),
            "undefined" => Some(TokenKind::Undefined),
            _ => None,
        }
    }

    /// Returns `true` if this token is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::True | TokenKind::False | TokenKind::Null | TokenKind::Undefined
        )
    }

    /// The `Unexpected ...` message a JavaScript engine would report for
    /// this token appearing where it cannot.
    pub fn unexpected_message(&self) -> String {
        match self {
            TokenKind::Number(_) => "Unexpected number".to_string(),
            TokenKind::Str(_) => "Unexpected string".to_string(),
            TokenKind::Identifier(_) => "Unexpected identifier".to_string(),
            TokenKind::Eof => "Unexpected end of input".to_string(),
            other => format!("Unexpected token '{other}'"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", js_number_to_string(*n)),
            TokenKind::Str(s) => write!(f, "{s}"),
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Null => write!(f, "null"),
            TokenKind::Undefined => write!(f, "undefined"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::EqEq => write!(f, "=="),
            TokenKind::EqEqEq => write!(f, "==="),
            TokenKind::BangEq => write!(f, "!="),
            TokenKind::BangEqEq => write!(f, "!=="),
            TokenKind::Less => write!(f, "<"),
            TokenKind::LessEq => write!(f, "<="),
            TokenKind::Greater => write!(f, ">"),
            TokenKind::GreaterEq => write!(f, ">="),
            TokenKind::AmpAmp => write!(f, "&&"),
            TokenKind::PipePipe => write!(f, "||"),
            TokenKind::Bang => write!(f, "!"),
            TokenKind::Question => write!(f, "?"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
