//! AST node types for the MiniJS expression grammar.
//!
//! Every node carries a [`Span`] for error reporting. Recursive types
//! are boxed to keep the enum size reasonable. The grammar is a single
//! expression — there are no statements, declarations or bindings.

use crate::{js_number_to_string, Span};

/// A spanned expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Every expression form in the MiniJS grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // ── Literals ──────────────────────────────────────────────
    /// Numeric literal: `42`, `3.14`
    Number(f64),
    /// String literal, single- or double-quoted: `'hi'`, `"hi"`
    String(String),
    /// `true` / `false`
    Bool(bool),
    /// `null`
    Null,
    /// `undefined`
    Undefined,

    // ── Collections ───────────────────────────────────────────
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `{key: value, "str key": value, 3: value}`
    Object(Vec<(ObjectKey, Expr)>),

    // ── Names ─────────────────────────────────────────────────
    /// A bare identifier. The isolated scope resolves only `NaN` and
    /// `Infinity`; anything else is a reference error at eval time.
    Identifier(String),

    // ── Operators ─────────────────────────────────────────────
    /// `-x`, `+x`, `!x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Arithmetic, equality and relational operators.
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// `&&` / `||` — short-circuiting, operand-valued.
    Logical {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    /// `cond ? consequent : alternate`
    Conditional {
        condition: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },

    // ── Postfix ───────────────────────────────────────────────
    /// `object.property`
    Member { object: Box<Expr>, property: String },
    /// `object[index]`
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    /// `callee(args)` — always a type error at eval time, since no
    /// function values exist in the isolated scope.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },

    /// Explicit grouping: `(expr)`
    Paren(Box<Expr>),
}

/// An object literal key.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKey {
    /// `{name: ...}` — also covers keyword keys like `{null: ...}`.
    Identifier(String),
    /// `{"name": ...}` or `{'name': ...}`
    String(String),
    /// `{3: ...}` — stringified at evaluation time.
    Number(f64),
}

impl ObjectKey {
    /// The property name this key denotes, after ToString.
    pub fn property_name(&self) -> String {
        match self {
            ObjectKey::Identifier(s) | ObjectKey::String(s) => s.clone(),
            ObjectKey::Number(n) => js_number_to_string(*n),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-` (numeric negation)
    Neg,
    /// `+` (ToNumber)
    Plus,
    /// `!` (boolean negation)
    Not,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `==` (loose)
    Eq,
    /// `!=` (loose)
    NotEq,
    /// `===`
    StrictEq,
    /// `!==`
    StrictNotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

/// Short-circuiting logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}
