//! MiniJS parser: recursive descent over the token stream, producing a
//! single expression AST.

mod parse_expr;
pub mod parser;

pub use parser::Parser;

use minijs_lexer::Lexer;
use minijs_types::{ast::Expr, SyntaxError};

/// Lex and parse one expression from source text.
pub fn parse_expression(source: &str) -> Result<Expr, SyntaxError> {
    let tokens = Lexer::new(source).lex()?;
    Parser::new(tokens).parse()
}
