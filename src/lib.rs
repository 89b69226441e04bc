//! # Minipas - a small Pascal subset interpreter
//!
//! Tokeniser, recursive-descent parser and tree-walking interpreter for
//! integer arithmetic and `BEGIN ... END` blocks of assignments.
//!
//! ## Quick Start
//!
//! Interpret a whole program and inspect the final scope:
//!
//! ```rust
//! # fn main() -> minipas::Result<()> {
//! let scope = minipas::interpret_program(
//!     r#"
//!     BEGIN
//!         BEGIN
//!             number := 2;
//!             a := number;
//!             b := 10 * a + 10 * number / 4;
//!             c := a - - b
//!         END;
//!         x := 11;
//!     END.
//!     "#,
//! )?;
//!
//! assert_eq!(scope["b"], 25);
//! assert_eq!(scope["c"], 27);
//! # Ok(())
//! # }
//! ```
//!
//! Evaluate or render a bare expression:
//!
//! ```rust
//! # fn main() -> minipas::Result<()> {
//! assert_eq!(minipas::evaluate_expression("7 + 3 * (10 / (12 / (3 + 1) - 1))")?, 22);
//! assert_eq!(minipas::to_postfix("2+5*3")?, "2 5 3 * +");
//! assert_eq!(minipas::to_sexpr("2+5*3")?, "(+ 2 (* 5 3))");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Tokeniser → Tokens → Parser → AST → Visitor → Result
//! ```
//!
//! - [`Tokeniser`] - Produces one token per call
//! - [`Parser`] - Pulls tokens and builds the AST
//! - [`Visitor`] - One method per node variant; [`Node::accept`] dispatches
//! - [`Interpreter`] - Evaluation visitor owning the [`GlobalScope`]
//! - [`PostfixRenderer`], [`SExprRenderer`] - Read-only rendering visitors
//!
//! The pieces can be driven by hand when the partial scope of a failed run
//! matters:
//!
//! ```rust
//! use minipas::{Error, Interpreter, Parser};
//!
//! # fn main() -> minipas::Result<()> {
//! let program = Parser::new("BEGIN a := 1; b := a / 0; c := 3 END.")?.parse_program()?;
//!
//! let mut interpreter = Interpreter::new();
//! let err = interpreter.interpret(&program).unwrap_err();
//!
//! assert_eq!(err.root_cause(), &Error::DivisionByZero);
//! assert_eq!(interpreter.global_scope().get("a")?, 1);
//! assert!(!interpreter.global_scope().contains("c"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Language
//!
//! - Integers are `i64`; literals and arithmetic that overflow are errors
//! - `/` and the `DIV` keyword both divide, truncating toward zero
//! - Variables are case-insensitive and must be assigned before use
//! - `BEGIN`, `END` and `DIV` are reserved in any case

pub mod error;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod runtime;

use std::collections::HashMap;

/// Version of the minipas interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export main types
pub use error::{Error, ErrorSeverity, Expected, Result};
pub use lexer::{Token, TokenKind, TokenSource, Tokeniser};
pub use parser::{BinaryOp, Node, PascalParser, ParserConfig, UnaryOp, Variable, Visitor};
pub use render::{PostfixRenderer, SExprRenderer};
pub use runtime::{GlobalScope, Interpreter, Value};

/// Type alias for the parser reading directly from source text
pub type Parser = PascalParser<Tokeniser>;

/// Evaluates a bare arithmetic expression
pub fn evaluate_expression(source: &str) -> Result<i64> {
    let expr = Parser::new(source)?.parse_expression()?;
    Interpreter::new().evaluate_expression(&expr)
}

/// Interprets a program and returns its final global scope
pub fn interpret_program(source: &str) -> Result<HashMap<String, i64>> {
    interpret_program_with_config(source, ParserConfig::default())
}

/// Interprets a program with custom parser configuration
pub fn interpret_program_with_config(
    source: &str,
    config: ParserConfig,
) -> Result<HashMap<String, i64>> {
    let program = Parser::with_config(source, config)?.parse_program()?;
    let mut interpreter = Interpreter::new();
    interpreter.interpret(&program)?;
    Ok(interpreter.into_scope().into_map())
}

/// Renders a bare expression in postfix notation
pub fn to_postfix(source: &str) -> Result<String> {
    let expr = Parser::new(source)?.parse_expression()?;
    PostfixRenderer::render(&expr)
}

/// Renders a bare expression as an S-expression
pub fn to_sexpr(source: &str) -> Result<String> {
    let expr = Parser::new(source)?.parse_expression()?;
    SExprRenderer::render(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn test_pipeline_types_are_send() {
        assert_send::<Tokeniser>();
        assert_send::<Parser>();
        assert_send::<Interpreter>();
        assert_send::<Node>();
        assert_send::<Error>();
    }

    #[test]
    fn test_renderers_agree_with_evaluation() {
        assert_eq!(to_postfix("2+5*3").unwrap(), "2 5 3 * +");
        assert_eq!(to_sexpr("2+5*3").unwrap(), "(+ 2 (* 5 3))");
        assert_eq!(evaluate_expression("2+5*3").unwrap(), 17);
    }

    #[test]
    fn test_config_is_applied() {
        let config = ParserConfig { max_depth: Some(1) };
        let err =
            interpret_program_with_config("BEGIN BEGIN a := 1 END END.", config).unwrap_err();
        assert_eq!(err, Error::NestingTooDeep { limit: 1 });
    }
}
