//! Minipas Parser Module
//!
//! Parses the token stream into an abstract syntax tree and defines the
//! visitor contract every traversal of that tree implements.

mod ast;
mod pascal_parser;

pub use ast::{BinaryOp, Node, UnaryOp, Variable, Visitor};
pub use pascal_parser::{PascalParser, ParserConfig};
