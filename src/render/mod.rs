//! Textual renderers for expression trees
//!
//! Both renderers cover only `Num` and `BinOp` nodes. Variables, unary signs
//! and statements make them fail with [`Error::UnsupportedNode`] instead of
//! printing something misleading.
//!
//! [`Error::UnsupportedNode`]: crate::Error::UnsupportedNode

mod postfix;
mod sexpr;

pub use postfix::PostfixRenderer;
pub use sexpr::SExprRenderer;
