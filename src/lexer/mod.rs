//! Lexical analysis for minipas
//!
//! Converts source text into a stream of tokens, one token per call.

mod token;
mod tokeniser;

pub use token::{Token, TokenKind};
pub use tokeniser::{TokenSource, Tokeniser};
