//! Evaluation of minipas ASTs

mod environment;
mod interpreter;
mod value;

pub use environment::GlobalScope;
pub use interpreter::Interpreter;
pub use value::Value;
