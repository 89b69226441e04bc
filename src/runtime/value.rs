use std::fmt;

use crate::error::{Error, Result};

/// Result of evaluating one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Statements (assignment, compound, empty) produce no value
    Null,
    /// 64-bit integer value
    Int(i64),
}

impl Value {
    /// Get the integer an expression produced
    ///
    /// A `Null` here means a statement ended up in operand position, which
    /// the parser never builds.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Null => Err(Error::invariant(
                "statement node used where an expression value is required",
            )),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(n) => write!(f, "{}", n),
        }
    }
}
