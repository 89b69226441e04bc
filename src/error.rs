//! Error types for the minipas interpreter

use std::fmt;

use thiserror::Error;

/// Construct the parser was looking for when it hit a different token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// `BEGIN` opening a compound statement
    Begin,
    /// `END` closing a compound statement
    End,
    /// `.` terminating a program
    Dot,
    /// `:=` in an assignment
    Assign,
    /// `)` closing a parenthesised expression
    ClosingParen,
    /// Start of a factor: `(`, identifier, number or unary sign
    Factor,
    /// Nothing may follow a complete program or bare expression
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expected::Begin => write!(f, "expected BEGIN"),
            Expected::End => write!(f, "expected END"),
            Expected::Dot => write!(f, "expected '.' after the program"),
            Expected::Assign => write!(f, "expected ':='"),
            Expected::ClosingParen => write!(f, "expected closing parenthesis"),
            Expected::Factor => {
                write!(f, "expected a left parenthesis, identifier, or number")
            }
            Expected::EndOfInput => write!(f, "expected end of input"),
        }
    }
}

/// Minipas errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Lexical errors
    /// Character that cannot start any token
    ///
    /// **Triggered by:** `_`, `@`, `\r`, non-ASCII letters, a lone `:`
    /// **Example:** `_asdf`
    #[error("unexpected character {character:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        /// Offending character
        character: char,
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        column: usize,
    },

    /// Integer literal that does not fit in an `i64`
    #[error("integer literal {literal} at line {line}, column {column} does not fit in 64 bits")]
    LiteralTooLarge {
        /// Digits as written in the source
        literal: String,
        /// Line number where the literal starts
        line: usize,
        /// Column number where the literal starts
        column: usize,
    },

    // Parse errors
    /// Syntax error encountered during parsing
    ///
    /// **Triggered by:** a token that does not fit the grammar at this point
    /// **Example:** `(1 + 2` (missing closing parenthesis)
    #[error("syntax error at line {line}, column {column}: {expected}, got {found}")]
    SyntaxError {
        /// What the parser was looking for
        expected: Expected,
        /// Description of the token actually found
        found: String,
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        column: usize,
    },

    /// Nesting deeper than the configured parser limit
    #[error("nesting exceeds the configured limit of {limit} levels")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
    },

    // Runtime errors
    /// Reference to a variable that was never assigned
    ///
    /// **Triggered by:** reading a variable before any assignment to it
    /// **Example:** `BEGIN x := y END.`
    #[error("undefined variable: {name}")]
    UndefinedVariable {
        /// Variable name as spelled at the use site
        name: String,
    },

    /// Division by zero error
    #[error("division by zero")]
    DivisionByZero,

    /// Binary operation whose result does not fit in an `i64`
    #[error("arithmetic overflow: {left} {op} {right}")]
    ArithmeticOverflow {
        /// Left operand
        left: i64,
        /// Operator symbol
        op: char,
        /// Right operand
        right: i64,
    },

    /// Negation of `i64::MIN`
    #[error("arithmetic overflow: -({value})")]
    NegationOverflow {
        /// Operand being negated
        value: i64,
    },

    // Renderer errors
    /// Node kind a renderer does not know how to print
    #[error("{renderer} renderer does not support {node} nodes")]
    UnsupportedNode {
        /// Renderer name
        renderer: &'static str,
        /// Node kind name
        node: &'static str,
    },

    /// Fault the parser's grammar should make unreachable
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// Error annotated by an outer layer
    #[error("{context}: {source}")]
    Context {
        /// What the outer layer was doing
        context: String,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bug in the interpreter itself; the host should not carry on
    Fatal,
    /// Problem with the submitted source; the next request may succeed
    Recoverable,
}

impl Error {
    /// Create an internal invariant violation with a message
    pub fn invariant(msg: impl Into<String>) -> Self {
        Error::InternalInvariantViolation(msg.into())
    }

    /// Wrap this error with a description of what the caller was doing
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Innermost error with every context layer removed
    pub fn root_cause(&self) -> &Error {
        let mut err = self;
        while let Error::Context { source, .. } = err {
            err = source;
        }
        err
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self.root_cause() {
            Error::InternalInvariantViolation(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Recoverable,
        }
    }
}

/// Result type for minipas operations
pub type Result<T> = std::result::Result<T, Error>;
