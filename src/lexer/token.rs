use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where token starts (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Human-readable description used in syntax errors
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::Identifier(name) => format!("identifier `{}`", name),
            _ => format!("`{}`", self.lexeme),
        }
    }
}

/// All token types in minipas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Unsigned integer literal
    Number(i64),
    /// Identifier, spelling preserved
    Identifier(String),

    // Keywords
    /// BEGIN keyword
    Begin,
    /// END keyword
    End,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Integer division, spelled `/` or `DIV`
    Slash,
    /// Assignment operator (:=)
    Assign,

    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Statement separator
    Semicolon,
    /// Program terminator
    Dot,

    // Special
    /// End of file marker
    Eof,
}

impl TokenKind {
    /// Look up a reserved word, ignoring case
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s.to_ascii_uppercase().as_str() {
            "BEGIN" => Some(TokenKind::Begin),
            "END" => Some(TokenKind::End),
            "DIV" => Some(TokenKind::Slash),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Identifier(id) => write!(f, "{}", id),
            _ => write!(f, "{:?}", self),
        }
    }
}
