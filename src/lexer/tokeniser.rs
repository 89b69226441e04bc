use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Pull-based supply of tokens for the parser
///
/// Implementations return [`TokenKind::Eof`] once input is exhausted and keep
/// returning it on every later call.
pub trait TokenSource {
    /// Produces the next token
    fn next_token(&mut self) -> Result<Token>;
}

/// Tokeniser for minipas source text
pub struct Tokeniser {
    /// Source code as character vector
    source: Vec<char>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Line where the current token starts
    start_line: usize,
    /// Column where the current token starts
    start_column: usize,
}

impl Tokeniser {
    /// Creates a new tokeniser over in-memory source code
    pub fn new(source: &str) -> Self {
        Tokeniser {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Drains the stream, returning every token up to and including `Eof`
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Produces the next token, skipping leading whitespace
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let c = self.advance();
        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,

            // A ':' without '=' leaves the lookahead untouched and fails below
            ':' if self.match_char('=') => TokenKind::Assign,

            c if c.is_ascii_digit() => self
                .scan_number()
                .map_err(|e| e.with_context("error reading number"))?,

            c if c.is_ascii_alphabetic() => self.scan_identifier_or_keyword(),

            _ => {
                return Err(Error::UnexpectedCharacter {
                    character: c,
                    line: self.start_line,
                    column: self.start_column,
                });
            }
        };

        let token = self.make_token(kind);
        tracing::trace!(
            kind = ?token.kind,
            line = token.line,
            column = token.column,
            "token"
        );
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n')) {
            self.advance();
        }
    }

    fn scan_number(&mut self) -> Result<TokenKind> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = self.lexeme();
        // Only digits were consumed, so overflow is the sole failure
        text.parse::<i64>()
            .map(TokenKind::Number)
            .map_err(|_| Error::LiteralTooLarge {
                literal: text,
                line: self.start_line,
                column: self.start_column,
            })
    }

    fn scan_identifier_or_keyword(&mut self) -> TokenKind {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let text = self.lexeme();
        TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier(text))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.start_line, self.start_column)
    }
}

impl TokenSource for Tokeniser {
    fn next_token(&mut self) -> Result<Token> {
        Tokeniser::next_token(self)
    }
}
