use super::ast::{BinaryOp, Node, UnaryOp, Variable};
use crate::error::{Error, Expected, Result};
use crate::lexer::{Token, TokenKind, TokenSource, Tokeniser};

/// Configuration for parsing
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Maximum nesting of blocks, parentheses, unary signs and binary
    /// operators (default: unlimited)
    pub max_depth: Option<usize>,
}

/// Recursive-descent parser for minipas programs and expressions
///
/// Grammar (all binary operators left-associative, unary binds tightest):
///
/// ```text
/// Program             := CompoundStatement '.' EOF
/// CompoundStatement   := BEGIN StatementList END
/// StatementList       := Statement (';' Statement)*
/// Statement           := CompoundStatement | AssignmentStatement | ε
/// AssignmentStatement := Variable ':=' Expr
/// Variable            := ID
/// Expr                := Term (('+'|'-') Term)*
/// Term                := Factor (('*'|'/'|DIV) Factor)*
/// Factor              := ('+'|'-') Factor | '(' Expr ')' | Variable | NUMBER
/// ```
///
/// Parsing is single pass and stops at the first error.
pub struct PascalParser<S: TokenSource = Tokeniser> {
    tokens: S,
    /// One-token lookahead
    current: Token,
    config: ParserConfig,
    depth: usize,
}

impl PascalParser<Tokeniser> {
    /// Creates a parser over source text, reading the first token
    pub fn new(source: &str) -> Result<Self> {
        Self::from_source(Tokeniser::new(source))
    }

    /// Creates a parser over source text with custom configuration
    pub fn with_config(source: &str, config: ParserConfig) -> Result<Self> {
        Self::from_source_with_config(Tokeniser::new(source), config)
    }
}

impl<S: TokenSource> PascalParser<S> {
    /// Creates a parser pulling tokens from any token source
    pub fn from_source(tokens: S) -> Result<Self> {
        Self::from_source_with_config(tokens, ParserConfig::default())
    }

    /// Creates a parser pulling tokens from any token source, with configuration
    pub fn from_source_with_config(mut tokens: S, config: ParserConfig) -> Result<Self> {
        let current = tokens.next_token()?;
        Ok(PascalParser {
            tokens,
            current,
            config,
            depth: 0,
        })
    }

    /// Parses a complete program; the root is always a `Compound` node
    pub fn parse_program(&mut self) -> Result<Node> {
        let node = self.compound_statement()?;
        self.consume(TokenKind::Dot, Expected::Dot)?;
        self.expect_end_of_input()?;

        if let Node::Compound(statements) = &node {
            tracing::debug!(statements = statements.len(), "parsed program");
        }
        Ok(node)
    }

    /// Parses a bare expression that must span the whole input
    pub fn parse_expression(&mut self) -> Result<Node> {
        let (node, levels) = self.expr()?;
        self.expect_end_of_input()?;

        tracing::debug!(root = node.kind_name(), levels, "parsed expression");
        Ok(node)
    }

    fn compound_statement(&mut self) -> Result<Node> {
        self.consume(TokenKind::Begin, Expected::Begin)?;
        let statements = self.nested(|p| p.statement_list())?;
        self.consume(TokenKind::End, Expected::End)?;
        Ok(Node::Compound(statements))
    }

    fn statement_list(&mut self) -> Result<Vec<Node>> {
        let mut statements = vec![self.statement()?];

        while self.check(&TokenKind::Semicolon) {
            self.advance()?;
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    fn statement(&mut self) -> Result<Node> {
        match self.current.kind {
            TokenKind::Begin => self.compound_statement(),
            TokenKind::Identifier(ref name) => {
                let target = Variable::new(name.clone());
                self.advance()?;
                self.assignment_statement(target)
            }
            _ => Ok(Node::NoOp),
        }
    }

    fn assignment_statement(&mut self, target: Variable) -> Result<Node> {
        self.consume(TokenKind::Assign, Expected::Assign)?;
        let (value, _) = self.expr()?;
        Ok(Node::Assign {
            target,
            value: Box::new(value),
        })
    }

    // Expression rules return the node with the number of nesting levels it
    // spans: one per binary operator, unary sign or parenthesis on its
    // deepest path.

    fn expr(&mut self) -> Result<(Node, usize)> {
        self.binary_chain(Self::term, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn term(&mut self) -> Result<(Node, usize)> {
        self.binary_chain(Self::factor, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// Folds `operand (op operand)*` into a left-deep tree
    fn binary_chain(
        &mut self,
        operand: fn(&mut Self) -> Result<(Node, usize)>,
        operator: fn(&TokenKind) -> Option<BinaryOp>,
    ) -> Result<(Node, usize)> {
        let (mut node, mut levels) = operand(self)?;

        while let Some(op) = operator(&self.current.kind) {
            self.advance()?;
            let (right, right_levels) = operand(self)?;
            levels = levels.max(right_levels) + 1;
            self.check_depth(self.depth + levels)?;
            node = Node::bin_op(node, op, right);
        }

        Ok((node, levels))
    }

    fn factor(&mut self) -> Result<(Node, usize)> {
        match self.current.kind {
            TokenKind::Plus | TokenKind::Minus => {
                let op = if self.check(&TokenKind::Plus) {
                    UnaryOp::Plus
                } else {
                    UnaryOp::Minus
                };
                self.advance()?;
                let (operand, levels) = self.nested(|p| p.factor())?;
                Ok((Node::unary(op, operand), levels + 1))
            }
            TokenKind::LeftParen => {
                self.advance()?;
                let (node, levels) = self.nested(|p| p.expr())?;
                self.consume(TokenKind::RightParen, Expected::ClosingParen)?;
                Ok((node, levels + 1))
            }
            TokenKind::Identifier(ref name) => {
                let var = Variable::new(name.clone());
                self.advance()?;
                Ok((Node::Var(var), 0))
            }
            TokenKind::Number(value) => {
                self.advance()?;
                Ok((Node::Num(value), 0))
            }
            _ => Err(self.syntax_error(Expected::Factor)),
        }
    }

    /// Runs `f` one nesting level deeper, enforcing the configured limit
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.check_depth(self.depth + 1)?;
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        match self.config.max_depth {
            Some(limit) if depth > limit => Err(Error::NestingTooDeep { limit }),
            _ => Ok(()),
        }
    }

    fn expect_end_of_input(&self) -> Result<()> {
        if self.check(&TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.syntax_error(Expected::EndOfInput))
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.current.kind == kind
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.tokens.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn consume(&mut self, kind: TokenKind, expected: Expected) -> Result<Token> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(self.syntax_error(expected))
        }
    }

    fn syntax_error(&self, expected: Expected) -> Error {
        Error::SyntaxError {
            expected,
            found: self.current.describe(),
            line: self.current.line,
            column: self.current.column,
        }
    }
}
