use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract syntax tree node
///
/// Every child is exclusively owned by its parent, so a tree never shares
/// sub-nodes or forms cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Integer literal
    Num(i64),

    /// Binary operation expression
    BinOp {
        /// Left operand expression
        left: Box<Node>,
        /// Binary operator to apply
        op: BinaryOp,
        /// Right operand expression
        right: Box<Node>,
    },

    /// Unary sign applied to a factor
    Unary {
        /// Unary operator to apply
        op: UnaryOp,
        /// Operand expression
        operand: Box<Node>,
    },

    /// Variable reference expression
    Var(Variable),

    /// Assignment statement: `target := value`
    Assign {
        /// Variable being assigned
        target: Variable,
        /// Expression value to assign
        value: Box<Node>,
    },

    /// `BEGIN ... END` block, statements in source order
    Compound(Vec<Node>),

    /// Empty statement
    NoOp,
}

/// Variable as written in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Spelling from the source, case preserved
    pub name: String,
}

impl Variable {
    /// Creates a variable node from its source spelling
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    /// Lowercase form that identifies the variable's slot
    pub fn key(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition operator (+)
    Add,
    /// Subtraction operator (-)
    Sub,
    /// Multiplication operator (*)
    Mul,
    /// Integer division (/ or DIV), truncating toward zero
    Div,
}

impl BinaryOp {
    /// Operator symbol used by renderers and error messages
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Identity (+x)
    Plus,
    /// Negation (-x)
    Minus,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnaryOp::Plus => write!(f, "+"),
            UnaryOp::Minus => write!(f, "-"),
        }
    }
}

/// A traversal over the AST, one method per node variant
///
/// Every method is required, so adding a variant means updating every
/// visitor.
pub trait Visitor {
    /// Result of visiting one node
    type Output;

    /// Visit an integer literal
    fn visit_num(&mut self, value: i64) -> Self::Output;
    /// Visit a binary operation
    fn visit_bin_op(&mut self, left: &Node, op: BinaryOp, right: &Node) -> Self::Output;
    /// Visit a unary operation
    fn visit_unary(&mut self, op: UnaryOp, operand: &Node) -> Self::Output;
    /// Visit a variable reference
    fn visit_var(&mut self, var: &Variable) -> Self::Output;
    /// Visit an assignment
    fn visit_assign(&mut self, target: &Variable, value: &Node) -> Self::Output;
    /// Visit a compound statement
    fn visit_compound(&mut self, statements: &[Node]) -> Self::Output;
    /// Visit an empty statement
    fn visit_no_op(&mut self) -> Self::Output;
}

impl Node {
    /// Dispatches to the visitor method matching this node's variant
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Num(value) => visitor.visit_num(*value),
            Node::BinOp { left, op, right } => visitor.visit_bin_op(left, *op, right),
            Node::Unary { op, operand } => visitor.visit_unary(*op, operand),
            Node::Var(var) => visitor.visit_var(var),
            Node::Assign { target, value } => visitor.visit_assign(target, value),
            Node::Compound(statements) => visitor.visit_compound(statements),
            Node::NoOp => visitor.visit_no_op(),
        }
    }

    /// Variant name, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Num(_) => "Num",
            Node::BinOp { .. } => "BinOp",
            Node::Unary { .. } => "Unary",
            Node::Var(_) => "Var",
            Node::Assign { .. } => "Assign",
            Node::Compound(_) => "Compound",
            Node::NoOp => "NoOp",
        }
    }

    /// Builds a binary operation node
    pub fn bin_op(left: Node, op: BinaryOp, right: Node) -> Node {
        Node::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Builds a unary operation node
    pub fn unary(op: UnaryOp, operand: Node) -> Node {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Builds an assignment node
    pub fn assign(target: impl Into<String>, value: Node) -> Node {
        Node::Assign {
            target: Variable::new(target),
            value: Box::new(value),
        }
    }

    /// Builds a variable reference node
    pub fn var(name: impl Into<String>) -> Node {
        Node::Var(Variable::new(name))
    }
}
