use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Node, UnaryOp, Variable, Visitor};

/// Renders an expression in reverse Polish notation: `2+5*3` becomes `2 5 3 * +`
#[derive(Debug, Clone, Copy, Default)]
pub struct PostfixRenderer;

impl PostfixRenderer {
    const NAME: &'static str = "postfix";

    /// Render an expression tree
    pub fn render(expr: &Node) -> Result<String> {
        expr.accept(&mut PostfixRenderer)
    }

    fn unsupported(node: &'static str) -> Result<String> {
        Err(Error::UnsupportedNode {
            renderer: Self::NAME,
            node,
        })
    }
}

impl Visitor for PostfixRenderer {
    type Output = Result<String>;

    fn visit_num(&mut self, value: i64) -> Result<String> {
        Ok(value.to_string())
    }

    fn visit_bin_op(&mut self, left: &Node, op: BinaryOp, right: &Node) -> Result<String> {
        Ok(format!("{} {} {}", left.accept(self)?, right.accept(self)?, op))
    }

    fn visit_unary(&mut self, _op: UnaryOp, _operand: &Node) -> Result<String> {
        Self::unsupported("Unary")
    }

    fn visit_var(&mut self, _var: &Variable) -> Result<String> {
        Self::unsupported("Var")
    }

    fn visit_assign(&mut self, _target: &Variable, _value: &Node) -> Result<String> {
        Self::unsupported("Assign")
    }

    fn visit_compound(&mut self, _statements: &[Node]) -> Result<String> {
        Self::unsupported("Compound")
    }

    fn visit_no_op(&mut self) -> Result<String> {
        Self::unsupported("NoOp")
    }
}
