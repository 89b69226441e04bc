use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Node, UnaryOp, Variable, Visitor};

/// Renders an expression as a fully parenthesised prefix S-expression:
/// `2+5*3` becomes `(+ 2 (* 5 3))`
#[derive(Debug, Clone, Copy, Default)]
pub struct SExprRenderer;

impl SExprRenderer {
    const NAME: &'static str = "s-expression";

    /// Render an expression tree
    pub fn render(expr: &Node) -> Result<String> {
        expr.accept(&mut SExprRenderer)
    }

    fn unsupported(node: &'static str) -> Result<String> {
        Err(Error::UnsupportedNode {
            renderer: Self::NAME,
            node,
        })
    }
}

impl Visitor for SExprRenderer {
    type Output = Result<String>;

    fn visit_num(&mut self, value: i64) -> Result<String> {
        Ok(value.to_string())
    }

    fn visit_bin_op(&mut self, left: &Node, op: BinaryOp, right: &Node) -> Result<String> {
        Ok(format!("({} {} {})", op, left.accept(self)?, right.accept(self)?))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_first() {
        // 2 + 5 * 3
        let tree = Node::bin_op(
            Node::Num(2),
            BinaryOp::Add,
            Node::bin_op(Node::Num(5), BinaryOp::Mul, Node::Num(3)),
        );
        assert_eq!(SExprRenderer::render(&tree).unwrap(), "(+ 2 (* 5 3))");
    }

    #[test]
    fn test_left_deep_tree() {
        // 3 + 5 - 51
        let tree = Node::bin_op(
            Node::bin_op(Node::Num(3), BinaryOp::Add, Node::Num(5)),
            BinaryOp::Sub,
            Node::Num(51),
        );
        assert_eq!(SExprRenderer::render(&tree).unwrap(), "(- (+ 3 5) 51)");
    }

    #[test]
    fn test_unsupported_nodes() {
        assert_eq!(
            SExprRenderer::render(&Node::assign("a", Node::Num(1))).unwrap_err(),
            Error::UnsupportedNode {
                renderer: "s-expression",
                node: "Assign"
            }
        );
        assert!(SExprRenderer::render(&Node::NoOp).is_err());
    }
}
