use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Node, UnaryOp, Variable, Visitor};
use crate::runtime::{GlobalScope, Value};

/// Tree-walking evaluator for minipas ASTs
///
/// Owns the global scope for one interpretation run:
/// - `Assign` evaluates its value and overwrites the variable
/// - `Var` reads a variable, failing if it was never assigned
/// - `Compound` runs statements in order and stops at the first failure,
///   keeping the effects of the statements before it
///
/// Arithmetic is checked: overflow is an error rather than wrapping, and
/// division truncates toward zero.
#[derive(Debug, Default)]
pub struct Interpreter {
    scope: GlobalScope,
}

impl Interpreter {
    /// Creates an interpreter with an empty global scope
    pub fn new() -> Self {
        Interpreter {
            scope: GlobalScope::new(),
        }
    }

    /// Evaluate any node
    pub fn evaluate(&mut self, node: &Node) -> Result<Value> {
        node.accept(self)
    }

    /// Evaluate a bare expression to its integer value
    pub fn evaluate_expression(&mut self, expr: &Node) -> Result<i64> {
        self.evaluate(expr)?.as_int()
    }

    /// Run a program for its effect on the global scope
    ///
    /// On failure the scope keeps every assignment made before the failing
    /// statement; there is no rollback.
    pub fn interpret(&mut self, program: &Node) -> Result<()> {
        match self.evaluate(program) {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    variables = self.scope.len(),
                    "interpretation failed"
                );
                Err(err)
            }
        }
    }

    /// The global scope as it stands now
    pub fn global_scope(&self) -> &GlobalScope {
        &self.scope
    }

    /// Consumes the interpreter, returning its global scope
    pub fn into_scope(self) -> GlobalScope {
        self.scope
    }
}

impl Visitor for Interpreter {
    type Output = Result<Value>;

    fn visit_num(&mut self, value: i64) -> Result<Value> {
        Ok(Value::Int(value))
    }

    fn visit_bin_op(&mut self, left: &Node, op: BinaryOp, right: &Node) -> Result<Value> {
        let left = left.accept(self)?.as_int()?;
        let right = right.accept(self)?.as_int()?;
        apply_binary(left, op, right).map(Value::Int)
    }

    fn visit_unary(&mut self, op: UnaryOp, operand: &Node) -> Result<Value> {
        let value = operand.accept(self)?.as_int()?;
        match op {
            UnaryOp::Plus => Ok(Value::Int(value)),
            UnaryOp::Minus => value
                .checked_neg()
                .map(Value::Int)
                .ok_or(Error::NegationOverflow { value }),
        }
    }

    fn visit_var(&mut self, var: &Variable) -> Result<Value> {
        self.scope.get(&var.name).map(Value::Int)
    }

    fn visit_assign(&mut self, target: &Variable, value: &Node) -> Result<Value> {
        let value = value
            .accept(self)
            .and_then(|v| v.as_int())
            .map_err(|e| e.with_context(format!("assignment to `{}`", target.name)))?;

        self.scope.set(&target.name, value);
        tracing::debug!(name = %target.key(), value, "assigned variable");
        Ok(Value::Null)
    }

    fn visit_compound(&mut self, statements: &[Node]) -> Result<Value> {
        for statement in statements {
            statement.accept(self)?;
        }
        Ok(Value::Null)
    }

    fn visit_no_op(&mut self) -> Result<Value> {
        Ok(Value::Null)
    }
}

fn apply_binary(left: i64, op: BinaryOp, right: i64) -> Result<i64> {
    let result = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
        BinaryOp::Mul => left.checked_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                return Err(Error::DivisionByZero);
            }
            left.checked_div(right)
        }
    };

    result.ok_or(Error::ArithmeticOverflow {
        left,
        op: op.symbol(),
        right,
    })
}
