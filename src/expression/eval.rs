use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] if any division in the tree
    /// has a right operand that evaluates to exactly zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => Operator::Add.apply(l.evaluate()?, r.evaluate()?),
            Expression::Sub(l, r) => Operator::Sub.apply(l.evaluate()?, r.evaluate()?),
            Expression::Mul(l, r) => Operator::Mul.apply(l.evaluate()?, r.evaluate()?),
            Expression::Div(l, r) => Operator::Div.apply(l.evaluate()?, r.evaluate()?),
        };

        match &result {
            Ok(value) => trace!("Expression {} evaluated to {}", self, value),
            Err(e) => trace!("Expression {} failed: {}", self, e),
        }

        result
    }
}
