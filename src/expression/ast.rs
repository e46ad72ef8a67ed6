use crate::expression::operator::Operator;

/// Arithmetic expression over numbers and the four basic operators
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// Combine two expressions with the given operator
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        let (l, r) = (Box::new(left), Box::new(right));
        match op {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }

    /// Split a compound expression into its operator and operands
    pub fn as_binary(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(l, r) => Some((Operator::Add, l, r)),
            Expression::Sub(l, r) => Some((Operator::Sub, l, r)),
            Expression::Mul(l, r) => Some((Operator::Mul, l, r)),
            Expression::Div(l, r) => Some((Operator::Div, l, r)),
        }
    }
}
