//! Exhaustive search over orderings, operator triples and tree shapes

use log::trace;

use crate::expression::{Expression, ExpressionError, Operator};
use crate::solver::constants::{EPSILON, INPUT_LEN, TARGET};
use crate::utils::permutations;

/// Whether `value` is close enough to the target to count as a solution
#[inline]
pub fn is_target(value: f64) -> bool {
    (value - TARGET).abs() < EPSILON
}

/// Tree shape combining four operands with three operators.
///
/// Only two shapes are searched. With every ordering of the operands they
/// reach every tree in which each `-` and `/` has a single number as its
/// right operand, except at the root of [`Shape::Balanced`] where a pair is
/// allowed. Trees like `8 / (3 - 8 / 3)` are outside the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `((a op1 b) op2 c) op3 d`
    LeftDeep,
    /// `(a op1 b) op2 (c op3 d)`
    Balanced,
}

impl Shape {
    /// Every shape, in search order
    pub const ALL: [Shape; 2] = [Shape::LeftDeep, Shape::Balanced];

    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] if any step divides by zero.
    #[inline]
    pub fn evaluate(
        self,
        [a, b, c, d]: [f64; INPUT_LEN],
        [op1, op2, op3]: [Operator; 3],
    ) -> Result<f64, ExpressionError> {
        match self {
            Shape::LeftDeep => {
                let first = op1.apply(a, b)?;
                let second = op2.apply(first, c)?;
                op3.apply(second, d)
            }
            Shape::Balanced => {
                let left = op1.apply(a, b)?;
                let right = op3.apply(c, d)?;
                op2.apply(left, right)
            }
        }
    }

    pub fn build(
        self,
        [a, b, c, d]: [f64; INPUT_LEN],
        [op1, op2, op3]: [Operator; 3],
    ) -> Expression {
        let num = Expression::Number;
        match self {
            Shape::LeftDeep => Expression::binary(
                op3,
                Expression::binary(op2, Expression::binary(op1, num(a), num(b)), num(c)),
                num(d),
            ),
            Shape::Balanced => Expression::binary(
                op2,
                Expression::binary(op1, num(a), num(b)),
                Expression::binary(op3, num(c), num(d)),
            ),
        }
    }
}

/// One point of the search space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub numbers: [f64; INPUT_LEN],
    pub operators: [Operator; 3],
    pub shape: Shape,
}

impl Candidate {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] if any step divides by zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        self.shape.evaluate(self.numbers, self.operators)
    }

    /// A candidate that fails to evaluate is never a solution
    pub fn hits_target(&self) -> bool {
        match self.evaluate() {
            Ok(value) => is_target(value),
            Err(e) => {
                trace!("Skipping candidate {:?}: {}", self, e);
                false
            }
        }
    }

    pub fn to_expression(&self) -> Expression {
        self.shape.build(self.numbers, self.operators)
    }
}

/// Every operator triple, `op1` varying slowest
fn operator_triples() -> impl Iterator<Item = [Operator; 3]> {
    Operator::ALL.into_iter().flat_map(|op1| {
        Operator::ALL.into_iter().flat_map(move |op2| {
            Operator::ALL
                .into_iter()
                .map(move |op3| [op1, op2, op3])
        })
    })
}

/// The whole search space for `numbers` in search order: orderings, then
/// operator triples, then shapes. Yields 24 * 64 * 2 candidates.
pub fn candidates(numbers: [f64; INPUT_LEN]) -> impl Iterator<Item = Candidate> {
    permutations(&numbers)
        .into_iter()
        .map(|perm| std::array::from_fn::<f64, INPUT_LEN, _>(|i| perm[i]))
        .flat_map(|perm| {
            operator_triples().flat_map(move |operators| {
                Shape::ALL.into_iter().map(move |shape| Candidate {
                    numbers: perm,
                    operators,
                    shape,
                })
            })
        })
}

/// First candidate in search order that reaches the target
pub fn find_witness(numbers: [f64; INPUT_LEN]) -> Option<Candidate> {
    candidates(numbers).find(Candidate::hits_target)
}
