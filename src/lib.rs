//! solver24 - decide whether four numbers make 24
//!
//! This library searches every ordering of four numbers, every triple of the
//! operators `+ - * /` and two parenthesizations for an expression that
//! evaluates to 24, and remembers the answer for each multiset of inputs.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::constants::{EPSILON, TARGET};
pub use solver::{CanonicalKey, Shape, SolutionCache, Solver24, SolverError, SurveyReport};
pub use utils::{UtilsError, validate_numbers};

/// Find an expression over the given numbers that evaluates to 24
///
/// This is a convenience function that validates the input, creates a fresh
/// solver and asks it for a witness.
///
/// # Arguments
///
/// * `numbers` - Exactly four finite values
///
/// # Returns
///
/// * `Ok(Some(String))` - A witness such as `((8 + 4) * 3) - 12`
/// * `Ok(None)` - If no ordering, operator triple and shape reaches 24
/// * `Err(SolverError)` - If the input is not four finite numbers
///
/// # Errors
///
/// This function will return an error if:
/// * The input does not contain exactly four numbers
/// * Any of the numbers is NaN or infinite
///
/// # Examples
///
/// ```
/// use solver24::find_solution;
///
/// match find_solution(&[8.0, 4.0, 3.0, 12.0]) {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(numbers: &[f64]) -> Result<Option<String>, SolverError> {
    validate_numbers(numbers)?;

    let solver = Solver24::new();
    Ok(solver.get_solution(numbers))
}

/// Check a witness string by evaluating it with standard operator precedence
///
/// # Errors
///
/// Returns [`SolverError::ExpressionError`] if the expression cannot be parsed
/// or divides by zero.
///
/// # Examples
///
/// ```
/// assert_eq!(solver24::verify_witness("(6 * 4) * (3 - 2)"), Ok(true));
/// assert_eq!(solver24::verify_witness("6 * 4 * 3 - 2"), Ok(false));
/// ```
pub fn verify_witness(witness: &str) -> Result<bool, SolverError> {
    let value = Expression::parse(witness)?.evaluate()?;
    Ok(solver::search::is_target(value))
}
