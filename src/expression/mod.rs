//! Expressions over the four basic operators: building, evaluating,
//! rendering and parsing

mod ast;
mod display;
mod errors;
mod eval;
mod operator;
mod parse;

pub use ast::Expression;
pub(crate) use display::format_number;
pub use errors::ExpressionError;
pub use operator::Operator;
pub use parse::MAX_NESTING;
