use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Trailing input at position {0}")]
    TrailingInput(usize),
    #[error("Expression nested deeper than {0} levels")]
    TooDeep(usize),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}
