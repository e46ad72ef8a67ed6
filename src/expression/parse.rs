use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// Deepest nesting of parentheses and unary minus accepted
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser with standard precedence: `*` and `/` bind
/// tighter than `+` and `-`, and operators of equal precedence associate left.
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .input
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.input.get(self.pos).copied()
    }

    fn unexpected(&self, byte: u8) -> ExpressionError {
        ExpressionError::UnexpectedCharacter {
            found: char::from(byte),
            position: self.pos,
        }
    }

    fn enter(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            debug!("Nesting deeper than {} at position {}", MAX_NESTING, self.pos);
            return Err(ExpressionError::TooDeep(MAX_NESTING));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_sum(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_product()?;
        while let Some(op) = self
            .peek()
            .and_then(|b| Operator::from_symbol(char::from(b)))
            .filter(|op| op.precedence() == 1)
        {
            self.pos += 1;
            let right = self.parse_product()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_product(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self
            .peek()
            .and_then(|b| Operator::from_symbol(char::from(b)))
            .filter(|op| op.precedence() == 2)
        {
            self.pos += 1;
            let right = self.parse_factor()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some(b'(') => {
                self.pos += 1;
                self.enter()?;
                let inner = self.parse_sum()?;
                self.leave();
                match self.peek() {
                    Some(b')') => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(other) => Err(self.unexpected(other)),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some(b'-') => {
                self.pos += 1;
                self.enter()?;
                let operand = self.parse_factor()?;
                self.leave();
                match operand {
                    Expression::Number(n) => Ok(Expression::Number(-n)),
                    inner => Ok(Expression::Sub(
                        Box::new(Expression::Number(0.0)),
                        Box::new(inner),
                    )),
                }
            }
            Some(b) if b.is_ascii_digit() || b == b'.' => self.parse_number(),
            Some(b) if b.is_ascii_alphabetic() => self.parse_non_finite(),
            Some(other) => Err(self.unexpected(other)),
        }
    }

    /// `inf` and `NaN`, as `f64` renders them
    fn parse_non_finite(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        while self
            .input
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_alphabetic())
        {
            self.pos += 1;
        }

        match self.input.get(start..self.pos) {
            Some(b"inf") => Ok(Expression::Number(f64::INFINITY)),
            Some(b"NaN") => Ok(Expression::Number(f64::NAN)),
            _ => {
                self.pos = start;
                let found = self.input.get(start).copied().unwrap_or_default();
                Err(self.unexpected(found))
            }
        }
    }

    fn parse_number(&mut self) -> Result<Expression, ExpressionError> {
        let start = self.pos;
        while self
            .input
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
        {
            self.pos += 1;
        }

        let literal = self
            .input
            .get(start..self.pos)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default();

        literal
            .parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| ExpressionError::InvalidNumber(literal.to_string()))
    }
}

impl Expression {
    /// Parse an infix arithmetic expression such as `((8 + 4) * 3) - 12`.
    ///
    /// Non-finite operands are read as `inf` and `NaN`, the way witnesses
    /// render them.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other than
    /// digits, `.`, whitespace, parentheses and `+ - * /`, has unbalanced
    /// parentheses, nests parentheses or unary minus deeper than
    /// [`MAX_NESTING`], or has input left over after a complete expression.
    pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
        debug!("Parsing expression: '{}'", input);

        let mut parser = Parser::new(input);
        let expr = parser.parse_sum()?;

        if let Some(b) = parser.peek() {
            debug!("Trailing '{}' at position {}", char::from(b), parser.pos);
            return Err(ExpressionError::TrailingInput(parser.pos));
        }

        Ok(expr)
    }
}
