use std::fmt;

use crate::expression::ast::Expression;

/// Render a number the way witnesses show operands: `4` rather than `4.0`
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        // avoid "-0"
        String::from("0")
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Expression {
    /// Every compound operand is parenthesized; the root never is.
    ///
    /// This keeps the exact tree shape visible, so a left-deep tree renders as
    /// `((8 + 4) * 3) - 12` and a balanced one as `(6 * 4) * (3 - 2)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", format_number(*n)),
                _ => {
                    write!(f, "(")?;
                    fmt_expression(f, expr)?;
                    write!(f, ")")
                }
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr.as_binary() {
                None => write_operand(f, expr),
                Some((op, l, r)) => {
                    write_operand(f, l)?;
                    write!(f, " {} ", op)?;
                    write_operand(f, r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
