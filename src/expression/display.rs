use std::fmt;

use crate::expression::ast::{Expression, Shape};

impl fmt::Display for Expression {
    /// Fully parenthesized infix. Every operation node gets its own pair of
    /// parentheses except the root.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_expression(
            f: &mut fmt::Formatter,
            expr: &Expression,
            is_root: bool,
        ) -> fmt::Result {
            match expr.shape() {
                Shape::Leaf(n) => write!(f, "{}", n),
                Shape::Binary(op, l, r) => {
                    if !is_root {
                        write!(f, "(")?;
                    }
                    fmt_expression(f, l, false)?;
                    write!(f, "{}", op.symbol())?;
                    fmt_expression(f, r, false)?;
                    if !is_root {
                        write!(f, ")")?;
                    }
                    Ok(())
                }
            }
        }

        fmt_expression(f, self, true)
    }
}

impl Expression {
    pub fn render_infix(&self) -> String {
        self.to_string()
    }
}
