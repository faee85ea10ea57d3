use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::solver::constants::TOLERANCE;

#[inline]
fn is_zero(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}

impl Expression {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionUndefined`] when the right operand of
    /// a division evaluates to a magnitude at or below `1e-6`.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        self.evaluate_with_tolerance(TOLERANCE)
    }

    /// Like [`evaluate`](Self::evaluate), treating any divisor with magnitude
    /// at or below `tolerance` as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionUndefined`] for such a divisor.
    pub fn evaluate_with_tolerance(&self, tolerance: f64) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate_with_tolerance(tolerance)?;
                let right = r.evaluate_with_tolerance(tolerance)?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate_with_tolerance(tolerance)?;
                let right = r.evaluate_with_tolerance(tolerance)?;
                Ok(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate_with_tolerance(tolerance)?;
                let right = r.evaluate_with_tolerance(tolerance)?;
                Ok(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate_with_tolerance(tolerance)?;
                let right = r.evaluate_with_tolerance(tolerance)?;
                if is_zero(right, tolerance) {
                    debug!("Undefined division: {} / {}", left, right);
                    Err(ExpressionError::DivisionUndefined)
                } else {
                    Ok(left / right)
                }
            }
        };

        if let Err(e) = &result {
            debug!("Evaluation of {} failed: {}", self, e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::is_zero;

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0, 1e-6));
        assert!(is_zero(-0.0, 1e-6));
        assert!(is_zero(1e-6, 1e-6));
        assert!(is_zero(-5e-7, 1e-6));
        assert!(!is_zero(2e-6, 1e-6));
        assert!(!is_zero(1.0 / 3.0, 1e-6));
        assert!(is_zero(0.25, 0.5));
    }
}
