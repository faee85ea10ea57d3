//! Twentyfour - find every way to make 24 from four numbers
//!
//! The numbers are combined two at a time with `+`, `-`, `*` and `/` until a
//! single expression tree remains. Every tree that evaluates to 24 is reported
//! once, in fully parenthesized infix form.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{ExpressionSolver, SolverConfig, SolverError, Solution};
pub use utils::{UtilsError, parse_numbers, read_numbers, validate_numbers};

/// Find every distinct expression over `numbers` that evaluates to 24
///
/// This is a convenience function that runs the default solver: target 24,
/// tolerance `1e-6`, both operand orders for every operator.
///
/// # Arguments
///
/// * `numbers` - The numbers to combine, each used exactly once
///
/// # Returns
///
/// The solutions sorted lexicographically, without duplicates. An empty
/// vector means there is no way to reach 24.
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty
/// * Any number is negative, NaN or infinite
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// let solutions = solve(&[8.0, 8.0, 3.0, 3.0]).unwrap();
/// assert!(solutions.contains(&"8/(3-(8/3))".to_string()));
///
/// assert!(solve(&[1.0, 1.0, 1.0, 1.0]).unwrap().is_empty());
/// ```
pub fn solve(numbers: &[f64]) -> Result<Vec<String>, SolverError> {
    ExpressionSolver::new().solve_numbers(numbers)
}

/// Like [`solve`], keeping the expression tree behind each string
///
/// # Errors
///
/// Same as [`solve`].
pub fn find_solutions(numbers: &[f64]) -> Result<Vec<Solution>, SolverError> {
    ExpressionSolver::new().find_solutions_for(numbers)
}
