//! Expression trees: construction, evaluation and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod tree;

#[cfg(test)]
pub(crate) mod parse;

pub use ast::{Expression, Operator, Shape};
pub use errors::ExpressionError;
