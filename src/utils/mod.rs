//! Reading and checking the input numbers

mod errors;
mod input;
mod validation;

pub use errors::UtilsError;
pub use input::{parse_numbers, read_numbers};
pub use validation::validate_numbers;
