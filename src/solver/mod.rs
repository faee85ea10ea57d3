pub mod constants;
mod config;
mod core;
mod errors;

pub use config::SolverConfig;
pub use self::core::{ExpressionSolver, SearchOutcome, Solution};
pub use errors::SolverError;
