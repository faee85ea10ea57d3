/// Value every full reduction is checked against
pub const TARGET: f64 = 24.0;
/// Tolerance for the target match and for the division guard
pub const TOLERANCE: f64 = 1e-6;
/// How many numbers the command line asks for
pub const EXPECTED_INPUTS: usize = 4;
