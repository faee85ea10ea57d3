use std::io::BufRead;

use log::debug;

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns [`UtilsError::InvalidNumber`] for the first token that does not
/// parse as a floating-point number.
pub fn parse_numbers(input: &str) -> Result<Vec<f64>, UtilsError> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| UtilsError::InvalidNumber(token.to_string()))
        })
        .collect()
}

/// Read lines until `expected` numbers have been collected, so the numbers
/// may be spread over several lines.
///
/// # Errors
///
/// Returns an error on a malformed token, on an I/O failure, or when the
/// input ends early or the last line read carries more numbers than asked for.
pub fn read_numbers<R: BufRead>(reader: R, expected: usize) -> Result<Vec<f64>, UtilsError> {
    let mut numbers = Vec::with_capacity(expected);

    for line in reader.lines() {
        let line = line.map_err(|e| UtilsError::Io(e.to_string()))?;
        numbers.extend(parse_numbers(&line)?);
        debug!("Read {} of {} numbers", numbers.len(), expected);
        if numbers.len() >= expected {
            break;
        }
    }

    if numbers.len() != expected {
        return Err(UtilsError::WrongCount {
            expected,
            found: numbers.len(),
        });
    }

    Ok(numbers)
}
