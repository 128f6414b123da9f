//! Error type shared by the grid, the union-find structure and the driver.

use std::fmt;

/// Contract violations reported by the public operations.
///
/// Every check runs before any state is touched, so a returned error always
/// leaves the grid or structure exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// A size or count that must be positive was not.
    InvalidArgument(String),

    /// A row, column or element index fell outside its valid range.
    IndexOutOfBounds {
        what: &'static str,
        index: usize,
        min: usize,
        max: usize,
    },
}

impl PercolationError {
    pub(crate) fn out_of_bounds(what: &'static str, index: usize, min: usize, max: usize) -> Self {
        PercolationError::IndexOutOfBounds {
            what,
            index,
            min,
            max,
        }
    }
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidArgument(msg) => {
                write!(f, "invalid argument: {}", msg)
            }
            PercolationError::IndexOutOfBounds {
                what,
                index,
                min,
                max,
            } => {
                write!(
                    f,
                    "{} index {} out of bounds (expected {}..={})",
                    what, index, min, max
                )
            }
        }
    }
}

impl std::error::Error for PercolationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = PercolationError::InvalidArgument("grid size must be positive, got 0".into());
        assert_eq!(e.to_string(), "invalid argument: grid size must be positive, got 0");

        let e = PercolationError::out_of_bounds("row", 0, 1, 5);
        assert_eq!(e.to_string(), "row index 0 out of bounds (expected 1..=5)");
    }
}
