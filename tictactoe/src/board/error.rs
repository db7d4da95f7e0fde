use crate::Mark;

/// The error type for [`Board::new()`](crate::Board::new).
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidDimension {
    pub dim: usize,
}

impl std::error::Error for InvalidDimension {}

impl std::fmt::Display for InvalidDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board dimension must be odd and at least 3, but was {}",
            self.dim
        )
    }
}

/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { row: usize, col: usize, dim: usize },
    Occupied { row: usize, col: usize, existing: Mark },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { row, col, dim } => write!(
                f,
                "Cell ({}, {}) is outside of the {}x{} board",
                row, col, dim, dim
            ),
            IllegalPlacement::Occupied { row, col, existing } => write!(
                f,
                "Cell ({}, {}) is already occupied by {}",
                row, col, existing
            ),
        }
    }
}
