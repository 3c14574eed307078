//! Validation findings, immutable once yielded.

use serde::Serialize;

/// One rule failure on one cell: a position marker (column index, 0 when not
/// column-specific) and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub position: usize,
    pub message: String,
}

impl ValidationError {
    pub fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

/// All findings for one failing row. `row` is 1-based; 0 marks a header
/// finding, whose identity is positional rather than numbered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RowValidationError {
    pub row: usize,
    pub errors: Vec<ValidationError>,
}

impl RowValidationError {
    pub fn new(row: usize, errors: Vec<ValidationError>) -> Self {
        Self { row, errors }
    }

    pub fn is_header(&self) -> bool {
        self.row == 0
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
