//! Length-bounds rule.

use csvcheck_model::ValidationError;

use crate::rules::Rule;

/// Non-empty cells must have a character count within the configured bounds.
/// Either bound may be absent; the compiler requires at least one.
#[derive(Debug)]
pub struct LengthBounds {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthBounds {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Rule for LengthBounds {
    fn evaluate(&self, cell: &str, column: usize, errors: &mut Vec<ValidationError>) -> bool {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return true;
        }
        let length = trimmed.chars().count();
        if let Some(min) = self.min
            && length < min
        {
            errors.push(ValidationError::new(
                column,
                format!("Value '{cell}' is shorter than {min} character(s)."),
            ));
            return false;
        }
        if let Some(max) = self.max
            && length > max
        {
            errors.push(ValidationError::new(
                column,
                format!("Value '{cell}' is longer than {max} character(s)."),
            ));
            return false;
        }
        true
    }
}
