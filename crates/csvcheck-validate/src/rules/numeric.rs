//! Numeric format rule.
//!
//! Empty and whitespace-only cells pass; emptiness is the `required` rule's
//! concern. Parsing is culture-invariant: `12,34` is not a number here.

use csvcheck_model::ValidationError;

use crate::rules::Rule;

#[derive(Debug, Default)]
pub struct Numeric;

impl Rule for Numeric {
    fn evaluate(&self, cell: &str, column: usize, errors: &mut Vec<ValidationError>) -> bool {
        let trimmed = cell.trim();
        if trimmed.is_empty() || trimmed.parse::<f64>().is_ok() {
            return true;
        }
        errors.push(ValidationError::new(
            column,
            format!("Could not convert '{cell}' to a number."),
        ));
        false
    }
}
