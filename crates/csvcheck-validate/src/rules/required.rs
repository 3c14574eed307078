//! Required (non-empty) rule.

use csvcheck_model::ValidationError;

use crate::rules::Rule;

#[derive(Debug, Default)]
pub struct Required;

impl Rule for Required {
    fn evaluate(&self, cell: &str, column: usize, errors: &mut Vec<ValidationError>) -> bool {
        if !cell.trim().is_empty() {
            return true;
        }
        errors.push(ValidationError::new(
            column,
            "Value is required but was empty.",
        ));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_cells() {
        let mut errors = Vec::new();
        assert!(!Required.evaluate("", 2, &mut errors));
        assert!(!Required.evaluate("  ", 2, &mut errors));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].position, 2);
    }

    #[test]
    fn accepts_any_non_blank_value() {
        let mut errors = Vec::new();
        assert!(Required.evaluate("x", 0, &mut errors));
        assert!(Required.evaluate(" 0 ", 0, &mut errors));
        assert!(errors.is_empty());
    }
}
