//! Set-membership rule.

use std::collections::BTreeSet;

use csvcheck_model::ValidationError;

use crate::rules::Rule;

/// Non-empty trimmed cells must equal one of the allowed values.
/// Comparison is case-sensitive: the allowed set is user-authored literals,
/// not a terminology catalog.
#[derive(Debug)]
pub struct OneOf {
    allowed: BTreeSet<String>,
}

impl OneOf {
    pub fn new(allowed: impl IntoIterator<Item = String>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl Rule for OneOf {
    fn evaluate(&self, cell: &str, column: usize, errors: &mut Vec<ValidationError>) -> bool {
        let trimmed = cell.trim();
        if trimmed.is_empty() || self.allowed.contains(trimmed) {
            return true;
        }
        let allowed: Vec<&str> = self.allowed.iter().map(String::as_str).collect();
        errors.push(ValidationError::new(
            column,
            format!(
                "Value '{cell}' is not in the allowed set: {}.",
                allowed.join(", ")
            ),
        ));
        false
    }
}
