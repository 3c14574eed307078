//! Regular-expression rule.

use csvcheck_model::{ConfigError, Result, ValidationError};
use regex::Regex;

use crate::rules::Rule;

/// Non-empty cells must match the configured pattern. Empty cells pass.
#[derive(Debug)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    /// Compile the pattern. A bad pattern is a configuration failure, caught
    /// before any row is scanned.
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|error| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: error.to_string(),
        })?;
        Ok(Self { pattern: compiled })
    }
}

impl Rule for Matches {
    fn evaluate(&self, cell: &str, column: usize, errors: &mut Vec<ValidationError>) -> bool {
        let trimmed = cell.trim();
        if trimmed.is_empty() || self.pattern.is_match(trimmed) {
            return true;
        }
        errors.push(ValidationError::new(
            column,
            format!(
                "Value '{cell}' does not match pattern '{}'.",
                self.pattern.as_str()
            ),
        ));
        false
    }
}
