//! Per-row validation over the compiled column rule chains.

use csvcheck_model::ValidationError;

use crate::compiler::CompiledRuleSet;

/// Validates one line at a time. Owns the compiled rule chains and nothing
/// else; the caller supplies the error buffer, so one instance can serve
/// any number of concurrent validation passes. The row validator has no row
/// context; row numbering belongs to the orchestrator.
#[derive(Debug)]
pub struct RowValidator {
    compiled: CompiledRuleSet,
}

impl RowValidator {
    pub fn new(compiled: CompiledRuleSet) -> Self {
        Self { compiled }
    }

    pub fn compiled(&self) -> &CompiledRuleSet {
        &self.compiled
    }

    /// Check a header line against the expected header definition.
    ///
    /// A cell-count mismatch records one error; with matching counts, the
    /// first misnamed cell records one error. No configured names means the
    /// header is trivially valid.
    pub fn is_valid_header(&self, line: &str, errors: &mut Vec<ValidationError>) -> bool {
        let expected = &self.compiled.expected_header;
        if expected.is_empty() {
            return true;
        }

        let cells: Vec<&str> = line.split(self.compiled.column_separator.as_str()).collect();
        if cells.len() != expected.len() {
            errors.push(ValidationError::new(
                0,
                format!(
                    "Expected {} header column(s) but found {}.",
                    expected.len(),
                    cells.len()
                ),
            ));
            return false;
        }

        for (index, (cell, name)) in cells.iter().zip(expected).enumerate() {
            if cell.trim() != name {
                errors.push(ValidationError::new(
                    index,
                    format!("Header column {index} is '{cell}' but '{name}' was expected."),
                ));
                return false;
            }
        }

        true
    }

    /// Check a data line: each compiled column's chain runs against the
    /// corresponding cell. A missing cell is an empty string, not an error
    /// by itself; individual rules decide whether empty is acceptable.
    /// Columns with no configured chain pass through unchecked.
    pub fn is_valid(&self, line: &str, errors: &mut Vec<ValidationError>) -> bool {
        let cells: Vec<&str> = line.split(self.compiled.column_separator.as_str()).collect();
        let mut valid = true;

        for (&index, chain) in &self.compiled.columns {
            let cell = cells.get(index).copied().unwrap_or("");
            for rule in chain {
                if !rule.evaluate(cell, index, errors) {
                    valid = false;
                }
            }
        }

        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;
    use csvcheck_model::{RuleSpec, ValidatorConfiguration};

    fn validator(configuration: &ValidatorConfiguration) -> RowValidator {
        RowValidator::new(compile(configuration).expect("compile"))
    }

    fn numeric_on_column(index: usize) -> ValidatorConfiguration {
        let mut configuration = ValidatorConfiguration::default();
        configuration
            .columns
            .insert(index, vec![RuleSpec::Kind("numeric".to_string())]);
        configuration
    }

    #[test]
    fn header_count_mismatch_records_one_error() {
        let configuration = ValidatorConfiguration {
            headers: vec!["SKU".to_string(), "Qty".to_string()],
            ..ValidatorConfiguration::default()
        };
        let rows = validator(&configuration);

        let mut errors = Vec::new();
        assert!(!rows.is_valid_header("SKU,Qty,Extra", &mut errors));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Expected 2 header column(s) but found 3."
        );
    }

    #[test]
    fn header_name_mismatch_names_the_column() {
        let configuration = ValidatorConfiguration {
            headers: vec!["SKU".to_string(), "Qty".to_string()],
            ..ValidatorConfiguration::default()
        };
        let rows = validator(&configuration);

        let mut errors = Vec::new();
        assert!(!rows.is_valid_header("SKU,Quantity", &mut errors));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].position, 1);
        assert!(errors[0].message.contains("'Quantity'"));
        assert!(errors[0].message.contains("'Qty'"));
    }

    #[test]
    fn header_without_configured_names_is_trivially_valid() {
        let rows = validator(&ValidatorConfiguration::default());
        let mut errors = Vec::new();
        assert!(rows.is_valid_header("anything,at,all", &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn unconfigured_columns_pass_through() {
        let rows = validator(&numeric_on_column(0));
        let mut errors = Vec::new();
        assert!(rows.is_valid("12,definitely not a number", &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_cell_is_treated_as_empty() {
        let rows = validator(&numeric_on_column(5));
        let mut errors = Vec::new();
        // Numeric accepts empty, so a short row passes.
        assert!(rows.is_valid("a,b", &mut errors));
        assert!(errors.is_empty());
    }

    #[test]
    fn all_rules_in_a_chain_run_and_accumulate() {
        let mut configuration = ValidatorConfiguration::default();
        configuration.columns.insert(
            0,
            vec![
                RuleSpec::Kind("required".to_string()),
                RuleSpec::Detailed {
                    kind: "length".to_string(),
                    pattern: None,
                    min_length: Some(3),
                    max_length: None,
                    allowed: None,
                },
            ],
        );
        configuration
            .columns
            .insert(1, vec![RuleSpec::Kind("numeric".to_string())]);
        let rows = validator(&configuration);

        let mut errors = Vec::new();
        assert!(!rows.is_valid("ab,xyz", &mut errors));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].position, 0);
        assert!(errors[0].message.contains("shorter than 3"));
        assert_eq!(errors[1].position, 1);
    }
}
