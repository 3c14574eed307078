//! Configuration compiler.
//!
//! Translates a [`ValidatorConfiguration`] into an executable
//! [`CompiledRuleSet`]: effective separators, header handling, and one
//! ordered rule chain per configured column. Compilation is pure; the same
//! configuration always compiles to an independent, behaviorally identical
//! set.

use std::collections::BTreeMap;

use csvcheck_model::{
    ConfigError, DEFAULT_COLUMN_SEPARATOR, DEFAULT_ROW_SEPARATOR, Result, RuleSpec,
    ValidatorConfiguration,
};

use crate::rules::{LengthBounds, Matches, Numeric, OneOf, Required, Rule};

/// Ordered rules applied to one column. All rules run; all failures
/// accumulate.
pub type ColumnRuleChain = Vec<Box<dyn Rule>>;

/// The executable form of a configuration. Immutable and shareable once
/// built; all per-run state lives with the caller.
#[derive(Debug)]
pub struct CompiledRuleSet {
    pub column_separator: String,
    pub row_separator: String,
    pub has_header_row: bool,
    pub has_title_row: bool,
    pub expected_header: Vec<String>,
    pub columns: BTreeMap<usize, ColumnRuleChain>,
}

/// Compile a configuration, failing fast on any unknown or incomplete rule
/// specification.
pub fn compile(configuration: &ValidatorConfiguration) -> Result<CompiledRuleSet> {
    let mut columns = BTreeMap::new();
    for (&index, specs) in &configuration.columns {
        let chain: ColumnRuleChain = specs.iter().map(instantiate).collect::<Result<_>>()?;
        columns.insert(index, chain);
    }

    Ok(CompiledRuleSet {
        column_separator: effective_separator(
            configuration.column_separator.as_deref(),
            DEFAULT_COLUMN_SEPARATOR,
        ),
        row_separator: effective_separator(
            configuration.row_separator.as_deref(),
            DEFAULT_ROW_SEPARATOR,
        ),
        has_header_row: configuration.has_header_row,
        has_title_row: configuration.has_title_row,
        expected_header: configuration.headers.clone(),
        columns,
    })
}

/// The configured separator when non-empty; an empty or absent value never
/// overwrites the default.
fn effective_separator(configured: Option<&str>, default: &str) -> String {
    match configured {
        Some(separator) if !separator.is_empty() => separator.to_string(),
        _ => default.to_string(),
    }
}

/// Closed rule-kind registry. Every kind named here is constructible;
/// anything else is rejected at compile time, not deferred to first use.
fn instantiate(spec: &RuleSpec) -> Result<Box<dyn Rule>> {
    match spec.kind() {
        "numeric" => Ok(Box::new(Numeric)),
        "required" => Ok(Box::new(Required)),
        "regex" => {
            let pattern = spec
                .pattern()
                .ok_or_else(|| missing_parameter("regex", "pattern"))?;
            Ok(Box::new(Matches::new(pattern)?))
        }
        "length" => {
            let (min, max) = (spec.min_length(), spec.max_length());
            if min.is_none() && max.is_none() {
                return Err(missing_parameter("length", "minLength or maxLength"));
            }
            Ok(Box::new(LengthBounds::new(min, max)))
        }
        "one-of" => {
            let allowed = spec
                .allowed()
                .ok_or_else(|| missing_parameter("one-of", "allowed"))?;
            Ok(Box::new(OneOf::new(allowed.iter().cloned())))
        }
        other => Err(ConfigError::UnknownRuleKind(other.to_string())),
    }
}

fn missing_parameter(kind: &str, parameter: &str) -> ConfigError {
    ConfigError::MissingParameter {
        kind: kind.to_string(),
        parameter: parameter.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_separators_fall_back_to_defaults() {
        let configuration = ValidatorConfiguration {
            column_separator: Some(String::new()),
            row_separator: None,
            ..ValidatorConfiguration::default()
        };
        let compiled = compile(&configuration).expect("compile");
        assert_eq!(compiled.column_separator, ",");
        assert_eq!(compiled.row_separator, "\r");
    }

    #[test]
    fn configured_separators_are_kept() {
        let configuration = ValidatorConfiguration {
            column_separator: Some(";".to_string()),
            row_separator: Some("\n".to_string()),
            ..ValidatorConfiguration::default()
        };
        let compiled = compile(&configuration).expect("compile");
        assert_eq!(compiled.column_separator, ";");
        assert_eq!(compiled.row_separator, "\n");
    }

    #[test]
    fn chains_preserve_spec_order() {
        let mut configuration = ValidatorConfiguration::default();
        configuration.columns.insert(
            2,
            vec![
                RuleSpec::Kind("required".to_string()),
                RuleSpec::Kind("numeric".to_string()),
            ],
        );
        let compiled = compile(&configuration).expect("compile");
        assert_eq!(compiled.columns[&2].len(), 2);
        // Required fails the empty cell; numeric lets it pass.
        let mut errors = Vec::new();
        assert!(!compiled.columns[&2][0].evaluate("", 2, &mut errors));
        assert!(compiled.columns[&2][1].evaluate("", 2, &mut errors));
    }

    #[test]
    fn unknown_rule_kind_fails_compilation() {
        let mut configuration = ValidatorConfiguration::default();
        configuration
            .columns
            .insert(0, vec![RuleSpec::Kind("telepathic".to_string())]);
        let error = compile(&configuration).unwrap_err();
        assert!(matches!(error, ConfigError::UnknownRuleKind(kind) if kind == "telepathic"));
    }

    #[test]
    fn regex_without_pattern_fails_compilation() {
        let mut configuration = ValidatorConfiguration::default();
        configuration
            .columns
            .insert(0, vec![RuleSpec::Kind("regex".to_string())]);
        let error = compile(&configuration).unwrap_err();
        assert!(matches!(error, ConfigError::MissingParameter { .. }));
    }

    #[test]
    fn length_without_bounds_fails_compilation() {
        let mut configuration = ValidatorConfiguration::default();
        configuration.columns.insert(
            0,
            vec![RuleSpec::Detailed {
                kind: "length".to_string(),
                pattern: None,
                min_length: None,
                max_length: None,
                allowed: None,
            }],
        );
        assert!(compile(&configuration).is_err());
    }

    #[test]
    fn compilation_does_not_mutate_the_configuration() {
        let mut configuration = ValidatorConfiguration::default();
        configuration
            .columns
            .insert(1, vec![RuleSpec::Kind("numeric".to_string())]);
        let before = serde_json::to_string(&configuration).expect("serialize");
        let _ = compile(&configuration).expect("compile");
        let after = serde_json::to_string(&configuration).expect("serialize");
        assert_eq!(before, after);
    }
}
