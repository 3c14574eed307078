//! The `check` command: compile the configuration, scan the data file,
//! collect findings for rendering.

use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use csvcheck_model::{RowValidationError, ValidatorConfiguration};
use csvcheck_validate::Validator;

use crate::cli::CheckArgs;

pub struct CheckResult {
    pub rows_checked: usize,
    pub failures: Vec<RowValidationError>,
    pub truncated: bool,
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let config_json = fs::read_to_string(&args.config)
        .with_context(|| format!("reading configuration {}", args.config.display()))?;
    let configuration = ValidatorConfiguration::from_json(&config_json)
        .with_context(|| format!("parsing configuration {}", args.config.display()))?;
    let data = fs::read_to_string(&args.data_file)
        .with_context(|| format!("reading data file {}", args.data_file.display()))?;

    let validator = Validator::from_configuration(&configuration)?;
    debug!(
        columns = configuration.columns.len(),
        has_header = configuration.has_header_row,
        "configuration compiled"
    );

    let limit = args.max_errors.unwrap_or(usize::MAX);
    let mut pass = validator.validate(&data);
    let mut failures = Vec::new();
    let mut truncated = false;
    for failure in pass.by_ref() {
        failures.push(failure);
        if failures.len() >= limit {
            truncated = true;
            break;
        }
    }

    let rows_checked = pass.rows_checked();
    info!(
        rows_checked,
        failing_rows = failures.len(),
        truncated,
        "validation pass complete"
    );

    Ok(CheckResult {
        rows_checked,
        failures,
        truncated,
    })
}
