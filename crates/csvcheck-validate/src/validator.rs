//! Validation orchestrator.
//!
//! Splits the raw input by the effective row separator, classifies the first
//! line as header when so configured, feeds every other line through the row
//! validator, and yields row-tagged findings lazily.
//!
//! All per-run mutable state (the row counter and the scratch error buffer)
//! lives in the [`Validation`] cursor, never in the [`Validator`] itself, so
//! one compiled validator can serve sequential and concurrent passes without
//! any reset protocol.

use csvcheck_model::{Result, RowValidationError, ValidationError, ValidatorConfiguration};

use crate::compiler::compile;
use crate::row::RowValidator;

/// A compiled, reusable validator. Immutable after construction.
#[derive(Debug)]
pub struct Validator {
    rows: RowValidator,
}

impl Validator {
    /// Compile a configuration into a validator, failing fast on any
    /// configuration error before a single row is scanned.
    pub fn from_configuration(configuration: &ValidatorConfiguration) -> Result<Self> {
        Ok(Self {
            rows: RowValidator::new(compile(configuration)?),
        })
    }

    pub fn row_validator(&self) -> &RowValidator {
        &self.rows
    }

    /// Begin a validation pass over `text`.
    ///
    /// The returned cursor yields one [`RowValidationError`] per failing
    /// row, pull-driven; stopping early does no work beyond the lines
    /// already scanned.
    pub fn validate<'a>(&'a self, text: &'a str) -> Validation<'a> {
        Validation {
            rows: &self.rows,
            lines: text.split(self.rows.compiled().row_separator.as_str()),
            rows_checked: 0,
            scratch: Vec::new(),
        }
    }
}

/// One validation pass: a lazy iterator over failing rows.
#[derive(Debug)]
pub struct Validation<'a> {
    rows: &'a RowValidator,
    lines: std::str::Split<'a, &'a str>,
    rows_checked: usize,
    scratch: Vec<ValidationError>,
}

impl Validation<'_> {
    /// Rows consumed so far; once the iterator is exhausted, the total for
    /// the pass.
    pub fn rows_checked(&self) -> usize {
        self.rows_checked
    }
}

impl Iterator for Validation<'_> {
    type Item = RowValidationError;

    fn next(&mut self) -> Option<Self::Item> {
        let compiled = self.rows.compiled();
        loop {
            let line = self.lines.next()?;
            self.rows_checked += 1;

            if compiled.has_header_row && self.rows_checked == 1 {
                if !self.rows.is_valid_header(line, &mut self.scratch) {
                    // Header identity is positional and singular; the row
                    // number stays at its default.
                    return Some(RowValidationError::new(0, std::mem::take(&mut self.scratch)));
                }
            } else if !self.rows.is_valid(line, &mut self.scratch) {
                return Some(RowValidationError::new(
                    self.rows_checked,
                    std::mem::take(&mut self.scratch),
                ));
            }

            // Drained on failure above; cleared here on success so no line
            // ever sees a predecessor's errors.
            self.scratch.clear();
        }
    }
}
