//! Declarative validator configuration.
//!
//! The configuration is the source of truth for compilation: separators,
//! header handling, and the per-column rule specifications. Field names on
//! the wire keep the original configuration format's spellings
//! (`columnSeperator`, `rowSeperator`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Column separator used when the configuration leaves it empty.
pub const DEFAULT_COLUMN_SEPARATOR: &str = ",";

/// Row separator used when the configuration leaves it empty.
pub const DEFAULT_ROW_SEPARATOR: &str = "\r";

/// Declarative description of a validation run. Immutable once read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfiguration {
    /// Cell separator within a row. Empty or absent means the default `,`.
    #[serde(rename = "columnSeperator")]
    pub column_separator: Option<String>,
    /// Line separator within the input blob. Empty or absent means the
    /// default carriage return.
    #[serde(rename = "rowSeperator")]
    pub row_separator: Option<String>,
    /// When true, the first line is a header, not data.
    #[serde(rename = "hasHeaderRow")]
    pub has_header_row: bool,
    /// Carried through compilation; the scan itself does not consume it.
    #[serde(rename = "hasTitleRow")]
    pub has_title_row: bool,
    /// Expected header cell names. Empty disables header name/count checking.
    pub headers: Vec<String>,
    /// Rule specifications per 0-based column index.
    pub columns: BTreeMap<usize, Vec<RuleSpec>>,
}

impl ValidatorConfiguration {
    /// Read a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A tagged description of one rule: its kind plus kind-specific parameters.
/// Not executable itself; input to the configuration compiler.
///
/// On the wire a spec is either a bare kind string (`"numeric"`) or an
/// object carrying parameters (`{"kind": "regex", "pattern": "^[A-Z]+$"}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    Kind(String),
    Detailed {
        kind: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<String>>,
    },
}

impl RuleSpec {
    pub fn kind(&self) -> &str {
        match self {
            RuleSpec::Kind(kind) => kind,
            RuleSpec::Detailed { kind, .. } => kind,
        }
    }

    pub fn pattern(&self) -> Option<&str> {
        match self {
            RuleSpec::Kind(_) => None,
            RuleSpec::Detailed { pattern, .. } => pattern.as_deref(),
        }
    }

    pub fn min_length(&self) -> Option<usize> {
        match self {
            RuleSpec::Kind(_) => None,
            RuleSpec::Detailed { min_length, .. } => *min_length,
        }
    }

    pub fn max_length(&self) -> Option<usize> {
        match self {
            RuleSpec::Kind(_) => None,
            RuleSpec::Detailed { max_length, .. } => *max_length,
        }
    }

    pub fn allowed(&self) -> Option<&[String]> {
        match self {
            RuleSpec::Kind(_) => None,
            RuleSpec::Detailed { allowed, .. } => allowed.as_deref(),
        }
    }
}
