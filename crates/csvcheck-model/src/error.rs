use thiserror::Error;

/// Configuration-level failures. Fatal to compilation; never collected as
/// row findings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown rule kind '{0}'")]
    UnknownRuleKind(String),
    #[error("rule '{kind}' is missing required parameter '{parameter}'")]
    MissingParameter { kind: String, parameter: String },
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
