pub mod config;
pub mod error;
pub mod report;

pub use config::{
    DEFAULT_COLUMN_SEPARATOR, DEFAULT_ROW_SEPARATOR, RuleSpec, ValidatorConfiguration,
};
pub use error::{ConfigError, Result};
pub use report::{RowValidationError, ValidationError};
