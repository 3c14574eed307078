//! Column-level validation rules.
//!
//! Each module implements one rule kind. Rules are immutable once compiled;
//! failures accumulate in a caller-supplied buffer so a compiled rule set
//! can be shared across validation runs.

mod length;
mod numeric;
mod one_of;
mod pattern;
mod required;

pub use length::LengthBounds;
pub use numeric::Numeric;
pub use one_of::OneOf;
pub use pattern::Matches;
pub use required::Required;

use csvcheck_model::ValidationError;

/// A single pass/fail check over one cell value.
///
/// `evaluate` pushes zero or more errors tagged with the cell's column index
/// and reports whether the cell passed. Adding a rule kind touches only the
/// compiler's registry, never the row validator or the orchestrator.
pub trait Rule: std::fmt::Debug + Send + Sync {
    fn evaluate(&self, cell: &str, column: usize, errors: &mut Vec<ValidationError>) -> bool;
}
