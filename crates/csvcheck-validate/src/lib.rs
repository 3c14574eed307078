//! Configurable validation engine for CSV-style tabular text.
//!
//! A [`ValidatorConfiguration`](csvcheck_model::ValidatorConfiguration)
//! compiles into an immutable rule set; [`Validator::validate`] then drives
//! the row validator line by line and yields row-tagged findings lazily.
//! Splitting is naive substring splitting by design: this is not a general
//! CSV parser and has no quoted-field semantics.

mod compiler;
mod row;
pub mod rules;
mod validator;

pub use compiler::{ColumnRuleChain, CompiledRuleSet, compile};
pub use row::RowValidator;
pub use validator::{Validation, Validator};
