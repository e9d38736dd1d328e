//! Per-row validation rules.
//!
//! Each rule is a small value-returning check over one typed
//! [`ReleaseRecord`]. The engine order is fixed: missing columns, additional
//! columns, required strings, date conversion (emitted by the parse phase),
//! the required `created` date, date ordering, and finally the
//! distribution-specific policy rules. The
//! [`RowValidator`](crate::core::RowValidator) wires them together.

mod columns;
mod content;
mod ordering;
mod policy;

pub use columns::{AdditionalColumns, MissingColumns};
pub use content::{RequiredCreated, RequiredStrings};
pub use ordering::DateOrdering;
pub use policy::{EolWeekday, EsmOverlap};

use crate::core::Violation;
use crate::record::ReleaseRecord;
use crate::schema::Schema;
use std::fmt::Debug;

/// A single validation rule evaluated against one row record.
///
/// Implementations are stateless and side-effect free: each evaluation
/// returns the violations it found, in a deterministic order, and never
/// halts the remainder of the row's checks.
pub trait RowCheck: Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Evaluates the rule, returning zero or more violations.
    fn evaluate(&self, record: &ReleaseRecord, schema: &Schema) -> Vec<Violation>;
}

/// A boxed check for use in collections.
pub type BoxedCheck = Box<dyn RowCheck>;
