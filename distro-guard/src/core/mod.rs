//! Core validation types for distro-guard.
//!
//! This module carries the engine itself and its result types:
//!
//! - **[`RowValidator`]**: runs the fixed check sequence against one row
//! - **[`Violation`]** / **[`ViolationKind`]**: structured findings
//! - **[`FileReport`]** / **[`RowIssue`]**: the collected outcome of a run
//! - **[`DiagnosticSink`]**: streams `file:line: message.` diagnostics
//!
//! ```text
//! RowValidator
//!     ├── structural checks (columns, required strings)
//!     ├── parse-phase findings (invalid dates)
//!     └── semantic checks (created, ordering, policy)
//! ```

mod report;
mod validator;
mod violation;

pub use report::{DiagnosticSink, FileReport, RowIssue};
pub use validator::RowValidator;
pub use violation::{Violation, ViolationKind};
