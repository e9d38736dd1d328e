//! Prelude for commonly used types in distro-guard.

pub use crate::core::{DiagnosticSink, FileReport, RowIssue, RowValidator, Violation, ViolationKind};
pub use crate::error::{GuardError, Result};
pub use crate::formatters::{HumanFormatter, JsonFormatter, ResultFormatter};
pub use crate::record::ReleaseRecord;
pub use crate::runner::{validate_file, validate_reader};
pub use crate::schema::{Column, Distro, Schema};
