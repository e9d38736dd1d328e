//! File-level validation runs.
//!
//! A run wires a [`CsvSource`] to a [`RowValidator`] and a
//! [`DiagnosticSink`]: rows are read strictly in file order, each row's
//! violations are rendered immediately against the reader's line cursor,
//! and the collected [`FileReport`] carries the verdict. Distinct files can
//! be validated independently — every run owns its own sink and schema.

use crate::core::{DiagnosticSink, FileReport, RowIssue, RowValidator};
use crate::error::Result;
use crate::schema::Distro;
use crate::source::CsvSource;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Validates one CSV file, streaming diagnostics to `writer`.
///
/// Returns the collected report; the run is valid iff the report carries no
/// issues. Row-level findings never abort the run — the only hard errors
/// are unreadable input and a failing diagnostic writer.
///
/// # Examples
///
/// ```rust,no_run
/// use distro_guard::runner::validate_file;
/// use distro_guard::schema::Distro;
///
/// # fn main() -> distro_guard::error::Result<()> {
/// let stderr = std::io::stderr();
/// let report = validate_file("debian.csv", Distro::Debian, stderr.lock())?;
/// assert!(report.is_valid());
/// # Ok(())
/// # }
/// ```
pub fn validate_file<W: Write>(
    path: impl AsRef<Path>,
    distro: Distro,
    writer: W,
) -> Result<FileReport> {
    let source = CsvSource::open(path.as_ref())?;
    validate_source(source, distro, writer)
}

/// Validates CSV data from any reader; `origin` names the input in
/// diagnostics. This is the seam integration tests use.
pub fn validate_reader<R: Read, W: Write>(
    input: R,
    origin: &str,
    distro: Distro,
    writer: W,
) -> Result<FileReport> {
    let source = CsvSource::from_reader(input, origin)?;
    validate_source(source, distro, writer)
}

fn validate_source<R: Read, W: Write>(
    mut source: CsvSource<R>,
    distro: Distro,
    writer: W,
) -> Result<FileReport> {
    let validator = RowValidator::new(distro);
    let mut sink = DiagnosticSink::new(source.origin(), writer);
    let mut report = FileReport::new(source.origin());
    let mut rows = 0u64;

    while let Some(row) = source.next_row()? {
        rows += 1;
        for violation in validator.validate_row(&row.fields) {
            sink.report(row.line, &violation)?;
            report.issues.push(RowIssue {
                line: row.line,
                violation,
            });
        }
    }

    info!(
        file = %report.file,
        distro = %distro,
        rows,
        issues = report.issue_count(),
        valid = report.is_valid(),
        "validation run finished"
    );
    Ok(report)
}
