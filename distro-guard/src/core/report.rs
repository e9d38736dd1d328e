//! Run reports and the streaming diagnostic sink.

use super::Violation;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One finding tied to the input line it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-based line number in the source file, counting the header row.
    pub line: u64,
    /// The finding itself.
    #[serde(flatten)]
    pub violation: Violation,
}

/// The outcome of validating one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// The validated input, as named on the command line.
    pub file: String,
    /// Every finding of the run, in row order then engine order.
    pub issues: Vec<RowIssue>,
}

impl FileReport {
    /// Creates an empty report for the named input.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            issues: Vec::new(),
        }
    }

    /// `true` iff the run recorded no violations.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The total number of findings.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Streams diagnostics in `file:line: message.` form while counting them.
///
/// The sink is bound to one input for the duration of a run; its terminal
/// count is the run's verdict (0 means valid). Lines are written as each
/// row is validated, so the reported line numbers always reflect the
/// reader's cursor at the time of the finding. The counter only grows.
#[derive(Debug)]
pub struct DiagnosticSink<W: Write> {
    file: String,
    writer: W,
    reported: u64,
}

impl<W: Write> DiagnosticSink<W> {
    /// Creates a sink for the named input, writing to `writer`.
    pub fn new(file: impl Into<String>, writer: W) -> Self {
        Self {
            file: file.into(),
            writer,
            reported: 0,
        }
    }

    /// Writes one `{file}:{line}: {message}.` line and bumps the counter.
    pub fn report(&mut self, line: u64, violation: &Violation) -> Result<()> {
        writeln!(self.writer, "{}:{}: {}.", self.file, line, violation)?;
        self.reported += 1;
        Ok(())
    }

    /// The number of diagnostics written so far.
    pub fn reported(&self) -> u64 {
        self.reported
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
