//! Result formatting for validation reports.
//!
//! The streaming `file:line: message.` diagnostics are the contract for CI
//! logs; the formatters here additionally render the collected
//! [`FileReport`] for humans or for programmatic consumption.
//!
//! # Examples
//!
//! ```rust
//! use distro_guard::core::FileReport;
//! use distro_guard::formatters::{HumanFormatter, ResultFormatter};
//!
//! let report = FileReport::new("debian.csv");
//! let formatter = HumanFormatter::new();
//! let rendered = formatter.format(&report).unwrap();
//! assert!(rendered.contains("valid"));
//! ```

use crate::core::FileReport;
use crate::error::Result;

/// Trait for rendering a validation report into a string.
pub trait ResultFormatter {
    /// Formats the report.
    fn format(&self, report: &FileReport) -> Result<String>;
}

/// Renders the complete report as JSON for programmatic consumption.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to pretty-print the output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, report: &FileReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }
}

/// Renders a short human-readable summary with the findings listed.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a human-readable formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ResultFormatter for HumanFormatter {
    fn format(&self, report: &FileReport) -> Result<String> {
        if report.is_valid() {
            return Ok(format!("{}: valid\n", report.file));
        }
        let mut output = format!(
            "{}: invalid ({} problem(s))\n",
            report.file,
            report.issue_count()
        );
        for issue in &report.issues {
            output.push_str(&format!("  line {}: {}\n", issue.line, issue.violation));
        }
        Ok(output)
    }
}
