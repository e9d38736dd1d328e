//! # distro-guard — release metadata validation for Debian and Ubuntu
//!
//! distro-guard validates distribution-release metadata tables (one row per
//! release; columns for version, codename, series, and the created /
//! release / end-of-life milestones) against a schema and a set of
//! cross-field semantic rules. It is built to run as a pre-commit or CI
//! gate in front of published release-date data.
//!
//! ## Overview
//!
//! Two fixed schemas are supported, `debian` and `ubuntu`. They share their
//! date columns and chronological ordering rules and differ in the optional
//! columns they recognize, the columns that must carry a non-empty string,
//! and two Ubuntu-only release policies (mid-week end-of-life dates and the
//! ESM overlap window for LTS releases).
//!
//! The engine is deliberately small and deterministic: each row passes
//! through a fixed sequence of independent checks, every check reports all
//! of its findings, and no finding ever stops the run. A file is valid iff
//! the run reports nothing.
//!
//! ## Quick Start
//!
//! ```rust
//! use distro_guard::prelude::*;
//!
//! # fn main() -> distro_guard::error::Result<()> {
//! let data = "version,codename,series,created,release,eol\n\
//!             7,wheezy,wheezy,2005-01-01,2011-02-06,2016-04-26\n";
//!
//! let mut diagnostics = Vec::new();
//! let report = validate_reader(data.as_bytes(), "debian.csv", Distro::Debian, &mut diagnostics)?;
//!
//! assert!(report.is_valid());
//! assert!(diagnostics.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//!
//! Every finding is rendered as one line on the diagnostic writer:
//!
//! ```text
//! debian.csv:12: Invalid date `notadate' in column `created'.
//! ```
//!
//! The line number is the input line the row starts on, counting the
//! header, so users can jump straight to the offending row in an editor.
//!
//! ## Architecture
//!
//! - **`schema`**: static column tables for the two distributions
//! - **`record`**: the typed row record and the date parse phase
//! - **`checks`**: the individual validation rules
//! - **`core`**: the row validator, violations, reports, diagnostic sink
//! - **`source`**: headered CSV reading with line positions
//! - **`runner`**: per-file validation runs
//! - **`formatters`**: human and JSON rendering of collected reports
//! - **`logging`**: tracing subscriber setup for the CLI

pub mod checks;
pub mod core;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod record;
pub mod runner;
pub mod schema;
pub mod source;
