//! Structured validation findings.
//!
//! Checks return violations as values; nothing is printed until the
//! diagnostic sink renders them with file and line context. This keeps rule
//! logic decoupled from output formatting and makes every rule testable in
//! isolation.

use crate::schema::Column;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The taxonomy of validation findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationKind {
    /// A column is missing from, or unknown to, the schema.
    Schema,
    /// A required value is empty, unparseable, or missing.
    Content,
    /// Dates within the row contradict each other.
    Consistency,
    /// A distribution-specific release policy is not met.
    Policy,
}

/// A single validation finding for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Which part of the taxonomy the finding belongs to.
    pub kind: ViolationKind,
    /// The column(s) the finding concerns.
    pub columns: Vec<String>,
    /// The diagnostic message, without file/line prefix or trailing period.
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, columns: Vec<Column>, message: String) -> Self {
        Self {
            kind,
            columns: columns.iter().map(|c| c.as_str().to_string()).collect(),
            message,
        }
    }

    /// A schema-required column is absent from the row.
    pub fn missing_column(column: Column) -> Self {
        Self::new(
            ViolationKind::Schema,
            vec![column],
            format!("Column `{column}' is missing"),
        )
    }

    /// The row carries a column the schema does not recognize.
    pub fn additional_column(name: &str) -> Self {
        Self {
            kind: ViolationKind::Schema,
            columns: vec![name.to_string()],
            message: format!("Additional column `{name}' is specified"),
        }
    }

    /// A column that must hold a non-empty string is present but empty.
    pub fn empty_column(column: Column) -> Self {
        Self::new(
            ViolationKind::Content,
            vec![column],
            format!("Empty column `{column}' specified"),
        )
    }

    /// A date column carried a raw value that is not ISO 8601.
    pub fn invalid_date(column: Column, raw: &str) -> Self {
        Self::new(
            ViolationKind::Content,
            vec![column],
            format!("Invalid date `{raw}' in column `{column}'"),
        )
    }

    /// The `created` column carries no usable date.
    pub fn missing_created() -> Self {
        Self::new(
            ViolationKind::Content,
            vec![Column::Created],
            "No date specified in column `created'".to_string(),
        )
    }

    /// A successor milestone has a date but its predecessor column is absent.
    pub fn missing_predecessor(predecessor: Column, successor: Column) -> Self {
        Self::new(
            ViolationKind::Consistency,
            vec![predecessor, successor],
            format!(
                "A date needs to be specified in column `{predecessor}' \
                 due to the given date in column `{successor}'"
            ),
        )
    }

    /// A predecessor date lies after its successor date.
    pub fn date_order(
        predecessor: Column,
        predecessor_date: NaiveDate,
        successor: Column,
        successor_date: NaiveDate,
    ) -> Self {
        Self::new(
            ViolationKind::Consistency,
            vec![predecessor, successor],
            format!(
                "Date {successor_date} of column `{successor}' needs to be \
                 >= than {predecessor_date} of column `{predecessor}'"
            ),
        )
    }

    /// An end-of-life date lands outside the Tuesday-Thursday window.
    pub fn weekday_landing(column: Column, codename: &str, date: NaiveDate) -> Self {
        Self::new(
            ViolationKind::Policy,
            vec![column],
            format!("{column} for {codename} lands outside Tuesday-Thursday ({date})"),
        )
    }

    /// An LTS end-of-life date leaves no overlap with the ESM window.
    pub fn missing_esm_overlap(codename: &str, eol: NaiveDate) -> Self {
        Self::new(
            ViolationKind::Policy,
            vec![Column::Eol],
            format!("eol for {codename} is missing ESM overlap period ({eol})"),
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
