//! Static schema tables for the two supported distributions.
//!
//! Both schemas share the same date-bearing columns and the same
//! chronological ordering rules; they differ only in which optional columns
//! they recognize and in which columns must carry a non-empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The distribution whose release table is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    /// Debian release data (`debian.csv`).
    Debian,
    /// Ubuntu release data (`ubuntu.csv`).
    Ubuntu,
}

impl Distro {
    /// Returns the lowercase identifier used on the command line and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Distro::Debian => "debian",
            Distro::Ubuntu => "ubuntu",
        }
    }

    /// Returns the column rules for this distribution.
    pub fn schema(self) -> &'static Schema {
        match self {
            Distro::Debian => &DEBIAN,
            Distro::Ubuntu => &UBUNTU,
        }
    }
}

impl fmt::Display for Distro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed name for one of the known release-table columns.
///
/// Rows arrive as string-keyed maps; resolving the key to a `Column` once,
/// up front, keeps the checks free of stringly-typed lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    Version,
    Codename,
    Series,
    Created,
    Release,
    Eol,
    EolServer,
    EolEsm,
    EolLts,
    EolElts,
}

impl Column {
    /// The column name as it appears in the CSV header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Column::Version => "version",
            Column::Codename => "codename",
            Column::Series => "series",
            Column::Created => "created",
            Column::Release => "release",
            Column::Eol => "eol",
            Column::EolServer => "eol-server",
            Column::EolEsm => "eol-esm",
            Column::EolLts => "eol-lts",
            Column::EolElts => "eol-elts",
        }
    }

    /// Resolves a header name to a known column, if any schema knows it.
    pub fn from_name(name: &str) -> Option<Column> {
        let column = match name {
            "version" => Column::Version,
            "codename" => Column::Codename,
            "series" => Column::Series,
            "created" => Column::Created,
            "release" => Column::Release,
            "eol" => Column::Eol,
            "eol-server" => Column::EolServer,
            "eol-esm" => Column::EolEsm,
            "eol-lts" => Column::EolLts,
            "eol-elts" => Column::EolElts,
            _ => return None,
        };
        Some(column)
    }

    /// Returns `true` for columns that carry a calendar date.
    pub const fn is_date(self) -> bool {
        !matches!(self, Column::Version | Column::Codename | Column::Series)
    }

    /// Returns `true` for the end-of-life family of columns (`eol*`).
    pub fn is_eol(self) -> bool {
        self.as_str().starts_with("eol")
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The date-bearing columns, identical across schemas.
pub const DATE_COLUMNS: [Column; 7] = [
    Column::Created,
    Column::Release,
    Column::Eol,
    Column::EolServer,
    Column::EolEsm,
    Column::EolLts,
    Column::EolElts,
];

/// Ordered `(predecessor, successor)` pairs, identical across schemas.
///
/// Each pair must satisfy `predecessor <= successor` whenever the successor
/// carries a date.
pub const ORDERED_PAIRS: [(Column, Column); 6] = [
    (Column::Created, Column::Release),
    (Column::Release, Column::Eol),
    (Column::Eol, Column::EolServer),
    (Column::Eol, Column::EolEsm),
    (Column::Eol, Column::EolLts),
    (Column::EolLts, Column::EolElts),
];

/// Column rules for one distribution.
#[derive(Debug, Clone)]
pub struct Schema {
    /// The distribution these rules belong to.
    pub distro: Distro,
    /// Columns every row must carry, in declaration order.
    pub required: &'static [Column],
    /// Columns recognized beyond the required ones.
    pub optional: &'static [Column],
    /// Columns that must hold a non-empty string when present.
    pub non_empty: &'static [Column],
}

static DEBIAN: Schema = Schema {
    distro: Distro::Debian,
    required: &[
        Column::Version,
        Column::Codename,
        Column::Series,
        Column::Created,
        Column::Release,
        Column::Eol,
    ],
    optional: &[Column::EolLts, Column::EolElts],
    // Debian sid carries no version number, so `version` may be empty.
    non_empty: &[Column::Codename, Column::Series],
};

static UBUNTU: Schema = Schema {
    distro: Distro::Ubuntu,
    required: &[
        Column::Version,
        Column::Codename,
        Column::Series,
        Column::Created,
        Column::Release,
        Column::Eol,
    ],
    optional: &[Column::EolServer, Column::EolEsm],
    non_empty: &[Column::Version, Column::Codename, Column::Series],
};

impl Schema {
    /// Returns `true` if the schema recognizes the given header name.
    pub fn recognizes(&self, name: &str) -> bool {
        Column::from_name(name)
            .is_some_and(|column| self.required.contains(&column) || self.optional.contains(&column))
    }
}
