//! Column presence checks.

use super::RowCheck;
use crate::core::Violation;
use crate::record::ReleaseRecord;
use crate::schema::Schema;

/// Reports schema-required columns that are absent from the row.
///
/// Violations come out in schema declaration order so diagnostics are stable
/// across runs.
#[derive(Debug, Clone, Copy)]
pub struct MissingColumns;

impl RowCheck for MissingColumns {
    fn name(&self) -> &'static str {
        "missing-columns"
    }

    fn evaluate(&self, record: &ReleaseRecord, schema: &Schema) -> Vec<Violation> {
        schema
            .required
            .iter()
            .filter(|column| !record.is_present(**column))
            .map(|column| Violation::missing_column(*column))
            .collect()
    }
}

/// Reports row columns the schema does not recognize, in row order.
///
/// A column another schema knows (say `eol-lts` in an Ubuntu file) is just
/// as unrecognized as a typo.
#[derive(Debug, Clone, Copy)]
pub struct AdditionalColumns;

impl RowCheck for AdditionalColumns {
    fn name(&self) -> &'static str {
        "additional-columns"
    }

    fn evaluate(&self, record: &ReleaseRecord, schema: &Schema) -> Vec<Violation> {
        record
            .column_names()
            .iter()
            .filter(|name| !schema.recognizes(name))
            .map(|name| Violation::additional_column(name))
            .collect()
    }
}
