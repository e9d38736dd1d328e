//! Required-content checks.

use super::RowCheck;
use crate::core::Violation;
use crate::record::ReleaseRecord;
use crate::schema::{Column, Schema};

/// Reports non-empty-string columns that are present but empty.
#[derive(Debug, Clone, Copy)]
pub struct RequiredStrings;

impl RowCheck for RequiredStrings {
    fn name(&self) -> &'static str {
        "required-strings"
    }

    fn evaluate(&self, record: &ReleaseRecord, schema: &Schema) -> Vec<Violation> {
        schema
            .non_empty
            .iter()
            .filter(|column| record.text(**column).is_empty_value())
            .map(|column| Violation::empty_column(*column))
            .collect()
    }
}

/// Reports a `created` column that carries no usable date.
///
/// Fires whether the column is wholly absent, empty, or failed to parse;
/// the missing-column and invalid-date findings fire independently for
/// their own causes.
#[derive(Debug, Clone, Copy)]
pub struct RequiredCreated;

impl RowCheck for RequiredCreated {
    fn name(&self) -> &'static str {
        "required-created"
    }

    fn evaluate(&self, record: &ReleaseRecord, _schema: &Schema) -> Vec<Violation> {
        if record.date(Column::Created).get().is_none() {
            vec![Violation::missing_created()]
        } else {
            Vec::new()
        }
    }
}
