//! Ubuntu release policy checks.
//!
//! These rules only run for the `ubuntu` schema. They encode two release
//! management policies: end-of-life dates must land mid-week (so support
//! never lapses next to a weekend), and LTS releases since 2018 must keep
//! standard support running into early June of their final year so the paid
//! ESM window overlaps it.

use super::RowCheck;
use crate::core::Violation;
use crate::record::ReleaseRecord;
use crate::schema::{Column, Schema, DATE_COLUMNS};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;

/// End-of-life dates from this day on must land Tuesday-Thursday.
static WEEKDAY_POLICY_START: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2021, 5, 1).expect("valid calendar date"));

/// LTS releases from this day on must retain an ESM overlap window.
static ESM_POLICY_START: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid calendar date"));

/// The widest gap allowed between an LTS `eol` and June 1 of its year.
const ESM_OVERLAP_GRACE_DAYS: i64 = 7;

/// Reports `eol*` dates that land outside the Tuesday-Thursday window.
#[derive(Debug, Clone, Copy)]
pub struct EolWeekday;

impl RowCheck for EolWeekday {
    fn name(&self) -> &'static str {
        "eol-weekday"
    }

    fn evaluate(&self, record: &ReleaseRecord, _schema: &Schema) -> Vec<Violation> {
        let mut violations = Vec::new();
        for column in DATE_COLUMNS.into_iter().filter(|column| column.is_eol()) {
            let Some(date) = record.date(column).get() else {
                continue;
            };
            if date < *WEEKDAY_POLICY_START {
                continue;
            }
            if !matches!(date.weekday(), Weekday::Tue | Weekday::Wed | Weekday::Thu) {
                violations.push(Violation::weekday_landing(column, record.codename(), date));
            }
        }
        violations
    }
}

/// Reports LTS releases whose `eol` leaves no overlap with the ESM window.
///
/// Applies to rows whose version ends in `LTS` and whose release date is on
/// or after the 2018 policy start. By this point `eol` equals `eol-server`
/// for such rows, so only `eol` is inspected.
#[derive(Debug, Clone, Copy)]
pub struct EsmOverlap;

impl RowCheck for EsmOverlap {
    fn name(&self) -> &'static str {
        "esm-overlap"
    }

    fn evaluate(&self, record: &ReleaseRecord, _schema: &Schema) -> Vec<Violation> {
        let Some(version) = record.text(Column::Version).value() else {
            return Vec::new();
        };
        if !version.ends_with("LTS") {
            return Vec::new();
        }
        let Some(release) = record.date(Column::Release).get() else {
            return Vec::new();
        };
        if release < *ESM_POLICY_START {
            return Vec::new();
        }
        let Some(eol) = record.date(Column::Eol).get() else {
            return Vec::new();
        };
        let Some(june_first) = NaiveDate::from_ymd_opt(eol.year(), 6, 1) else {
            return Vec::new();
        };
        if june_first.signed_duration_since(eol) > Duration::days(ESM_OVERLAP_GRACE_DAYS) {
            return vec![Violation::missing_esm_overlap(record.codename(), eol)];
        }
        Vec::new()
    }
}
