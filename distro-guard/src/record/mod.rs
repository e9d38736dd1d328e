//! Typed row records for release tables.
//!
//! A raw CSV row arrives as header-name/value pairs. The parse phase maps it
//! into a [`ReleaseRecord`]: a fixed-shape bag with one explicit slot per
//! known column, so the checks downstream never see a raw string where a
//! date belongs. Building the record is pure — it returns the record
//! together with any invalid-date violations instead of printing or
//! mutating shared state.

pub mod date;

use crate::core::Violation;
use crate::schema::Column;
use chrono::NaiveDate;

use self::date::convert_date;

/// A text column slot. Absence from the row is distinct from an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSlot {
    /// The column was not part of the row.
    Absent,
    /// The column was present with this (possibly empty) value.
    Value(String),
}

impl TextSlot {
    /// The stored value, if the column was present.
    pub fn value(&self) -> Option<&str> {
        match self {
            TextSlot::Absent => None,
            TextSlot::Value(value) => Some(value),
        }
    }

    /// `true` if the column was present but held an empty string.
    pub fn is_empty_value(&self) -> bool {
        matches!(self, TextSlot::Value(value) if value.is_empty())
    }
}

/// A date column slot after the parse phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSlot {
    /// The column was not part of the row.
    Absent,
    /// The column was present but carried no usable date (empty or invalid).
    Unset,
    /// The column carried a parsed calendar date.
    Set(NaiveDate),
}

impl DateSlot {
    /// The parsed date, if one was set.
    pub fn get(self) -> Option<NaiveDate> {
        match self {
            DateSlot::Set(date) => Some(date),
            _ => None,
        }
    }

    /// `true` if the column was not part of the row at all.
    pub fn is_absent(self) -> bool {
        matches!(self, DateSlot::Absent)
    }
}

/// One release row in typed form.
///
/// Every known column has a dedicated slot; columns no schema knows are kept
/// by name, in row order, for the additional-column check.
#[derive(Debug, Clone)]
pub struct ReleaseRecord {
    version: TextSlot,
    codename: TextSlot,
    series: TextSlot,
    created: DateSlot,
    release: DateSlot,
    eol: DateSlot,
    eol_server: DateSlot,
    eol_esm: DateSlot,
    eol_lts: DateSlot,
    eol_elts: DateSlot,
    /// All column names of the row, in row order.
    columns: Vec<String>,
}

impl ReleaseRecord {
    fn empty() -> Self {
        Self {
            version: TextSlot::Absent,
            codename: TextSlot::Absent,
            series: TextSlot::Absent,
            created: DateSlot::Absent,
            release: DateSlot::Absent,
            eol: DateSlot::Absent,
            eol_server: DateSlot::Absent,
            eol_esm: DateSlot::Absent,
            eol_lts: DateSlot::Absent,
            eol_elts: DateSlot::Absent,
            columns: Vec::new(),
        }
    }

    /// Builds a record from raw header/value pairs.
    ///
    /// This is the parse phase of the engine. Date columns are converted
    /// eagerly; a raw value that is not ISO 8601 produces an
    /// ``Invalid date `<raw>' in column `<name>'`` violation and leaves the
    /// slot [`DateSlot::Unset`], so later checks treat the column as missing
    /// a date rather than re-reporting the parse failure.
    pub fn parse(row: &[(String, String)]) -> (Self, Vec<Violation>) {
        let mut record = Self::empty();
        let mut violations = Vec::new();

        for (name, raw) in row {
            record.columns.push(name.clone());
            let Some(column) = Column::from_name(name) else {
                continue;
            };
            if column.is_date() {
                let slot = match convert_date(raw) {
                    Ok(Some(parsed)) => DateSlot::Set(parsed),
                    Ok(None) => DateSlot::Unset,
                    Err(_) => {
                        violations.push(Violation::invalid_date(column, raw));
                        DateSlot::Unset
                    }
                };
                *record.date_slot_mut(column) = slot;
            } else {
                *record.text_slot_mut(column) = TextSlot::Value(raw.clone());
            }
        }

        (record, violations)
    }

    /// All column names of the row, in row order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// `true` if the named column was part of the row.
    pub fn is_present(&self, column: Column) -> bool {
        if column.is_date() {
            !self.date(column).is_absent()
        } else {
            self.text(column).value().is_some()
        }
    }

    /// The text slot for a non-date column.
    ///
    /// Date columns have no text representation after the parse phase and
    /// yield [`TextSlot::Absent`].
    pub fn text(&self, column: Column) -> &TextSlot {
        match column {
            Column::Version => &self.version,
            Column::Codename => &self.codename,
            Column::Series => &self.series,
            _ => &TextSlot::Absent,
        }
    }

    /// The date slot for a date column. Non-date columns yield
    /// [`DateSlot::Absent`].
    pub fn date(&self, column: Column) -> DateSlot {
        match column {
            Column::Created => self.created,
            Column::Release => self.release,
            Column::Eol => self.eol,
            Column::EolServer => self.eol_server,
            Column::EolEsm => self.eol_esm,
            Column::EolLts => self.eol_lts,
            Column::EolElts => self.eol_elts,
            _ => DateSlot::Absent,
        }
    }

    /// The row's codename, or an empty string when it has none. Used in
    /// policy-check messages.
    pub fn codename(&self) -> &str {
        self.codename.value().unwrap_or_default()
    }

    fn date_slot_mut(&mut self, column: Column) -> &mut DateSlot {
        match column {
            Column::Created => &mut self.created,
            Column::Release => &mut self.release,
            Column::Eol => &mut self.eol,
            Column::EolServer => &mut self.eol_server,
            Column::EolEsm => &mut self.eol_esm,
            Column::EolLts => &mut self.eol_lts,
            Column::EolElts => &mut self.eol_elts,
            _ => unreachable!("not a date column: {column}"),
        }
    }

    fn text_slot_mut(&mut self, column: Column) -> &mut TextSlot {
        match column {
            Column::Version => &mut self.version,
            Column::Codename => &mut self.codename,
            Column::Series => &mut self.series,
            _ => unreachable!("not a text column: {column}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_fills_typed_slots() {
        let (record, violations) = ReleaseRecord::parse(&row(&[
            ("version", "7"),
            ("codename", "wheezy"),
            ("series", "wheezy"),
            ("created", "2005-01-01"),
            ("release", "2011-02-06"),
            ("eol", "2016-04-26"),
        ]));

        assert!(violations.is_empty());
        assert_eq!(record.text(Column::Version).value(), Some("7"));
        assert_eq!(record.codename(), "wheezy");
        assert_eq!(
            record.date(Column::Created).get(),
            NaiveDate::from_ymd_opt(2005, 1, 1)
        );
        assert!(record.date(Column::EolLts).is_absent());
        assert!(!record.is_present(Column::EolElts));
    }

    #[test]
    fn test_parse_keeps_unknown_columns_in_row_order() {
        let (record, violations) =
            ReleaseRecord::parse(&row(&[("codename", "sid"), ("flavour", "unstable")]));
        assert!(violations.is_empty());
        assert_eq!(record.column_names(), ["codename", "flavour"]);
    }

    #[test]
    fn test_parse_empty_date_is_unset_without_violation() {
        let (record, violations) = ReleaseRecord::parse(&row(&[("eol", "")]));
        assert!(violations.is_empty());
        assert_eq!(record.date(Column::Eol), DateSlot::Unset);
        assert!(record.is_present(Column::Eol));
    }

    #[test]
    fn test_parse_invalid_date_reports_and_unsets() {
        let (record, violations) = ReleaseRecord::parse(&row(&[("created", "notadate")]));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Invalid date `notadate' in column `created'"
        );
        assert_eq!(record.date(Column::Created), DateSlot::Unset);
    }

    #[test]
    fn test_empty_text_value_is_present() {
        let (record, _) = ReleaseRecord::parse(&row(&[("codename", "")]));
        assert!(record.is_present(Column::Codename));
        assert!(record.text(Column::Codename).is_empty_value());
        assert!(!record.is_present(Column::Series));
    }
}
