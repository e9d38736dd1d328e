//! Chronological ordering of release milestones.

use super::RowCheck;
use crate::core::Violation;
use crate::record::{DateSlot, ReleaseRecord};
use crate::schema::{Schema, ORDERED_PAIRS};

/// Enforces `predecessor <= successor` over the global date pairs.
///
/// A pair only constrains the row once the successor milestone carries a
/// date: an unset successor skips the pair entirely. An absent predecessor
/// column is reported; a predecessor that is present but unset is skipped
/// here, since the invalid-date or required-date findings already cover it.
#[derive(Debug, Clone, Copy)]
pub struct DateOrdering;

impl RowCheck for DateOrdering {
    fn name(&self) -> &'static str {
        "date-ordering"
    }

    fn evaluate(&self, record: &ReleaseRecord, _schema: &Schema) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (predecessor, successor) in ORDERED_PAIRS {
            let Some(successor_date) = record.date(successor).get() else {
                continue;
            };
            match record.date(predecessor) {
                DateSlot::Absent => {
                    violations.push(Violation::missing_predecessor(predecessor, successor));
                }
                DateSlot::Unset => {}
                DateSlot::Set(predecessor_date) => {
                    if predecessor_date > successor_date {
                        violations.push(Violation::date_order(
                            predecessor,
                            predecessor_date,
                            successor,
                            successor_date,
                        ));
                    }
                }
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Distro;

    fn parse(fields: &[(&str, &str)]) -> ReleaseRecord {
        let row: Vec<(String, String)> = fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        ReleaseRecord::parse(&row).0
    }

    fn evaluate(fields: &[(&str, &str)]) -> Vec<Violation> {
        DateOrdering.evaluate(&parse(fields), Distro::Debian.schema())
    }

    #[test]
    fn test_ordered_dates_pass() {
        assert!(evaluate(&[
            ("created", "2005-01-01"),
            ("release", "2011-02-06"),
            ("eol", "2016-04-26"),
        ])
        .is_empty());
    }

    #[test]
    fn test_equal_dates_pass() {
        assert!(evaluate(&[("created", "2011-02-06"), ("release", "2011-02-06")]).is_empty());
    }

    #[test]
    fn test_reversed_dates_reported() {
        let violations = evaluate(&[("created", "2012-01-01"), ("release", "2011-02-06")]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Date 2011-02-06 of column `release' needs to be >= than 2012-01-01 of column `created'"
        );
    }

    #[test]
    fn test_absent_predecessor_reported() {
        let violations = evaluate(&[("release", "2011-02-06")]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "A date needs to be specified in column `created' due to the given date in column `release'"
        );
    }

    #[test]
    fn test_unset_predecessor_skipped() {
        // Present-but-empty `created` is the required-date check's finding.
        assert!(evaluate(&[("created", ""), ("release", "2011-02-06")]).is_empty());
    }

    #[test]
    fn test_unset_successor_skips_pair() {
        assert!(evaluate(&[("created", "2005-01-01"), ("release", "")]).is_empty());
    }

    #[test]
    fn test_eol_chain_pairs() {
        let violations = evaluate(&[
            ("created", "2019-07-06"),
            ("release", "2021-08-14"),
            ("eol", "2026-06-30"),
            ("eol-lts", "2025-06-30"),
            ("eol-elts", "2024-06-30"),
        ]);
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Date 2025-06-30 of column `eol-lts' needs to be >= than 2026-06-30 of column `eol'",
                "Date 2024-06-30 of column `eol-elts' needs to be >= than 2025-06-30 of column `eol-lts'",
            ]
        );
    }
}
