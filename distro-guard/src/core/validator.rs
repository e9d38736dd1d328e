//! Row-level orchestration of the validation rules.

use crate::checks::{
    AdditionalColumns, BoxedCheck, DateOrdering, EolWeekday, EsmOverlap, MissingColumns,
    RequiredCreated, RequiredStrings,
};
use crate::core::Violation;
use crate::record::ReleaseRecord;
use crate::schema::{Distro, Schema};
use tracing::{debug, instrument};

/// Runs the fixed check sequence against one row at a time.
///
/// The validator is a pure rule engine: no I/O, no state between rows.
/// Every applicable check runs for every row regardless of earlier findings
/// in the same row — accumulate-all, never fail-fast.
///
/// # Examples
///
/// ```rust
/// use distro_guard::core::RowValidator;
/// use distro_guard::schema::Distro;
///
/// let validator = RowValidator::new(Distro::Debian);
/// let row = vec![
///     ("version".to_string(), "7".to_string()),
///     ("codename".to_string(), "wheezy".to_string()),
///     ("series".to_string(), "wheezy".to_string()),
///     ("created".to_string(), "2005-01-01".to_string()),
///     ("release".to_string(), "2011-02-06".to_string()),
///     ("eol".to_string(), "2016-04-26".to_string()),
/// ];
/// assert!(validator.validate_row(&row).is_empty());
/// ```
#[derive(Debug)]
pub struct RowValidator {
    schema: &'static Schema,
    /// Checks that run before the parse-phase findings are emitted.
    structural: Vec<BoxedCheck>,
    /// Checks that run on the parsed dates afterwards.
    semantic: Vec<BoxedCheck>,
}

impl RowValidator {
    /// Creates a validator for the given distribution's schema.
    pub fn new(distro: Distro) -> Self {
        let structural: Vec<BoxedCheck> = vec![
            Box::new(MissingColumns),
            Box::new(AdditionalColumns),
            Box::new(RequiredStrings),
        ];
        let mut semantic: Vec<BoxedCheck> = vec![Box::new(RequiredCreated), Box::new(DateOrdering)];
        if distro == Distro::Ubuntu {
            semantic.push(Box::new(EolWeekday));
            semantic.push(Box::new(EsmOverlap));
        }
        Self {
            schema: distro.schema(),
            structural,
            semantic,
        }
    }

    /// The schema this validator enforces.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Validates one raw row, returning every violation found.
    ///
    /// Violations come out in engine order: column checks, required
    /// strings, date conversion, then the date and policy rules.
    #[instrument(skip_all, fields(distro = %self.schema.distro))]
    pub fn validate_row(&self, row: &[(String, String)]) -> Vec<Violation> {
        let (record, mut parse_violations) = ReleaseRecord::parse(row);

        let mut violations = Vec::new();
        for check in &self.structural {
            self.run_check(check.as_ref(), &record, &mut violations);
        }
        violations.append(&mut parse_violations);
        for check in &self.semantic {
            self.run_check(check.as_ref(), &record, &mut violations);
        }
        violations
    }

    fn run_check(
        &self,
        check: &dyn crate::checks::RowCheck,
        record: &ReleaseRecord,
        violations: &mut Vec<Violation>,
    ) {
        let found = check.evaluate(record, self.schema);
        if !found.is_empty() {
            debug!(
                check.name = check.name(),
                check.violations = found.len(),
                "check reported violations"
            );
        }
        violations.extend(found);
    }
}
