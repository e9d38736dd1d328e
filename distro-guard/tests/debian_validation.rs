//! Integration tests for validating Debian release CSV data.

use distro_guard::prelude::*;
use std::io::Write as _;

const HEADER: &str = "version,codename,series,created,release,eol";

/// Runs a validation over in-memory CSV data and returns the report plus
/// the rendered diagnostics.
fn validate(data: &str) -> (FileReport, String) {
    let mut rendered = Vec::new();
    let report = validate_reader(data.as_bytes(), "debian.csv", Distro::Debian, &mut rendered)
        .expect("in-memory validation cannot fail on I/O");
    (report, String::from_utf8(rendered).unwrap())
}

fn messages(report: &FileReport) -> Vec<&str> {
    report
        .issues
        .iter()
        .map(|issue| issue.violation.message.as_str())
        .collect()
}

#[test]
fn test_clean_wheezy_row_is_valid() {
    let data = format!("{HEADER}\n7,wheezy,wheezy,2005-01-01,2011-02-06,2016-04-26\n");
    let (report, rendered) = validate(&data);
    assert!(report.is_valid());
    assert!(rendered.is_empty());
}

#[test]
fn test_optional_lts_columns_accepted() {
    let data = "version,codename,series,created,release,eol,eol-lts,eol-elts\n\
                9,stretch,stretch,2015-04-25,2017-06-17,2020-07-06,2022-06-30,2025-06-30\n";
    let (report, _) = validate(data);
    assert!(report.is_valid());
}

#[test]
fn test_absent_created_fires_three_independent_findings() {
    // Deliberate accumulation: one root cause, three diagnostics.
    let data = "version,codename,series,release,eol\n\
                7,wheezy,wheezy,2011-02-06,2016-04-26\n";
    let (report, rendered) = validate(data);
    assert_eq!(
        messages(&report),
        [
            "Column `created' is missing",
            "No date specified in column `created'",
            "A date needs to be specified in column `created' due to the given date in column `release'",
        ]
    );
    assert_eq!(
        rendered,
        "debian.csv:2: Column `created' is missing.\n\
         debian.csv:2: No date specified in column `created'.\n\
         debian.csv:2: A date needs to be specified in column `created' due to the given date in column `release'.\n"
    );
}

#[test]
fn test_empty_created_fires_only_the_required_date_finding() {
    let data = format!("{HEADER}\n7,wheezy,wheezy,,2011-02-06,2016-04-26\n");
    let (report, _) = validate(&data);
    assert_eq!(messages(&report), ["No date specified in column `created'"]);
}

#[test]
fn test_unparseable_created_fires_invalid_then_missing() {
    let data = format!("{HEADER}\n7,wheezy,wheezy,notadate,2011-02-06,2016-04-26\n");
    let (report, _) = validate(&data);
    assert_eq!(
        messages(&report),
        [
            "Invalid date `notadate' in column `created'",
            "No date specified in column `created'",
        ]
    );
}

#[test]
fn test_reversed_release_dates_reported() {
    let data = format!("{HEADER}\n7,wheezy,wheezy,2012-01-01,2011-02-06,2016-04-26\n");
    let (report, _) = validate(&data);
    assert_eq!(
        messages(&report),
        ["Date 2011-02-06 of column `release' needs to be >= than 2012-01-01 of column `created'"]
    );
}

#[test]
fn test_unknown_header_column_reported_per_row() {
    let data = format!(
        "{HEADER},flavour\n\
         7,wheezy,wheezy,2005-01-01,2011-02-06,2016-04-26,stable\n\
         8,jessie,jessie,2013-05-04,2015-04-25,2018-06-17,stable\n"
    );
    let (report, rendered) = validate(&data);
    assert_eq!(report.issue_count(), 2);
    assert_eq!(
        rendered,
        "debian.csv:2: Additional column `flavour' is specified.\n\
         debian.csv:3: Additional column `flavour' is specified.\n"
    );
}

#[test]
fn test_ubuntu_only_columns_are_unknown_here() {
    let data = format!(
        "{HEADER},eol-server\n\
         7,wheezy,wheezy,2005-01-01,2011-02-06,2016-04-26,2016-04-26\n"
    );
    let (report, _) = validate(&data);
    assert_eq!(messages(&report), ["Additional column `eol-server' is specified"]);
}

#[test]
fn test_sid_row_with_empty_version_is_valid() {
    let data = format!("{HEADER}\n,sid,sid,1993-08-16,,\n");
    let (report, _) = validate(&data);
    assert!(report.is_valid(), "unexpected: {:?}", report.issues);
}

#[test]
fn test_no_weekday_policy_for_debian() {
    // 2021-05-07 is a Friday; only the Ubuntu schema cares.
    let data = format!("{HEADER}\n10,buster,buster,2017-06-17,2019-07-06,2021-05-07\n");
    let (report, _) = validate(&data);
    assert!(report.is_valid());
}

#[test]
fn test_findings_accumulate_across_rows() {
    let data = format!(
        "{HEADER}\n\
         7,wheezy,wheezy,2005-01-01,2011-02-06,2016-04-26\n\
         8,,jessie,2013-05-04,2015-04-25,2018-06-17\n\
         9,stretch,stretch,2015-04-25,baddate,2022-06-30\n"
    );
    let (report, rendered) = validate(&data);
    assert_eq!(report.issue_count(), 2);
    assert_eq!(
        rendered,
        "debian.csv:3: Empty column `codename' specified.\n\
         debian.csv:4: Invalid date `baddate' in column `release'.\n"
    );
}

#[test]
fn test_validation_is_idempotent() {
    let data = format!(
        "{HEADER}\n\
         7,wheezy,wheezy,2012-01-01,2011-02-06,2016-04-26\n\
         8,,jessie,2013-05-04,2015-04-25,2018-06-17\n"
    );
    let (first_report, first_rendered) = validate(&data);
    let (second_report, second_rendered) = validate(&data);
    assert_eq!(first_rendered, second_rendered);
    assert_eq!(messages(&first_report), messages(&second_report));
    assert_eq!(first_report.is_valid(), second_report.is_valid());
}

#[test]
fn test_validate_file_uses_the_path_in_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debian.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "7,wheezy,wheezy,,2011-02-06,2016-04-26").unwrap();
    drop(file);

    let mut rendered = Vec::new();
    let report = validate_file(&path, Distro::Debian, &mut rendered).unwrap();
    assert!(!report.is_valid());
    assert_eq!(
        String::from_utf8(rendered).unwrap(),
        format!(
            "{}:2: No date specified in column `created'.\n",
            path.display()
        )
    );
}

#[test]
fn test_missing_file_is_a_hard_error() {
    let err =
        validate_file("/nonexistent/debian.csv", Distro::Debian, std::io::sink()).unwrap_err();
    assert!(matches!(err, GuardError::Io { .. }));
}
