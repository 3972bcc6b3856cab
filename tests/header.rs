//! Header parsing and validation tests

mod common;

use chrono::{Datelike, Month};
use common::{go, python, HeaderBuilder, Site, PYTHON_BODY};
use lazylit::document::{parse_header, read_snapshot, scan_header};
use lazylit::model::HeaderField;
use lazylit::{Error, LanguageRegistry};
use std::path::Path;

fn path() -> &'static Path {
    Path::new("artifacts/lisp/lisp.jul_2_20.py")
}

fn missing_fields(contents: &str) -> Vec<HeaderField> {
    match parse_header("lisp", path(), contents, python()) {
        Err(Error::MissingHeaders { missing, .. }) => missing,
        other => panic!("expected MissingHeaders, got {other:?}"),
    }
}

// ========================================================================
// Validation Tests
// ========================================================================

#[test]
fn test_each_field_removed_is_reported() {
    for field in HeaderField::ALL {
        let contents = HeaderBuilder::new("#").without(field.as_str()).build();
        assert_eq!(missing_fields(&contents), vec![field], "removed {field}");
    }
}

#[test]
fn test_all_fields_removed_reports_all_five() {
    let mut builder = HeaderBuilder::new("#");
    for field in HeaderField::ALL {
        builder = builder.without(field.as_str());
    }
    let missing = missing_fields(&format!("{}x = 1\n", builder.build()));
    assert_eq!(missing, HeaderField::ALL.to_vec());
}

#[test]
fn test_error_message_names_file_and_fields() {
    let contents = HeaderBuilder::new("#")
        .without("SourceLink")
        .without("Commit")
        .build();
    let err = parse_header("lisp", path(), &contents, python()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("lisp.jul_2_20.py"), "{msg}");
    assert!(msg.contains("Commit, SourceLink"), "{msg}");
}

#[test]
fn test_header_after_code_is_ignored() {
    // All five keys appear, but only Commit is in the leading block
    let header = HeaderBuilder::new("#").build();
    let mut lines = header.lines();
    let first = lines.next().unwrap();
    let rest: String = lines.map(|l| format!("{l}\n")).collect();
    let contents = format!("{first}\nimport os\n{rest}");

    let missing = missing_fields(&contents);
    assert_eq!(missing.len(), 4);
    assert!(!missing.contains(&HeaderField::Commit));
}

// ========================================================================
// CommitDate Tests
// ========================================================================

#[test]
fn test_commit_date_parses_and_keeps_original_text() {
    let contents = format!("{}{}", HeaderBuilder::new("#").build(), PYTHON_BODY);
    let snapshot = parse_header("lisp", path(), &contents, python()).unwrap();
    assert_eq!(snapshot.commit_date.day(), 2);
    assert_eq!(snapshot.commit_date.month(), Month::July.number_from_month());
    assert_eq!(snapshot.commit_date.year(), 2020);
    assert_eq!(snapshot.commit_date_string, "Jul 2 2020");
}

#[test]
fn test_invalid_commit_date_fails_immediately() {
    // Fails even though other fields are missing too
    let contents = HeaderBuilder::new("#")
        .set("CommitDate", "July the second")
        .without("DocAuthor")
        .build();
    let err = parse_header("lisp", path(), &contents, python()).unwrap_err();
    assert!(matches!(err, Error::InvalidCommitDate { .. }), "{err:?}");
}

#[test]
fn test_short_year_is_rejected() {
    for date in ["Jul 2 20", "Jul 2 220"] {
        let contents = format!(
            "{}{}",
            HeaderBuilder::new("#").set("CommitDate", date).build(),
            PYTHON_BODY
        );
        match parse_header("lisp", path(), &contents, python()) {
            Err(Error::InvalidCommitDate { value, .. }) => assert_eq!(value, date),
            other => panic!("expected InvalidCommitDate for {date:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_two_digit_day() {
    let contents = HeaderBuilder::new("//").set("CommitDate", "Jan 14 2020").build();
    let block = scan_header(path(), &contents, go()).unwrap();
    let (date, text) = block.commit_date.unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 14));
    assert_eq!(text, "Jan 14 2020");
}

// ========================================================================
// Header Block Extent Tests
// ========================================================================

#[test]
fn test_first_code_line_follows_block() {
    let contents = format!("{}{}", HeaderBuilder::new("#").build(), PYTHON_BODY);
    let snapshot = parse_header("lisp", path(), &contents, python()).unwrap();
    assert_eq!(snapshot.first_code_line, 5);
}

#[test]
fn test_extra_keys_extend_block() {
    let contents = HeaderBuilder::new("#").set("Reviewer", "Bob").build();
    let snapshot = parse_header("lisp", path(), &contents, python()).unwrap();
    assert_eq!(snapshot.first_code_line, 6);
}

// ========================================================================
// File Tests
// ========================================================================

#[test]
fn test_read_snapshot_from_disk() {
    let site = Site::new();
    let file = site.add(
        "lisp",
        "lisp.jul_2_20.py",
        &format!("{}{}", HeaderBuilder::new("#").build(), PYTHON_BODY),
    );
    let snapshot = read_snapshot("lisp", &file, LanguageRegistry::global()).unwrap();
    assert_eq!(snapshot.artifact_name, "lisp");
    assert_eq!(snapshot.doc_file, file);
    assert_eq!(snapshot.page_file_name(), "lisp.jul_2_20.html");
}

#[test]
fn test_read_snapshot_missing_file() {
    let site = Site::new();
    let file = site.input().join("lisp").join("absent.py");
    let err = read_snapshot("lisp", &file, LanguageRegistry::global()).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "{err:?}");
}
