//! Tests for the report output formats, fed by a real pipeline run.

use std::path::PathBuf;

use dummylang::host::{FileSystem, InputFile, IssueStore, Perspectives};
use dummylang::language::DUMMY;
use dummylang::report;
use dummylang::sensor::Sensor;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn run_pipeline() -> IssueStore {
    let sample = testdata_path().join("sample.lang");

    let mut fs = FileSystem::new();
    fs.add(InputFile::new(&sample, Some(DUMMY.key())));

    let sensor = Sensor::with_builtin_checks(&DUMMY, Perspectives::new());
    let mut store = IssueStore::new();
    sensor.analyse(&fs, &mut store).unwrap();
    store
}

#[test]
fn test_json_report_from_pipeline() {
    let store = run_pipeline();
    let report = report::build_json("testdata", DUMMY.key(), 1, &store);

    assert_eq!(report.language, "dummy");
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.total, 2);
    assert_eq!(report.issues.len(), 2);

    let text = serde_json::to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["total"], 2);
    assert!(value["issues"]
        .as_array()
        .unwrap()
        .iter()
        .all(|i| i["rule"].as_str().unwrap().starts_with("dummy:")));
}

#[test]
fn test_pretty_report_from_pipeline() {
    let store = run_pipeline();
    let out = report::render_pretty("testdata", 1, &store);

    assert!(out.contains("sample.lang"));
    assert!(out.contains("[dummy:forbidden-term]"));
    assert!(out.contains("[dummy:tab-indentation]"));
    assert!(out.contains("2 issues found."));
}
