//! Integration tests driven by fixture infoboxes
//!
//! Each directory under tests/fixtures/ holds one raw infobox (source.json,
//! the shape of a raw dump entry) and the record extraction must produce for
//! it (expected.json, in the legacy output key spelling).

use infoboxrs::{extract, is_probably_extractable, NormalizedRecord, RawInfobox};
use std::fs;
use std::path::{Path, PathBuf};

/// A single fixture case
struct TestCase {
    name: String,
    source: RawInfobox,
    expected: NormalizedRecord,
}

impl TestCase {
    fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("Invalid test case name")?
            .to_string();

        let source: RawInfobox =
            serde_json::from_str(&fs::read_to_string(path.join("source.json"))?)?;
        let expected: NormalizedRecord =
            serde_json::from_str(&fs::read_to_string(path.join("expected.json"))?)?;

        Ok(TestCase {
            name,
            source,
            expected,
        })
    }
}

fn load_test_cases() -> Vec<TestCase> {
    let fixture_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    let mut test_cases = Vec::new();
    for entry in fs::read_dir(&fixture_dir).expect("fixture directory missing") {
        let entry = entry.expect("unreadable fixture entry");
        if entry.path().is_dir() {
            match TestCase::load(&entry.path()) {
                Ok(test_case) => test_cases.push(test_case),
                Err(e) => panic!("Failed to load test case {:?}: {}", entry.path(), e),
            }
        }
    }

    test_cases.sort_by(|a, b| a.name.cmp(&b.name));
    test_cases
}

#[test]
fn fixture_suite() {
    let test_cases = load_test_cases();
    assert!(!test_cases.is_empty(), "no fixture cases found");

    let mut failures = Vec::new();

    for test_case in &test_cases {
        let record = extract(&test_case.source);
        if record != test_case.expected {
            failures.push(format!(
                "{}: expected {:#?}, got {:#?}",
                test_case.name, test_case.expected, record
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} of {} fixture cases failed:\n{}",
            failures.len(),
            test_cases.len(),
            failures.join("\n")
        );
    }
}

// Extraction over a dump is a pure per-entry map; running the suite twice
// must give identical records.
#[test]
fn extraction_is_deterministic() {
    for test_case in load_test_cases() {
        assert_eq!(
            extract(&test_case.source),
            extract(&test_case.source),
            "{} is not deterministic",
            test_case.name
        );
    }
}

#[test]
fn preflight_agrees_with_fixture_content() {
    for test_case in load_test_cases() {
        let parsed_anything = !test_case.expected.director.is_empty()
            || !test_case.expected.starring.is_empty()
            || test_case.expected.running_time.is_some()
            || !test_case.expected.country.is_empty()
            || !test_case.expected.language.is_empty();

        if parsed_anything {
            assert!(
                is_probably_extractable(&test_case.source),
                "{} parsed fields but failed the pre-flight check",
                test_case.name
            );
        }
    }
}

#[test]
fn serialized_records_use_legacy_keys() {
    let test_case = load_test_cases()
        .into_iter()
        .find(|c| c.name == "comma-list")
        .expect("comma-list fixture missing");

    let json = serde_json::to_value(extract(&test_case.source)).unwrap();
    for key in [
        "Title",
        "Director",
        "Starring",
        "Running time",
        "Country",
        "Language",
        "Categories",
        "Text",
    ] {
        assert!(json.get(key).is_some(), "missing output key {:?}", key);
    }
}
