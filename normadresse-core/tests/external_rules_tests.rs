//! Rule tables loaded from external TOML files

use normadresse_core::{Normalizer, RuleError, RuleTable, Stage};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn write_rules(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("rules.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_custom_rule_file() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        r#"
[metadata]
code = "test"
name = "Test rules"

[[rules]]
stage = 1
pattern = '\bAVENUE\b'
short = "AV"

[[rules]]
stage = 2
pattern = "GENERAL"
short = "GAL"
"#,
    );

    let table = RuleTable::from_file(&path).unwrap();
    assert_eq!(table.code(), "test");
    assert_eq!(table.rules(Stage::RoadType).len(), 1);
    assert_eq!(table.rules(Stage::GivenName).len(), 0);

    let n = Normalizer::new(Arc::new(table));
    assert_eq!(n.normalize("avenue du général Leclerc", 20), "AV DU GAL LECLERC");
}

#[test]
fn test_group_references_in_rule_file() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        r#"
[metadata]
code = "test"
name = "Ordinals"

[[rules]]
stage = 4
pattern = '(\d+)I?EME'
short = '\g<1>E'
"#,
    );

    let n = Normalizer::new(Arc::new(RuleTable::from_file(&path).unwrap()));
    assert_eq!(n.normalize("RUE DU 14EME REGIMENT", 19), "RUE DU 14e REGIMENT");
}

#[test]
fn test_invalid_pattern_is_reported_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        r#"
[metadata]
code = "test"
name = "Broken"

[[rules]]
stage = 6
pattern = "SAINT("
short = "ST"
"#,
    );

    match RuleTable::from_file(&path) {
        Err(RuleError::InvalidPattern { stage, pattern, .. }) => {
            assert_eq!(stage, Stage::SaintExtension);
            assert_eq!(pattern, "SAINT(");
        }
        other => panic!("expected an invalid pattern error, got {other:?}"),
    }
}

#[test]
fn test_unknown_stage_is_reported_at_load() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(
        &dir,
        r#"
[metadata]
code = "test"
name = "Broken"

[[rules]]
stage = 11
pattern = "X"
short = "Y"
"#,
    );

    let err = RuleTable::from_file(&path).unwrap_err();
    assert!(matches!(err, RuleError::Parse(_)));
    assert!(err.to_string().contains("unknown stage identifier 11"));
}

#[test]
fn test_empty_stage_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(&dir, "[metadata]\ncode = \"none\"\nname = \"No rules\"\n");

    let n = Normalizer::new(Arc::new(RuleTable::from_file(&path).unwrap()));
    assert_eq!(n.normalize("RUE DE LA PAIX", 11), "RUE LA PAIX");
}
