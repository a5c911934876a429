//! Tests for the ID ledger: persistence, resume merge, and error taxonomy.

use glueport_core::errors::LedgerError;
use glueport_core::types::EntityType;
use glueport_storage::IdLedger;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempdir();
    let path = dir.path().join("idmap.json");

    let mut ledger = IdLedger::new();
    ledger
        .add(EntityType::Organization, "123", "uuid-org-1")
        .unwrap();
    ledger
        .add(EntityType::Password, "77", "uuid-pass-1")
        .unwrap();
    ledger.save(&path).unwrap();

    let mut restored = IdLedger::new();
    restored.load(&path).unwrap();
    assert_eq!(
        restored.get(EntityType::Organization, "123"),
        Some("uuid-org-1")
    );
    assert_eq!(restored.get(EntityType::Password, "77"), Some("uuid-pass-1"));
    assert_eq!(restored.total_count(), 2);
}

#[test]
fn test_load_merges_instead_of_replacing() {
    let dir = tempdir();
    let path = dir.path().join("idmap.json");

    // First run mapped organization 2.
    let mut first_run = IdLedger::new();
    first_run.add(EntityType::Organization, "2", "b").unwrap();
    first_run.save(&path).unwrap();

    // Second run already holds organization 1 and resumes from the file.
    let mut second_run = IdLedger::new();
    second_run.add(EntityType::Organization, "1", "a").unwrap();
    second_run.load(&path).unwrap();

    assert_eq!(second_run.get(EntityType::Organization, "1"), Some("a"));
    assert_eq!(second_run.get(EntityType::Organization, "2"), Some("b"));
}

#[test]
fn test_loaded_entries_win_on_conflict() {
    let dir = tempdir();
    let path = dir.path().join("idmap.json");

    let mut saved = IdLedger::new();
    saved.add(EntityType::Document, "9", "uuid-new").unwrap();
    saved.save(&path).unwrap();

    let mut resuming = IdLedger::new();
    resuming.add(EntityType::Document, "9", "uuid-stale").unwrap();
    resuming.load(&path).unwrap();
    assert_eq!(resuming.get(EntityType::Document, "9"), Some("uuid-new"));
}

#[test]
fn test_unknown_entity_type_in_file_is_skipped() {
    let dir = tempdir();
    let path = dir.path().join("idmap.json");
    std::fs::write(
        &path,
        r#"{
  "version": 1,
  "mappings": {
    "organization": {"1": "a"},
    "flexible_asset": {"5": "z"}
  }
}"#,
    )
    .unwrap();

    let mut ledger = IdLedger::new();
    ledger.load(&path).unwrap();
    assert_eq!(ledger.get(EntityType::Organization, "1"), Some("a"));
    // The bogus key left no trace.
    assert_eq!(ledger.total_count(), 1);
    let stats = ledger.stats();
    assert_eq!(stats.len(), EntityType::ALL.len());
    assert_eq!(stats[&EntityType::Organization], 1);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir();
    let path = dir.path().join("absent.json");
    let mut ledger = IdLedger::new();
    assert!(matches!(
        ledger.load(&path),
        Err(LedgerError::FileNotFound { .. })
    ));
}

#[test]
fn test_load_rejects_wrong_version() {
    let dir = tempdir();
    let path = dir.path().join("idmap.json");
    std::fs::write(&path, r#"{"version": 2, "mappings": {}}"#).unwrap();

    let mut ledger = IdLedger::new();
    match ledger.load(&path).unwrap_err() {
        LedgerError::UnsupportedVersion { found, .. } => assert_eq!(found, 2),
        other => panic!("Expected UnsupportedVersion, got: {:?}", other),
    }
}

#[test]
fn test_load_rejects_malformed_documents() {
    let dir = tempdir();
    let mut ledger = IdLedger::new();

    let cases = [
        ("not json at all", "invalid JSON"),
        ("[1, 2, 3]", "non-object root"),
        (r#"{"mappings": {}}"#, "missing version"),
        (r#"{"version": 1}"#, "missing mappings"),
        (r#"{"version": 1, "mappings": 3}"#, "non-object mappings"),
        (
            r#"{"version": 1, "mappings": {"organization": ["a"]}}"#,
            "non-object bucket",
        ),
        (
            r#"{"version": 1, "mappings": {"organization": {"1": 42}}}"#,
            "non-string uuid",
        ),
    ];
    for (i, (content, label)) in cases.iter().enumerate() {
        let path = dir.path().join(format!("bad-{i}.json"));
        std::fs::write(&path, content).unwrap();
        assert!(
            matches!(ledger.load(&path), Err(LedgerError::Malformed { .. })),
            "case: {label}"
        );
    }
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir();
    let path = dir.path().join("nested/state/idmap.json");

    let mut ledger = IdLedger::new();
    ledger.add(EntityType::Location, "3", "uuid-loc").unwrap();
    ledger.save(&path).unwrap();

    assert!(path.exists());
    let mut restored = IdLedger::new();
    restored.load(&path).unwrap();
    assert_eq!(restored.get(EntityType::Location, "3"), Some("uuid-loc"));
}

#[test]
fn test_saved_file_is_key_sorted() {
    let dir = tempdir();
    let path = dir.path().join("idmap.json");

    let mut ledger = IdLedger::new();
    ledger.add(EntityType::Password, "b", "2").unwrap();
    ledger.add(EntityType::Password, "a", "1").unwrap();
    ledger.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    // Entity buckets appear alphabetically, and ids within a bucket too.
    let configuration = text.find("\"configuration\"").unwrap();
    let organization = text.find("\"organization\"").unwrap();
    assert!(configuration < organization);
    assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
}

#[test]
fn test_clear_keeps_buckets() {
    let mut ledger = IdLedger::new();
    ledger.add(EntityType::Configuration, "1", "u").unwrap();
    ledger.clear();
    assert_eq!(ledger.total_count(), 0);
    assert_eq!(ledger.stats().len(), EntityType::ALL.len());
    assert!(!ledger.contains(EntityType::Configuration, "1"));
}

#[test]
fn test_get_and_contains_never_fail_for_unknown_ids() {
    let ledger = IdLedger::new();
    assert_eq!(ledger.get(EntityType::CustomAsset, "nope"), None);
    assert!(!ledger.contains(EntityType::CustomAsset, "nope"));
}
