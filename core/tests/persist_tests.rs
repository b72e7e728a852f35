use invidx_core::{build_inverted_index, dump_index, load_documents_from_path, load_index, IndexError, StoragePolicy};
use std::fs;
use tempfile::tempdir;

const DOCUMENTS: &str = "1\tThis doc consists one слово\n2\tThis doc consists two words\n3\tThis doc also consists two words\n";

#[test]
fn dump_and_load_each_policy() {
    let dir = tempdir().unwrap();
    let dataset = dir.path().join("docs.txt");
    fs::write(&dataset, DOCUMENTS).unwrap();
    let index = build_inverted_index(&load_documents_from_path(&dataset).unwrap());

    for policy in [StoragePolicy::Text, StoragePolicy::Binary] {
        let path = dir.path().join(format!("inverted.{policy}"));
        dump_index(&index, &path, policy).unwrap();
        assert_eq!(load_index(&path, policy).unwrap(), index);
    }
}

#[test]
fn text_dump_is_a_json_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inverted.json");
    let index = invidx_core::build_from_iter([(2, "two words"), (3, "two")]);
    dump_index(&index, &path, StoragePolicy::Text).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"two": [2, 3], "words": [2]}));
}

#[test]
fn loading_with_the_wrong_policy_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inverted.index");
    let index = invidx_core::build_from_iter([(1, "a b c")]);
    dump_index(&index, &path, StoragePolicy::Text).unwrap();
    assert!(matches!(load_index(&path, StoragePolicy::Binary), Err(IndexError::Corrupt(_))));
}

#[test]
fn out_of_range_id_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inverted.bin");
    let index = invidx_core::build_from_iter([(100_000, "big")]);
    let err = dump_index(&index, &path, StoragePolicy::Binary).unwrap_err();
    assert!(matches!(err, IndexError::DocIdOutOfRange { .. }));
    assert!(!path.exists());
}

#[test]
fn missing_files_surface_io_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(load_index(&missing, StoragePolicy::Text), Err(IndexError::Io(_))));
    assert!(matches!(load_documents_from_path(&missing), Err(IndexError::Io(_))));
}
