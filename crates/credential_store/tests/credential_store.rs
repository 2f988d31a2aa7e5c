use std::fs;
use std::path::Path;

use credential_store::{
    credential_file_name, credential_root, CredentialRecord, CredentialStore,
    CredentialStoreError, CREDENTIAL_DIR,
};
use serde_json::json;
use tempfile::TempDir;

fn open_store() -> (TempDir, CredentialStore) {
    let home = tempfile::tempdir().expect("tempdir should be created");
    let store = CredentialStore::open_in(home.path());
    (home, store)
}

fn write_raw(home: &Path, contents: &str) {
    let root = credential_root(home);
    fs::create_dir_all(&root).expect("credential root should be created");
    fs::write(root.join(credential_file_name()), contents)
        .expect("credential file should be written");
}

#[test]
fn store_path_lives_under_farha_home_dir() {
    let (home, store) = open_store();

    let expected = home
        .path()
        .join(CREDENTIAL_DIR)
        .join(credential_file_name());
    assert_eq!(store.path(), expected);
}

#[test]
fn get_returns_none_when_never_set() {
    let (_home, store) = open_store();

    assert_eq!(store.get(), None);
    assert!(matches!(store.load(), Ok(None)));
}

#[test]
fn set_then_get_round_trips() {
    let (_home, store) = open_store();

    store.set("token-1").expect("set should succeed");
    assert_eq!(store.get(), Some("token-1".to_string()));

    let record = store
        .load()
        .expect("load should succeed")
        .expect("record should exist");
    assert_eq!(record.version, 1);
    assert_eq!(record.session_token, "token-1");
}

#[test]
fn set_replaces_previous_credential() {
    let (_home, store) = open_store();

    store.set("token-1").expect("first set should succeed");
    store.set("token-2").expect("second set should succeed");

    assert_eq!(store.get(), Some("token-2".to_string()));
}

#[test]
fn set_creates_missing_credential_root() {
    let home = tempfile::tempdir().expect("tempdir should be created");
    let store = CredentialStore::open_in(home.path());
    assert!(!credential_root(home.path()).exists());

    store.set("token-1").expect("set should create the root");
    assert!(store.path().exists());
}

#[test]
fn persisted_record_is_a_single_versioned_json_document() {
    let (_home, store) = open_store();
    store.set("token-1").expect("set should succeed");

    let raw = fs::read_to_string(store.path()).expect("credential file should be readable");
    let record: CredentialRecord =
        serde_json::from_str(&raw).expect("record should deserialize");

    assert_eq!(record, CredentialRecord::v1("token-1", record.updated_at.clone()));
}

#[test]
fn get_fails_open_on_malformed_json() {
    let (home, store) = open_store();
    write_raw(home.path(), "{ this is invalid json");

    assert_eq!(store.get(), None);
    let error = store.load().expect_err("malformed record must fail strict load");
    assert!(matches!(error, CredentialStoreError::JsonParse { .. }));
}

#[test]
fn get_fails_open_on_unknown_fields() {
    let (home, store) = open_store();
    write_raw(
        home.path(),
        &json!({
            "type": "credential",
            "version": 1,
            "session_token": "token-1",
            "updated_at": "2026-02-14T00:00:00Z",
            "unexpected": true,
        })
        .to_string(),
    );

    assert_eq!(store.get(), None);
    let error = store.load().expect_err("unknown field must fail strict load");
    assert!(matches!(error, CredentialStoreError::JsonParse { .. }));
}

#[test]
fn get_fails_open_on_unsupported_version() {
    let (home, store) = open_store();
    write_raw(
        home.path(),
        &json!({
            "type": "credential",
            "version": 2,
            "session_token": "token-1",
            "updated_at": "2026-02-14T00:00:00Z",
        })
        .to_string(),
    );

    assert_eq!(store.get(), None);
    let error = store
        .load()
        .expect_err("unsupported version must fail strict load");
    assert!(matches!(
        error,
        CredentialStoreError::UnsupportedVersion { found: 2, .. }
    ));
}

#[test]
fn get_fails_open_on_invalid_timestamp() {
    let (home, store) = open_store();
    write_raw(
        home.path(),
        &json!({
            "type": "credential",
            "version": 1,
            "session_token": "token-1",
            "updated_at": "yesterday",
        })
        .to_string(),
    );

    assert_eq!(store.get(), None);
    let error = store
        .load()
        .expect_err("invalid timestamp must fail strict load");
    assert!(matches!(error, CredentialStoreError::InvalidTimestamp { .. }));
}

#[test]
fn remove_deletes_the_slot_and_is_idempotent() {
    let (_home, store) = open_store();
    store.set("token-1").expect("set should succeed");

    store.remove().expect("remove should succeed");
    assert_eq!(store.get(), None);
    assert!(!store.path().exists());

    store
        .remove()
        .expect("removing an already-empty slot should succeed");
}
