//! Integration tests for the encrypted document store
//!
//! Covers the on-disk token, fail-soft loading and the plaintext migration
//! helpers.

mod support;

use std::fs;

use exitpass_common::DataKey;
use exitpass_domain::{RosterDocument, StudentRecord, TimetableDocument};
use exitpass_infra::{SecureStore, StoreLoad, UnavailableReason};
use support::{TestDataDir, TIMETABLE_EXPORT};

fn roster() -> RosterDocument {
    vec![StudentRecord {
        id: "1".into(),
        name: "Ana Pérez".into(),
        group: "1A".into(),
        ..StudentRecord::default()
    }]
}

#[test]
fn test_saved_document_loads_back_with_same_key() {
    let data = TestDataDir::new();
    let path = data.file("students.json");

    data.store().save(&path, &roster()).unwrap();

    // A second store built from the same key reads it, as after a restart.
    let loaded: StoreLoad<RosterDocument> = data.store().load(&path);
    assert_eq!(loaded.document(), Some(&roster()));
}

#[test]
fn test_wrong_key_degrades_to_empty_document() {
    let data = TestDataDir::new();
    let path = data.file("students.json");
    data.store().save(&path, &roster()).unwrap();

    let other = SecureStore::new(&DataKey::generate()).unwrap();
    let loaded: StoreLoad<RosterDocument> = other.load(&path);

    assert_eq!(loaded.unavailable_reason(), Some(UnavailableReason::Decrypt));
    assert!(loaded.into_document().is_empty());
}

#[test]
fn test_missing_and_zero_byte_files_are_distinguished() {
    let data = TestDataDir::new();
    let store = data.store();

    let missing: StoreLoad<RosterDocument> = store.load(data.file("absent.json"));
    assert!(matches!(missing, StoreLoad::Missing));

    let empty_path = data.file("empty.json");
    fs::write(&empty_path, b"").unwrap();
    let empty: StoreLoad<RosterDocument> = store.load(&empty_path);
    assert!(matches!(empty, StoreLoad::Empty));
}

#[test]
fn test_tampered_token_is_rejected() {
    let data = TestDataDir::new();
    let path = data.file("students.json");
    data.store().save(&path, &roster()).unwrap();

    let mut token = fs::read(&path).unwrap();
    let mid = token.len() / 2;
    token[mid] = if token[mid] == b'A' { b'B' } else { b'A' };
    fs::write(&path, token).unwrap();

    let loaded: StoreLoad<RosterDocument> = data.store().load(&path);
    assert!(loaded.is_unavailable());
}

#[test]
fn test_decrypted_garbage_is_a_parse_failure() {
    let data = TestDataDir::new();
    let path = data.file("students.json");
    data.store().save(&path, &"not a roster").unwrap();

    let loaded: StoreLoad<RosterDocument> = data.store().load(&path);
    assert_eq!(loaded.unavailable_reason(), Some(UnavailableReason::Parse));
}

#[test]
fn test_save_keeps_previous_ciphertext_as_backup() {
    let data = TestDataDir::new();
    let store = data.store();
    let path = data.file("students.json");

    store.save(&path, &roster()).unwrap();
    let first = fs::read(&path).unwrap();
    store.save(&path, &RosterDocument::new()).unwrap();

    assert_eq!(fs::read(data.file("students.json.bak")).unwrap(), first);
    assert!(!data.file("students.json.tmp").exists());
}

#[test]
fn test_backups_can_be_disabled() {
    let data = TestDataDir::new();
    let store = SecureStore::new(&data.key).unwrap().with_backups(false);
    let path = data.file("students.json");

    store.save(&path, &roster()).unwrap();
    store.save(&path, &roster()).unwrap();

    assert!(!data.file("students.json.bak").exists());
}

#[test]
fn test_plaintext_export_migrates_in_place() {
    let data = TestDataDir::new();
    let store = data.store();
    let path = data.file("horarios.json");
    fs::write(&path, TIMETABLE_EXPORT).unwrap();

    store.encrypt_plain_file(&path).unwrap();

    assert!(!data.file("horarios.json.bak").exists(), "plaintext copy must not outlive the swap");
    assert!(!fs::read_to_string(&path).unwrap().contains("Marta"));
    let loaded: StoreLoad<TimetableDocument> = store.load(&path);
    assert_eq!(loaded.into_document().len(), 2);

    store.decrypt_to_plain_file(&path).unwrap();
    let plain = fs::read_to_string(&path).unwrap();
    assert!(plain.contains("Marta García"));
    assert!(data.file("horarios.json.enc.bak").exists());
}

#[test]
fn test_encrypting_invalid_json_leaves_file_untouched() {
    let data = TestDataDir::new();
    let path = data.file("horarios.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(data.store().encrypt_plain_file(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_encrypting_over_an_old_backup_leaves_no_plaintext_behind() {
    let data = TestDataDir::new();
    let store = data.store();
    let path = data.file("horarios.json");
    fs::write(data.file("horarios.json.bak"), "stale").unwrap();
    fs::write(&path, TIMETABLE_EXPORT).unwrap();

    store.encrypt_plain_file(&path).unwrap();

    let names: Vec<_> = fs::read_dir(data.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["horarios.json".to_string()]);
    for name in &names {
        assert!(!fs::read_to_string(data.file(name)).unwrap().contains("García"));
    }
}

#[test]
fn test_legacy_fernet_document_loads_and_is_upgraded_on_save() {
    let data = TestDataDir::new();
    let key = DataKey::from_base64("AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=").unwrap();
    let store = SecureStore::new(&key).unwrap();
    let path = data.file("horarios_profesores_limpio.json");
    fs::write(
        &path,
        concat!(
            "gAAAAABq1kZAX9dBPYKc5PB4EWeGf3359C_mRrdUWrXhxvryKo8lr8Zcw4B93wiLw8Th",
            "czZ3MJiDMdO8vKpEOBm1u7i-xFcrbL1g_trIP2xOOm8el6EtW3GC9Y9HxP0KNefgk0mc",
            "LmL_OSAYqdjiP5ZZyINFnshV4pPolRm_6lX77-4JNDkEIe8=",
        ),
    )
    .unwrap();

    let loaded: StoreLoad<TimetableDocument> = store.load(&path);
    let document = loaded.into_document();
    assert_eq!(document.len(), 1);
    assert_eq!(document[0].name, "Eva Ruiz");
    assert_eq!(document[0].teacher_id, "9");

    store.save(&path, &document).unwrap();
    assert!(!fs::read_to_string(&path).unwrap().starts_with("gAAAAA"));
    let reloaded: StoreLoad<TimetableDocument> = store.load(&path);
    assert_eq!(reloaded.into_document(), document);
}
