use super::*;

#[test]
fn missing_key_reads_as_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn set_overwrites_previous_value() {
    let mut store = MemoryStore::with_entry("theme", "light");
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.peek("theme"), Some("dark"));
}

#[test]
fn unavailable_store_fails_both_ways() {
    let mut store = MemoryStore::unavailable();
    assert_eq!(store.get("theme"), Err(StorageError::Unavailable));
    assert_eq!(store.set("theme", "dark"), Err(StorageError::Unavailable));
    assert_eq!(store.peek("theme"), None);
}

#[test]
fn default_store_is_empty_and_available() {
    assert_eq!(MemoryStore::default().get("theme"), Ok(None));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(StorageError::Write("quota".to_owned()).to_string(), "storage write failed: quota");
}
