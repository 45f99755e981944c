use super::*;

#[test]
fn memory_store_scopes_are_independent() {
    let store = MemoryStore::new();
    store.set(StorageScope::Ephemeral, "token", "abc").unwrap();
    assert_eq!(store.get(StorageScope::Ephemeral, "token").as_deref(), Some("abc"));
    assert_eq!(store.get(StorageScope::Durable, "token"), None);
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::new().with(StorageScope::Durable, "favorites", "[]");
    store.remove(StorageScope::Durable, "favorites").unwrap();
    store.remove(StorageScope::Durable, "favorites").unwrap();
    assert_eq!(store.get(StorageScope::Durable, "favorites"), None);
}

#[test]
fn clear_scope_only_drops_that_scope() {
    let store = MemoryStore::new()
        .with(StorageScope::Ephemeral, "token", "abc")
        .with(StorageScope::Durable, "favorites", "[]");
    store.clear_scope(StorageScope::Ephemeral);
    assert_eq!(store.get(StorageScope::Ephemeral, "token"), None);
    assert_eq!(store.get(StorageScope::Durable, "favorites").as_deref(), Some("[]"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_unavailable_outside_browser() {
    let store = BrowserStore;
    assert_eq!(store.get(StorageScope::Durable, "favorites"), None);
    assert_eq!(
        store.set(StorageScope::Ephemeral, "token", "x"),
        Err(StorageError::Unavailable(StorageScope::Ephemeral))
    );
}

#[test]
fn storage_error_messages_name_scope_and_key() {
    let err = StorageError::Rejected {
        scope: StorageScope::Durable,
        key: "favorites".to_owned(),
        reason: "QuotaExceededError".to_owned(),
    };
    assert_eq!(err.to_string(), "Durable storage rejected write to favorites: QuotaExceededError");
}
