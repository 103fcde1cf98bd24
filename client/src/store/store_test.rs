use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert!(store.get("k").is_none());
    store.set("k", "v1");
    assert_eq!(store.get("k").as_deref(), Some("v1"));
    store.set("k", "v2");
    assert_eq!(store.get("k").as_deref(), Some("v2"));
}

#[test]
fn memory_store_keys_are_independent() {
    let store = MemoryStore::new();
    store.set(RESOURCES_KEY, "[]");
    assert!(store.get(REPUTATION_KEY).is_none());
    assert!(store.get(PROGRESS_KEY).is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_off_browser() {
    let store = BrowserStore;
    store.set("k", "v");
    assert!(store.get("k").is_none());
}
