//! Local fallback store.
//!
//! DESIGN
//! ======
//! The persistence gateway degrades to durable client-side storage when
//! the portal API is unreachable. Storage is modeled as an injected
//! `KeyValue` dependency — `localStorage` in the browser, an in-memory
//! map under test — so the fallback algorithms in [`fallback`] stay pure
//! and runnable on any target.

pub mod fallback;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the resource library snapshot.
pub const RESOURCES_KEY: &str = "cohort_resources_db";
/// Storage key for the reputation snapshot.
pub const REPUTATION_KEY: &str = "cohort_reputation_db";
/// Storage key for the project progress snapshot.
pub const PROGRESS_KEY: &str = "cohort_progress_db";

/// String key-value storage. Writes are best-effort: a full or
/// unavailable backing store loses the write, matching `localStorage`.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// In-memory `KeyValue` used by tests and as an SSR stand-in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `KeyValue` over the browser's `localStorage`. Requires a browser
/// environment; every access degrades to a no-op when the window or
/// storage is unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl KeyValue for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl KeyValue for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}
