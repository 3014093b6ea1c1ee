//! Local persistence for the visitor's language preference.
//!
//! The preference is a single key-value cell. It is modeled as a capability
//! trait so the browser-backed store can be swapped for an in-memory fake in
//! tests (and on non-wasm builds, where no localStorage exists).

use std::sync::Mutex;

/// Fixed key under which the last chosen language code is stored.
pub const STORAGE_KEY: &str = "dpita-language";

/// One external key-value slot holding a language code string.
///
/// Both operations degrade silently: an unreadable or unwritable store is
/// treated the same as an empty one.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, code: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self) -> Option<String> {
        (**self).load()
    }
    fn save(&self, code: &str) {
        (**self).save(code)
    }
}

/// In-memory store, used by tests and as the native fallback.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, handy for precedence tests.
    pub fn with_value(code: &str) -> Self {
        Self {
            slot: Mutex::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, code: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(code.to_string());
        }
    }
}

/// Browser localStorage-backed store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }

    fn save(&self, code: &str) {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.set_item(STORAGE_KEY, code);
        }
    }
}

/// The preference store for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn preference_store() -> impl PreferenceStore {
    LocalStorageStore
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preference_store() -> impl PreferenceStore {
    static NATIVE_STORE: once_cell::sync::Lazy<MemoryStore> =
        once_cell::sync::Lazy::new(MemoryStore::new);
    &*NATIVE_STORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save("fr");
        assert_eq!(store.load().as_deref(), Some("fr"));
        store.save("es");
        assert_eq!(store.load().as_deref(), Some("es"));
    }
}
