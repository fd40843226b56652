//! Key-value persistence
//!
//! LocalStorage on web, in-memory elsewhere. Both directions are total:
//! reads resolve to `None` on any failure (missing key, corrupt JSON,
//! storage disabled in private browsing) and writes are dropped when the
//! backend refuses them. The page degrades to its default behavior under
//! any storage fault, so nothing here returns a `Result`.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Keys are namespaced under this prefix to stay clear of unrelated
/// entries on the same origin.
pub const KEY_PREFIX: &str = "__mt_db_";

/// Raw string storage. Implementations must swallow their own errors.
pub trait KvStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, raw: &str);
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, raw: &str) {
        (**self).write(key, raw);
    }
}

/// JSON codec over a `KvStore`, with the fixed key prefix applied
pub struct Db<S: KvStore> {
    backend: S,
}

impl<S: KvStore> Db<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    fn scoped(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }

    /// Read and decode a value. Any failure reads as "not there".
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.read(&Self::scoped(key))?;
        serde_json::from_str(&raw).ok()
    }

    /// Encode and store a value. Failures are dropped.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.backend.write(&Self::scoped(key), &raw);
        }
    }
}

/// Browser LocalStorage backend
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KvStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, raw: &str) {
        if let Some(storage) = Self::storage() {
            // Quota or privacy-mode failures are not the page's problem.
            let _ = storage.set_item(key, raw);
        }
    }
}

/// In-memory backend for native builds and tests
#[derive(Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }
}
