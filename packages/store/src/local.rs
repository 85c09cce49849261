//! # Browser `localStorage` backend
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the web
//! platform. Session keys land in the browser's `localStorage`, so they
//! survive reloads and tabs share one session.
//!
//! All methods swallow storage errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! session" rather than crashing the app; the server remains the authority
//! on whether a token is still valid.

use crate::kv::KeyValueStore;

/// `localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
