//! JSON values in localStorage.
//!
//! Used for the persisted session and for the "selected entity" caches that
//! carry a row from a list page to its edit page.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn read_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}

/// Stored value, or `None` when missing or unreadable
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = read_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable {key}: {e}");
            remove(key);
            None
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
