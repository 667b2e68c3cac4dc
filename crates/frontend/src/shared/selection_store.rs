//! "Currently selected" caches for edit pages that have no fetch-by-id
//! endpoint. The list page stores the clicked row, the edit page reads it.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage;

/// A typed localStorage slot holding one selected record
pub struct SelectionStore<T> {
    key: &'static str,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> SelectionStore<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn select(&self, value: &T) {
        storage::save(self.key, value);
    }

    pub fn selected(&self) -> Option<T> {
        storage::load(self.key)
    }

    pub fn clear(&self) {
        storage::remove(self.key);
    }
}
