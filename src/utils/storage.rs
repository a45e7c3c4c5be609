// ============================================================================
// STORAGE - Almacenamiento durable clave/valor (localStorage)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::StorageError;

/// Almacén clave/valor de registros JSON
pub trait KeyValueStore {
    fn load_value(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn save_value(&self, key: &str, value: &Value) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStorage = Rc<dyn KeyValueStore>;

/// localStorage del navegador (vía gloo-storage)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn load_value(&self, key: &str) -> Result<Option<Value>, StorageError> {
        match LocalStorage::get::<Value>(key) {
            Ok(value) => Ok(Some(value)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(e)) => Err(StorageError::Malformed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn save_value(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        LocalStorage::set(key, value).map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::delete(key);
        Ok(())
    }
}

/// Almacén en memoria (tests y entornos sin localStorage)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: Value) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value);
        storage
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn load_value(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save_value(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.values.borrow_mut().insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_to_storage<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_value(value).map_err(|e| StorageError::Malformed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.save_value(key, &json)
}

/// Ok(None) si no existe la clave; Malformed si existe pero no tiene la forma de T
pub fn load_from_storage<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.load_value(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Malformed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}
