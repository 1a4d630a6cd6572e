use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// String-keyed, string-valued persistent storage.
///
/// Writes are synchronous: once `set` returns `Ok`, the value is durable for
/// the backing medium.
pub trait KvStore {
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn delete(&self, key: &str) -> StoreResult<()>;
    fn keys(&self) -> StoreResult<Vec<String>>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }
}

pub struct InMemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for InMemoryStore {
    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .data
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.data
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?
            .remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .data
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))?
            .keys()
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}
