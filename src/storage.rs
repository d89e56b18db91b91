//! Key-Value Storage
//!
//! Abstract string store behind the quotation collection.
//! Implementations: browser `localStorage`, in-memory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{QuoteError, QuoteResult};

/// Minimal synchronous key-value store
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key has never been written
    fn get_item(&self, key: &str) -> QuoteResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> QuoteResult<()>;
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> QuoteResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| QuoteError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| QuoteError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| QuoteError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> QuoteResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| QuoteError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> QuoteResult<()> {
        // Quota errors surface here
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| QuoteError::Storage(format!("{:?}", e)))
    }
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
    fail_reads: Arc<Mutex<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, like a full or disabled localStorage
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }

    /// Make every subsequent read fail, like storage blocked by privacy settings
    pub fn set_fail_reads(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_reads.lock() {
            *flag = fail;
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> QuoteResult<Option<String>> {
        if self.fail_reads.lock().map(|f| *f).unwrap_or(false) {
            return Err(QuoteError::Storage("access denied".to_string()));
        }
        let values = self.values.lock().map_err(|e| QuoteError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> QuoteResult<()> {
        if self.fail_writes.lock().map(|f| *f).unwrap_or(false) {
            return Err(QuoteError::Storage("quota exceeded".to_string()));
        }
        let mut values = self.values.lock().map_err(|e| QuoteError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
