//! Key-value store for device preferences
//!
//! A thin layer over sled that stores JSON-encoded values under
//! `:`-separated scoped keys (`device:theme_mode`).

use serde::{de::DeserializeOwned, Serialize};
use sled::Db;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Separator between key scopes
pub const SCOPE_SEPARATOR: char = ':';

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Empty key segment or a segment containing the separator
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database directory
    pub path: PathBuf,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None flushes only on demand)
    pub flush_every_ms: Option<u64>,
    /// Use a temporary database removed on drop
    pub temporary: bool,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("storefront_kv.db"),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
            temporary: false,
        }
    }
}

impl KvConfig {
    /// Create a configuration for a database directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Configuration for a temporary, in-memory database
    pub fn temporary() -> Self {
        Self { temporary: true, flush_every_ms: None, ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Join scope segments into a single key
pub fn scoped_key(scopes: &[&str]) -> Result<String> {
    if scopes.is_empty() {
        return Err(KvError::InvalidKey(String::new()));
    }
    for segment in scopes {
        if segment.is_empty() || segment.contains(SCOPE_SEPARATOR) {
            return Err(KvError::InvalidKey(segment.to_string()));
        }
    }
    Ok(scopes.join(":"))
}

/// Key-value store backed by sled
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open a store with configuration
    pub fn open(config: &KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms);

        db_config = if config.temporary {
            db_config.temporary(true)
        } else {
            db_config.path(&config.path)
        };

        let db = db_config.open()?;
        tracing::debug!(path = %config.path.display(), temporary = config.temporary, "opened kv store");

        Ok(Self { db: Arc::new(db) })
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        Self::open(&KvConfig::temporary())
    }

    /// Get a value by scoped key
    pub fn get<T>(&self, scopes: &[&str]) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let key = scoped_key(scopes)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value by scoped key
    pub fn set<T>(&self, scopes: &[&str], value: &T) -> Result<()>
    where
        T: Serialize,
    {
        let key = scoped_key(scopes)?;
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), bytes)?;
        Ok(())
    }

    /// Remove a value by scoped key; returns whether it existed
    pub fn remove(&self, scopes: &[&str]) -> Result<bool> {
        let key = scoped_key(scopes)?;
        Ok(self.db.remove(key.as_bytes())?.is_some())
    }

    /// Check if a scoped key exists
    pub fn contains(&self, scopes: &[&str]) -> Result<bool> {
        let key = scoped_key(scopes)?;
        Ok(self.db.contains_key(key.as_bytes())?)
    }

    /// Keys under a scope prefix
    pub fn keys_in_scope(&self, scopes: &[&str]) -> Result<Vec<String>> {
        let prefix = format!("{}{}", scoped_key(scopes)?, SCOPE_SEPARATOR);
        let mut keys = Vec::new();

        for item in self.db.scan_prefix(prefix.as_bytes()) {
            let (key, _) = item?;
            if let Ok(key) = String::from_utf8(key.to_vec()) {
                keys.push(key);
            }
        }

        Ok(keys)
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore").field("len", &self.len()).finish()
    }
}

/// Scoped key-value store for device-level settings
#[derive(Debug, Clone)]
pub struct DeviceStore {
    kv: KvStore,
}

impl DeviceStore {
    /// Scope prefix for device-level keys
    pub const SCOPE: &'static str = "device";

    /// Create a new device store
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Get a device-level value
    pub fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.kv.get(&[Self::SCOPE, key])
    }

    /// Set a device-level value
    pub fn set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize,
    {
        self.kv.set(&[Self::SCOPE, key], value)
    }

    /// Remove a device-level value
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.kv.remove(&[Self::SCOPE, key])
    }

    /// Check if a device-level key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        self.kv.contains(&[Self::SCOPE, key])
    }

    /// Flush pending writes
    pub fn flush(&self) -> Result<()> {
        self.kv.flush()
    }

    /// Underlying store
    pub fn kv(&self) -> &KvStore {
        &self.kv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Window {
        width: u32,
        height: u32,
    }

    #[test]
    fn test_scoped_key() {
        assert_eq!(scoped_key(&["device", "theme_mode"]).unwrap(), "device:theme_mode");
        assert!(matches!(scoped_key(&[]), Err(KvError::InvalidKey(_))));
        assert!(matches!(scoped_key(&["device", ""]), Err(KvError::InvalidKey(_))));
        assert!(matches!(scoped_key(&["device", "a:b"]), Err(KvError::InvalidKey(_))));
    }

    #[test]
    fn test_set_and_get() {
        let store = KvStore::in_memory().unwrap();
        store.set(&["device", "theme_mode"], &"dark").unwrap();

        let value: Option<String> = store.get(&["device", "theme_mode"]).unwrap();
        assert_eq!(value.as_deref(), Some("dark"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_and_get_struct() {
        let store = KvStore::in_memory().unwrap();
        let window = Window { width: 390, height: 844 };
        store.set(&["device", "window"], &window).unwrap();

        let loaded: Option<Window> = store.get(&["device", "window"]).unwrap();
        assert_eq!(loaded, Some(window));
    }

    #[test]
    fn test_get_nonexistent() {
        let store = KvStore::in_memory().unwrap();
        let value: Option<String> = store.get(&["device", "missing"]).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_type_mismatch_is_serialization_error() {
        let store = KvStore::in_memory().unwrap();
        store.set(&["device", "count"], &"not a number").unwrap();

        let result: Result<Option<u32>> = store.get(&["device", "count"]);
        assert!(matches!(result, Err(KvError::Serialization(_))));
    }

    #[test]
    fn test_remove_and_contains() {
        let store = KvStore::in_memory().unwrap();
        store.set(&["device", "key"], &1).unwrap();
        assert!(store.contains(&["device", "key"]).unwrap());

        assert!(store.remove(&["device", "key"]).unwrap());
        assert!(!store.remove(&["device", "key"]).unwrap());
        assert!(!store.contains(&["device", "key"]).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_keys_in_scope() {
        let store = KvStore::in_memory().unwrap();
        store.set(&["device", "a"], &1).unwrap();
        store.set(&["device", "b"], &2).unwrap();
        store.set(&["devices", "c"], &3).unwrap();

        let mut keys = store.keys_in_scope(&["device"]).unwrap();
        keys.sort();
        assert_eq!(keys, vec!["device:a", "device:b"]);
    }

    #[test]
    fn test_device_store() {
        let device = DeviceStore::new(KvStore::in_memory().unwrap());

        device.set("theme_mode", &"light").unwrap();
        assert!(device.contains("theme_mode").unwrap());
        assert!(device.kv().contains(&["device", "theme_mode"]).unwrap());

        let value: Option<String> = device.get("theme_mode").unwrap();
        assert_eq!(value.as_deref(), Some("light"));

        assert!(device.remove("theme_mode").unwrap());
        assert!(!device.contains("theme_mode").unwrap());
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = KvConfig::new(dir.path().join("kv")).flush_every_ms(None);

        {
            let store = KvStore::open(&config).unwrap();
            store.set(&["device", "app_language"], &"vi").unwrap();
            store.flush().unwrap();
        }

        let store = KvStore::open(&config).unwrap();
        let value: Option<String> = store.get(&["device", "app_language"]).unwrap();
        assert_eq!(value.as_deref(), Some("vi"));
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("/tmp/prefs")
            .cache_capacity(1024)
            .use_compression(false)
            .flush_every_ms(Some(100));

        assert_eq!(config.path, PathBuf::from("/tmp/prefs"));
        assert_eq!(config.cache_capacity, 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, Some(100));
        assert!(!config.temporary);
        assert!(KvConfig::temporary().temporary);
    }
}
