//! Persisted user preferences
//!
//! [`PreferenceStore`] is the async string key-value interface the
//! lifecycle controllers persist through. Every operation is fallible;
//! callers decide whether a failure matters.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::kv::{DeviceStore, KvError};

/// Preference store error types
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Underlying key-value store failed
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Blocking storage task panicked or was cancelled
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Backend not reachable
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for preference operations
pub type Result<T> = std::result::Result<T, PreferenceError>;

/// Async durable key-value store for preferences
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value; `None` when never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value
    async fn remove(&self, key: &str) -> Result<()>;
}

// =============================================================================
// Implementations
// =============================================================================

/// Preference store persisted in the device scope of the kv store
///
/// sled calls are blocking, so each operation runs on the blocking pool.
#[derive(Debug, Clone)]
pub struct DevicePreferenceStore {
    device: DeviceStore,
}

impl DevicePreferenceStore {
    /// Wrap a device store
    pub fn new(device: DeviceStore) -> Self {
        Self { device }
    }
}

#[async_trait]
impl PreferenceStore for DevicePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let device = self.device.clone();
        let key = key.to_string();
        let value = tokio::task::spawn_blocking(move || device.get::<String>(&key)).await??;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let device = self.device.clone();
        let key = key.to_string();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || device.set(&key, &value)).await??;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let device = self.device.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || device.remove(&key)).await??;
        Ok(())
    }
}

/// Preference store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with values
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = values.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values: RwLock::new(values) }
    }

    /// Synchronous peek, for inspection
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

// =============================================================================
// Color Mode
// =============================================================================

/// Error for an unrecognized persisted color mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color mode: {0:?}")]
pub struct UnknownColorMode(pub String);

/// Persisted theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the OS color scheme
    #[default]
    System,
    /// Always light
    Light,
    /// Always dark
    Dark,
}

impl ColorMode {
    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::System => "system",
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Whether this preference follows the OS
    pub fn is_system(&self) -> bool {
        matches!(self, ColorMode::System)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ColorMode::System),
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(UnknownColorMode(s.to_string())),
        }
    }
}
