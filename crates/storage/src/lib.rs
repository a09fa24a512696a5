//! Storage layer for Storefront
//!
//! This crate provides the sled-backed key-value store and the async
//! preference store the lifecycle controllers persist through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keys;
pub mod kv;
pub mod preferences;

pub use kv::{DeviceStore, KvConfig, KvError, KvStore};
pub use preferences::{
    ColorMode, DevicePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore,
    UnknownColorMode,
};
