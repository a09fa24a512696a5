//! Application state for Storefront
//!
//! This crate owns the process-wide UI state: the active theme and the
//! current UI language. Both controllers load a persisted preference on
//! startup, publish changes on watch channels and persist best-effort.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod language;
pub mod theme;

pub use language::{LanguageController, LanguageControllerConfig};
pub use theme::{
    ActiveTheme, ColorOverride, LifecyclePhase, ThemeController, ThemeControllerConfig,
};
