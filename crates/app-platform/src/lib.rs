//! Platform integration for the storefront
//!
//! This crate describes the host the app is running on: which platform
//! family it belongs to, what appearance the operating system reports,
//! and the window metrics used by layout tokens.
//!
//! # Modules
//!
//! - [`platform`] - Platform detection
//! - [`appearance`] - OS color scheme and appearance-change events
//! - [`dimensions`] - Window, screen and system bar metrics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appearance;
pub mod dimensions;
pub mod platform;

pub use appearance::{AppearanceChange, AppearanceSource, ColorScheme, SystemAppearance};
pub use dimensions::{Size, WindowMetrics};
pub use platform::Platform;
