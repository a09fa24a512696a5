//! Theme and style system for Storefront
//!
//! This crate provides the design tokens, the two canonical themes, the
//! theme-scoped style cache and the component variant tables.
//!
//! # Modules
//!
//! - [`tokens`] - Design tokens (palette, spacing, gap, typography, radii, shadows, flex presets)
//! - [`theme`] - Light and dark themes and mode resolution
//! - [`style`] - Style values, compiled styles and the per-theme style cache
//! - [`theme_styles`] - Base styles and [`StyleUtils`]
//! - [`typography`] - Text variants and weights
//! - [`variants`] - Button variants and the [`ThemeVariant`] trait
//!
//! # Example
//!
//! ```rust
//! use app_ui::style::{StyleObject, StyleProperty, StyleProps};
//! use app_ui::theme::{resolve, ThemeMode};
//! use app_ui::theme_styles::StyleUtils;
//!
//! let utils = StyleUtils::new(resolve(ThemeMode::Dark));
//! let styles = utils
//!     .create_themed_style(|theme| {
//!         StyleObject::new().style(
//!             "card",
//!             StyleProps::new().with(StyleProperty::BackgroundColor, &theme.colors.card),
//!         )
//!     })
//!     .unwrap();
//! assert!(styles.get("card").is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod style;
pub mod theme;
pub mod theme_styles;
pub mod tokens;
pub mod typography;
pub mod variants;

// Re-export commonly used types
pub use style::{
    create_component_styles, CacheStats, CompiledStyle, StyleCache, StyleError, StyleHandle,
    StyleObject, StyleProperty, StyleProps, StyleValue,
};

pub use theme::{
    build_theme, dark_theme, light_theme, resolve, resolve_for, resolve_str, Color, ColorName,
    InvalidModeError, Theme, ThemeColors, ThemeMode,
};

pub use theme_styles::{base_styles, StyleUtils};

pub use tokens::{SizeKey, SizeScale, TokenRegistry};

pub use typography::{text_props, typography_styles, FontWeight, TextOptions, TextStyle, TypographyVariant};

pub use variants::{button_container, ButtonSize, ButtonVariant, ThemeVariant};
