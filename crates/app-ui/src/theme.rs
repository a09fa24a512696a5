//! Themes for the storefront
//!
//! This module composes the design tokens into the two canonical themes,
//! light and dark, and resolves a [`ThemeMode`] to its theme.
//!
//! Both themes share every key at every level; only values differ. A
//! style descriptor written against one theme is therefore valid against
//! the other.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{resolve, ColorName, ThemeMode};
//!
//! let theme = resolve(ThemeMode::Dark);
//! assert!(theme.is_dark());
//! let background = theme.colors.get(ColorName::Background);
//! assert_eq!(background, "#111827");
//! ```

use app_platform::{ColorScheme, Platform};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::tokens::{
    palette, RadiusScale, Shadows, SizeScale, TokenRegistry, TypographyTokens,
};

// =============================================================================
// Color Types
// =============================================================================

/// A color value: hex (`#RRGGBB`), `rgba(...)` or a keyword
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() < 6 || !hex.is_char_boundary(6) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Unrecognized theme mode
///
/// Raised when a mode string names neither `light` nor `dark`. This is a
/// programming error; callers must not substitute a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid theme mode: {0:?}")]
pub struct InvalidModeError(pub String);

/// Theme mode tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// Both modes
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Whether this is the dark mode
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The opposite mode
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(InvalidModeError(s.to_string())),
        }
    }
}

impl From<ColorScheme> for ThemeMode {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemeMode::Light,
            ColorScheme::Dark => ThemeMode::Dark,
        }
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Semantic color names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorName {
    /// white
    White,
    /// black
    Black,
    /// transparent
    Transparent,
    /// background
    Background,
    /// surface
    Surface,
    /// surfaceHover
    SurfaceHover,
    /// surfacePressed
    SurfacePressed,
    /// text
    Text,
    /// textSecondary
    TextSecondary,
    /// textDisabled
    TextDisabled,
    /// textInverse
    TextInverse,
    /// border
    Border,
    /// borderFocus
    BorderFocus,
    /// primary
    Primary,
    /// primaryLight
    PrimaryLight,
    /// primaryPressed
    PrimaryPressed,
    /// primaryDisabled
    PrimaryDisabled,
    /// success
    Success,
    /// warning
    Warning,
    /// error
    Error,
    /// errorLight
    ErrorLight,
    /// info
    Info,
    /// card
    Card,
    /// cardPressed
    CardPressed,
    /// overlay
    Overlay,
    /// shadow
    Shadow,
}

impl ColorName {
    /// Every semantic color
    pub const ALL: [ColorName; 26] = [
        ColorName::White,
        ColorName::Black,
        ColorName::Transparent,
        ColorName::Background,
        ColorName::Surface,
        ColorName::SurfaceHover,
        ColorName::SurfacePressed,
        ColorName::Text,
        ColorName::TextSecondary,
        ColorName::TextDisabled,
        ColorName::TextInverse,
        ColorName::Border,
        ColorName::BorderFocus,
        ColorName::Primary,
        ColorName::PrimaryLight,
        ColorName::PrimaryPressed,
        ColorName::PrimaryDisabled,
        ColorName::Success,
        ColorName::Warning,
        ColorName::Error,
        ColorName::ErrorLight,
        ColorName::Info,
        ColorName::Card,
        ColorName::CardPressed,
        ColorName::Overlay,
        ColorName::Shadow,
    ];
}

/// Semantic colors of a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    // Base
    /// Pure white
    pub white: Color,
    /// Pure black
    pub black: Color,
    /// Fully transparent
    pub transparent: Color,

    // Backgrounds
    /// Screen background
    pub background: Color,
    /// Raised surface
    pub surface: Color,
    /// Surface under a hovering pointer
    pub surface_hover: Color,
    /// Surface while pressed
    pub surface_pressed: Color,

    // Text
    /// Body text
    pub text: Color,
    /// Secondary text
    pub text_secondary: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Text on primary-colored backgrounds
    pub text_inverse: Color,

    // Borders
    /// Default border
    pub border: Color,
    /// Focused input border
    pub border_focus: Color,

    // Actions
    /// Primary action
    pub primary: Color,
    /// Tinted primary background
    pub primary_light: Color,
    /// Pressed primary action
    pub primary_pressed: Color,
    /// Disabled primary action
    pub primary_disabled: Color,

    // Status
    /// Success
    pub success: Color,
    /// Warning
    pub warning: Color,
    /// Error
    pub error: Color,
    /// Tinted error background
    pub error_light: Color,
    /// Informational
    pub info: Color,

    // Components
    /// Card background
    pub card: Color,
    /// Pressed card background
    pub card_pressed: Color,
    /// Modal scrim
    pub overlay: Color,
    /// Shadow color
    pub shadow: Color,
}

impl ThemeColors {
    /// Color for a semantic name
    pub fn get(&self, name: ColorName) -> &str {
        match name {
            ColorName::White => &self.white,
            ColorName::Black => &self.black,
            ColorName::Transparent => &self.transparent,
            ColorName::Background => &self.background,
            ColorName::Surface => &self.surface,
            ColorName::SurfaceHover => &self.surface_hover,
            ColorName::SurfacePressed => &self.surface_pressed,
            ColorName::Text => &self.text,
            ColorName::TextSecondary => &self.text_secondary,
            ColorName::TextDisabled => &self.text_disabled,
            ColorName::TextInverse => &self.text_inverse,
            ColorName::Border => &self.border,
            ColorName::BorderFocus => &self.border_focus,
            ColorName::Primary => &self.primary,
            ColorName::PrimaryLight => &self.primary_light,
            ColorName::PrimaryPressed => &self.primary_pressed,
            ColorName::PrimaryDisabled => &self.primary_disabled,
            ColorName::Success => &self.success,
            ColorName::Warning => &self.warning,
            ColorName::Error => &self.error,
            ColorName::ErrorLight => &self.error_light,
            ColorName::Info => &self.info,
            ColorName::Card => &self.card,
            ColorName::CardPressed => &self.card_pressed,
            ColorName::Overlay => &self.overlay,
            ColorName::Shadow => &self.shadow,
        }
    }

    /// Every (name, color) pair
    pub fn iter(&self) -> impl Iterator<Item = (ColorName, &str)> {
        ColorName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Mode tag
    pub mode: ThemeMode,
    /// Semantic colors
    pub colors: ThemeColors,
    /// Padding/margin scale
    pub spacing: SizeScale,
    /// Gap scale
    pub gap: SizeScale,
    /// Typography tokens
    pub typography: TypographyTokens,
    /// Border radii
    pub border_radius: RadiusScale,
    /// Shadow fragments
    pub shadows: Shadows,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Color for a semantic name
    pub fn color(&self, name: ColorName) -> &str {
        self.colors.get(name)
    }
}

fn assemble(mode: ThemeMode, colors: ThemeColors, tokens: TokenRegistry) -> Theme {
    Theme {
        mode,
        colors,
        spacing: tokens.spacing,
        gap: tokens.gap,
        typography: tokens.typography,
        border_radius: tokens.border_radius,
        shadows: tokens.shadows,
    }
}

// =============================================================================
// Light Theme
// =============================================================================

fn light_colors() -> ThemeColors {
    ThemeColors {
        white: palette::WHITE.to_string(),
        black: palette::BLACK.to_string(),
        transparent: palette::TRANSPARENT.to_string(),

        background: palette::WHITE.to_string(),
        surface: palette::GRAY_50.to_string(),
        surface_hover: palette::GRAY_100.to_string(),
        surface_pressed: palette::GRAY_200.to_string(),

        text: palette::GRAY_900.to_string(),
        text_secondary: palette::GRAY_600.to_string(),
        text_disabled: palette::GRAY_400.to_string(),
        text_inverse: palette::WHITE.to_string(),

        border: palette::GRAY_200.to_string(),
        border_focus: palette::PRIMARY.to_string(),

        primary: palette::PRIMARY.to_string(),
        primary_light: palette::PRIMARY_LIGHT.to_string(),
        primary_pressed: palette::PRIMARY_DARK.to_string(),
        primary_disabled: palette::PRIMARY_LIGHT.to_string(),

        success: palette::SUCCESS.to_string(),
        warning: palette::WARNING.to_string(),
        error: palette::ERROR.to_string(),
        error_light: palette::ERROR_LIGHT.to_string(),
        info: palette::INFO.to_string(),

        card: palette::WHITE.to_string(),
        card_pressed: palette::GRAY_50.to_string(),
        overlay: palette::OVERLAY.to_string(),
        shadow: palette::SHADOW.to_string(),
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

fn dark_colors() -> ThemeColors {
    ThemeColors {
        background: palette::GRAY_900.to_string(),
        surface: palette::GRAY_800.to_string(),
        surface_hover: palette::GRAY_700.to_string(),
        surface_pressed: palette::GRAY_600.to_string(),

        text: palette::GRAY_50.to_string(),
        text_secondary: palette::GRAY_300.to_string(),
        text_disabled: palette::GRAY_500.to_string(),
        text_inverse: palette::GRAY_900.to_string(),

        border: palette::GRAY_700.to_string(),

        card: palette::GRAY_800.to_string(),
        card_pressed: palette::GRAY_700.to_string(),

        // Base, action and status colors are shared with light
        ..light_colors()
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Build a theme for an explicit platform
///
/// Allocates a fresh theme on every call; use [`resolve`] for the
/// process-wide instances.
pub fn build_theme(mode: ThemeMode, platform: Platform) -> Theme {
    let tokens = TokenRegistry::for_platform(platform);
    match mode {
        ThemeMode::Light => assemble(mode, light_colors(), tokens),
        ThemeMode::Dark => assemble(mode, dark_colors(), tokens),
    }
}

/// One slot per (mode, platform) pair
static THEMES: [OnceLock<Theme>; 8] = [const { OnceLock::new() }; 8];

fn slot(mode: ThemeMode, platform: Platform) -> usize {
    let platform = match platform {
        Platform::Ios => 0,
        Platform::Android => 1,
        Platform::Web => 2,
        Platform::Desktop => 3,
    };
    let mode = match mode {
        ThemeMode::Light => 0,
        ThemeMode::Dark => 4,
    };
    mode + platform
}

/// Process-wide theme for a mode on an explicit platform
///
/// Built on first use; repeated calls return the same instance.
pub fn resolve_for(mode: ThemeMode, platform: Platform) -> &'static Theme {
    THEMES[slot(mode, platform)].get_or_init(|| build_theme(mode, platform))
}

/// Process-wide light theme for the build target
pub fn light_theme() -> &'static Theme {
    resolve(ThemeMode::Light)
}

/// Process-wide dark theme for the build target
pub fn dark_theme() -> &'static Theme {
    resolve(ThemeMode::Dark)
}

/// Get the theme for a mode on the build target's platform
///
/// Total and side-effect free beyond first-use initialization; repeated
/// calls return the same instance.
pub fn resolve(mode: ThemeMode) -> &'static Theme {
    resolve_for(mode, Platform::current())
}

/// Get the theme for a mode name
///
/// Unknown names fail with [`InvalidModeError`]; nothing falls back.
pub fn resolve_str(mode: &str) -> Result<&'static Theme, InvalidModeError> {
    Ok(resolve(mode.parse()?))
}
