//! Storage keys for persisted preferences

/// Theme preference (`system`, `light` or `dark`)
pub const THEME_MODE: &str = "theme_mode";

/// Selected UI language code
pub const APP_LANGUAGE: &str = "app_language";
