//! Application configuration

use app_platform::Platform;
use app_state::{LanguageControllerConfig, ThemeControllerConfig};
use std::path::PathBuf;
use storage::KvConfig;

/// Directory holding the preference database
pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";

/// Log filter directives (`info`, `app_state=debug`)
pub const ENV_LOG: &str = "STOREFRONT_LOG";

/// Device locale reported by the platform (`vi-VN`)
pub const ENV_LOCALE: &str = "STOREFRONT_LOCALE";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Preference database
    pub kv: KvConfig,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Host platform; drives token values of [`Storefront::tokens`] and
    /// of every theme the theme controller resolves
    ///
    /// [`Storefront::tokens`]: crate::Storefront::tokens
    pub platform: Platform,
    /// Theme controller settings
    pub theme: ThemeControllerConfig,
    /// Language controller settings, including the device locale
    pub language: LanguageControllerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            kv: KvConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            platform: Platform::current(),
            theme: ThemeControllerConfig::default(),
            language: LanguageControllerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from `STOREFRONT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.kv = KvConfig::new(PathBuf::from(dir).join("preferences"));
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(locale) = lookup(ENV_LOCALE) {
            config.language = config.language.device_locale(locale);
        }

        config
    }

    /// Use a temporary preference database
    pub fn ephemeral(mut self) -> Self {
        self.kv = KvConfig::temporary();
        self
    }

    /// Set the preference database configuration
    pub fn kv(mut self, kv: KvConfig) -> Self {
        self.kv = kv;
        self
    }

    /// Set the platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.language.device_locale, None);
        assert_eq!(config.kv.path, KvConfig::default().path);
        assert_eq!(config.theme.storage_key, storage::keys::THEME_MODE);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/var/lib/storefront"),
            (ENV_LOG, "app_state=debug"),
            (ENV_LOCALE, "vi-VN"),
        ]));

        assert_eq!(config.kv.path, PathBuf::from("/var/lib/storefront/preferences"));
        assert_eq!(config.log_filter, "app_state=debug");
        assert_eq!(config.language.device_locale.as_deref(), Some("vi-VN"));
    }

    #[test]
    fn test_empty_values_ignored() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_LOG, "  "), (ENV_LOCALE, "")]));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.language.device_locale, None);
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default().ephemeral().platform(Platform::Android);
        assert!(config.kv.temporary);
        assert_eq!(config.platform, Platform::Android);
    }
}
