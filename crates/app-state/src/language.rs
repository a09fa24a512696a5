//! UI language controller
//!
//! Same lifecycle as the theme controller: load the saved language once,
//! update in memory first on change, persist best-effort. A detected
//! language is saved so later device locale changes do not move the UI.

use i18n::{Language, LanguageError};
use parking_lot::Mutex;
use std::sync::Arc;
use storage::keys;
use storage::preferences::PreferenceStore;
use tokio::sync::watch;

/// Language controller configuration
#[derive(Debug, Clone)]
pub struct LanguageControllerConfig {
    /// Preference store key holding the language code
    pub storage_key: String,
    /// Device locale (`vi-VN`), if the platform reports one
    pub device_locale: Option<String>,
    /// Language used when nothing else matches
    pub fallback: Language,
}

impl Default for LanguageControllerConfig {
    fn default() -> Self {
        Self {
            storage_key: keys::APP_LANGUAGE.to_string(),
            device_locale: None,
            fallback: Language::FALLBACK,
        }
    }
}

impl LanguageControllerConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the device locale
    pub fn device_locale(mut self, locale: impl Into<String>) -> Self {
        self.device_locale = Some(locale.into());
        self
    }

    /// Set the fallback language
    pub fn fallback(mut self, language: Language) -> Self {
        self.fallback = language;
        self
    }
}

/// Owner of the current UI language
#[derive(Clone)]
pub struct LanguageController {
    config: Arc<LanguageControllerConfig>,
    store: Arc<dyn PreferenceStore>,
    state_tx: Arc<watch::Sender<Language>>,
    initialized: Arc<Mutex<bool>>,
}

impl LanguageController {
    /// Create a controller serving the fallback language
    pub fn new(config: LanguageControllerConfig, store: Arc<dyn PreferenceStore>) -> Self {
        let (state_tx, _) = watch::channel(config.fallback);
        Self {
            config: Arc::new(config),
            store,
            state_tx: Arc::new(state_tx),
            initialized: Arc::new(Mutex::new(false)),
        }
    }

    /// Detect the language: saved code, then device locale, then fallback
    ///
    /// A detected language is persisted best-effort. A read failure skips
    /// straight to the fallback and writes nothing. Later calls return the
    /// current language without reading again.
    pub async fn init(&self) -> Language {
        if *self.initialized.lock() {
            return self.current();
        }

        let key = self.config.storage_key.as_str();
        let (language, detected) = match self.store.get(key).await {
            Ok(saved) => match saved.as_deref().and_then(Language::from_code) {
                Some(language) => (language, false),
                None => {
                    let language = self
                        .config
                        .device_locale
                        .as_deref()
                        .and_then(i18n::negotiate)
                        .unwrap_or(self.config.fallback);
                    (language, true)
                }
            },
            Err(error) => {
                tracing::warn!(key, %error, "failed to read language preference");
                (self.config.fallback, false)
            }
        };

        let applied = {
            let mut initialized = self.initialized.lock();
            let applied = !*initialized;
            if applied {
                self.state_tx.send_replace(language);
                *initialized = true;
                tracing::info!(language = %language, detected, "language controller active");
            }
            applied
        };

        if applied && detected {
            if let Err(error) = self.store.set(key, language.code()).await {
                tracing::warn!(key, language = %language, %error, "failed to save detected language");
            }
        }
        self.current()
    }

    /// Switch language, then persist it
    pub async fn change_language(&self, language: Language) -> Language {
        *self.initialized.lock() = true;
        let previous = self.state_tx.send_replace(language);
        if previous != language {
            tracing::debug!(from = %previous, to = %language, "language changed");
        }

        let key = self.config.storage_key.as_str();
        if let Err(error) = self.store.set(key, language.code()).await {
            tracing::warn!(key, language = %language, %error, "failed to persist language preference");
        }
        language
    }

    /// [`change_language`](Self::change_language) from a code; unsupported
    /// codes fail without touching state
    pub async fn change_language_code(&self, code: &str) -> Result<Language, LanguageError> {
        let language = code.parse::<Language>()?;
        Ok(self.change_language(language).await)
    }

    /// The current language
    pub fn current(&self) -> Language {
        *self.state_tx.borrow()
    }

    /// Watch the current language
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.state_tx.subscribe()
    }

    /// Whether `init` or a change has run
    pub fn is_initialized(&self) -> bool {
        *self.initialized.lock()
    }
}

impl std::fmt::Debug for LanguageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageController")
            .field("language", &self.current())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use storage::preferences::{MemoryPreferenceStore, PreferenceError};

    mock! {
        Store {}

        #[async_trait]
        impl PreferenceStore for Store {
            async fn get(&self, key: &str) -> storage::preferences::Result<Option<String>>;
            async fn set(&self, key: &str, value: &str) -> storage::preferences::Result<()>;
            async fn remove(&self, key: &str) -> storage::preferences::Result<()>;
        }
    }

    #[tokio::test]
    async fn test_saved_language_wins() {
        let store = MemoryPreferenceStore::with_values([(keys::APP_LANGUAGE, "vi")]);
        let config = LanguageControllerConfig::new().device_locale("en-US");
        let controller = LanguageController::new(config, Arc::new(store));

        assert!(!controller.is_initialized());
        assert_eq!(controller.current(), Language::En);
        assert_eq!(controller.init().await, Language::Vi);
        assert!(controller.is_initialized());
    }

    #[tokio::test]
    async fn test_device_locale_when_nothing_saved() {
        let config = LanguageControllerConfig::new().device_locale("vi-VN");
        let controller = LanguageController::new(config, Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(controller.init().await, Language::Vi);
    }

    #[tokio::test]
    async fn test_unsupported_saved_and_device_fall_back() {
        let store = Arc::new(MemoryPreferenceStore::with_values([(keys::APP_LANGUAGE, "fr")]));
        let config = LanguageControllerConfig::new().device_locale("ja-JP");
        let controller = LanguageController::new(config, store.clone());
        assert_eq!(controller.init().await, Language::En);
        assert_eq!(store.snapshot(keys::APP_LANGUAGE).as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn test_detected_language_is_saved() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let config = LanguageControllerConfig::new().device_locale("vi-VN");
        let controller = LanguageController::new(config, store.clone());
        assert_eq!(controller.init().await, Language::Vi);
        assert_eq!(store.snapshot(keys::APP_LANGUAGE).as_deref(), Some("vi"));

        // a later device locale no longer moves the UI
        let config = LanguageControllerConfig::new().device_locale("en-US");
        let restarted = LanguageController::new(config, store);
        assert_eq!(restarted.init().await, Language::Vi);
    }

    #[tokio::test]
    async fn test_saved_language_is_not_rewritten() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| Ok(Some("vi".to_string())));
        store.expect_set().never();
        let controller =
            LanguageController::new(LanguageControllerConfig::default(), Arc::new(store));
        assert_eq!(controller.init().await, Language::Vi);
    }

    #[tokio::test]
    async fn test_read_failure_falls_back_to_english() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Err(PreferenceError::Unavailable("offline".to_string())));
        store.expect_set().never();
        let config = LanguageControllerConfig::new().device_locale("vi-VN");
        let controller = LanguageController::new(config, Arc::new(store));

        assert_eq!(controller.init().await, Language::En);
        assert!(controller.is_initialized());
    }

    #[tokio::test]
    async fn test_change_language_persists_and_notifies() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let controller = LanguageController::new(LanguageControllerConfig::default(), store.clone());
        controller.init().await;

        let mut rx = controller.subscribe();
        controller.change_language(Language::Vi).await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Language::Vi);
        assert_eq!(store.snapshot(keys::APP_LANGUAGE).as_deref(), Some("vi"));
    }

    #[tokio::test]
    async fn test_change_language_write_failure_keeps_state() {
        let mut store = MockStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _| Err(PreferenceError::Unavailable("read-only".to_string())));
        let controller = LanguageController::new(LanguageControllerConfig::default(), Arc::new(store));

        controller.init().await;
        assert_eq!(controller.change_language(Language::Vi).await, Language::Vi);
        assert_eq!(controller.current(), Language::Vi);
    }

    #[tokio::test]
    async fn test_change_language_code() {
        let controller = LanguageController::new(
            LanguageControllerConfig::default(),
            Arc::new(MemoryPreferenceStore::new()),
        );

        assert_eq!(controller.change_language_code("vi").await, Ok(Language::Vi));
        assert_eq!(
            controller.change_language_code("de").await,
            Err(LanguageError::Unsupported("de".to_string()))
        );
        assert_eq!(controller.current(), Language::Vi);
    }

    #[tokio::test]
    async fn test_change_before_init_is_kept() {
        let store = MemoryPreferenceStore::with_values([(keys::APP_LANGUAGE, "en")]);
        let controller =
            LanguageController::new(LanguageControllerConfig::default(), Arc::new(store));

        controller.change_language(Language::Vi).await;
        assert_eq!(controller.init().await, Language::Vi);
    }
}
