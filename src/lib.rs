//! Storefront application core
//!
//! Composition root for the theme and style system: opens the preference
//! store, wires the theme and language controllers to it and to the OS
//! appearance source, and runs their startup.
//!
//! # Example
//!
//! ```no_run
//! use app_platform::{ColorScheme, SystemAppearance};
//! use std::sync::Arc;
//! use storefront::{init_tracing, AppConfig, Storefront};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env();
//!     init_tracing(&config.log_filter);
//!
//!     let appearance = Arc::new(SystemAppearance::new(Some(ColorScheme::Light)));
//!     let app = Storefront::start(config, appearance).await?;
//!     println!("{}", app.theme().current().mode());
//!     app.shutdown().await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_tracing;

use anyhow::Context;
use app_platform::{AppearanceSource, Platform, Size, WindowMetrics};
use app_state::{LanguageController, ThemeController};
use app_ui::tokens::TokenRegistry;
use std::sync::Arc;
use storage::{DevicePreferenceStore, DeviceStore, KvStore, PreferenceStore};

/// A running application core
pub struct Storefront {
    platform: Platform,
    kv: Option<KvStore>,
    theme: ThemeController,
    language: LanguageController,
}

impl Storefront {
    /// Open the preference store and bring both controllers up
    pub async fn start(
        config: AppConfig,
        appearance: Arc<dyn AppearanceSource>,
    ) -> anyhow::Result<Self> {
        let kv_config = config.kv.clone();
        let kv = tokio::task::spawn_blocking(move || KvStore::open(&kv_config))
            .await
            .context("preference store task failed")?
            .with_context(|| {
                format!("failed to open preference store at {}", config.kv.path.display())
            })?;

        let store = Arc::new(DevicePreferenceStore::new(DeviceStore::new(kv.clone())));
        let mut app = Self::start_with_store(config, store, appearance).await;
        app.kv = Some(kv);
        Ok(app)
    }

    /// Bring both controllers up on an existing preference store
    pub async fn start_with_store(
        config: AppConfig,
        store: Arc<dyn PreferenceStore>,
        appearance: Arc<dyn AppearanceSource>,
    ) -> Self {
        let theme_config = config.theme.platform(config.platform);
        let theme = ThemeController::new(theme_config, Arc::clone(&store), appearance);
        let language = LanguageController::new(config.language, store);

        let (active, lang) = tokio::join!(theme.init(), language.init());
        tracing::info!(
            platform = %config.platform,
            mode = %active.mode(),
            preference = %active.preference(),
            language = %lang,
            "storefront started"
        );

        Self { platform: config.platform, kv: None, theme, language }
    }

    /// Theme controller
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Language controller
    pub fn language(&self) -> &LanguageController {
        &self.language
    }

    /// Host platform
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Design tokens for the host platform
    pub fn tokens(&self) -> TokenRegistry {
        TokenRegistry::for_platform(self.platform)
    }

    /// Window metrics with the host platform's bar heights
    pub fn window_metrics(
        &self,
        window: Size,
        screen: Size,
        reported_status_bar: Option<f32>,
    ) -> WindowMetrics {
        WindowMetrics::for_platform(self.platform, window, screen, reported_status_bar)
    }

    /// Release listeners and flush the preference store
    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.theme.dispose();

        if let Some(kv) = self.kv {
            tokio::task::spawn_blocking(move || kv.flush())
                .await
                .context("preference store task failed")?
                .context("failed to flush preference store")?;
        }

        tracing::info!("storefront stopped");
        Ok(())
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("platform", &self.platform)
            .field("theme", &self.theme)
            .field("language", &self.language)
            .finish()
    }
}
