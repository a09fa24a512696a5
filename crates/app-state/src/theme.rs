//! Theme lifecycle controller
//!
//! [`ThemeController`] owns the one active theme of the process. It loads
//! the persisted preference on [`init`](ThemeController::init), applies
//! user changes through [`set_mode`](ThemeController::set_mode), and while
//! the preference is [`ColorMode::System`] follows OS appearance events.
//!
//! The active theme is published as an `Arc<ActiveTheme>` on a watch
//! channel. Transitions replace the `Arc` wholesale, so a reader never
//! sees a preference from one transition paired with a theme from another.
//!
//! In-memory state is authoritative. Persistence is best-effort: read and
//! write failures are logged and never surface to callers.
//!
//! # Example
//!
//! ```no_run
//! use app_platform::{ColorScheme, SystemAppearance};
//! use app_state::theme::{ThemeController, ThemeControllerConfig};
//! use std::sync::Arc;
//! use storage::{ColorMode, MemoryPreferenceStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let appearance = Arc::new(SystemAppearance::new(Some(ColorScheme::Light)));
//!     let controller = ThemeController::new(
//!         ThemeControllerConfig::default(),
//!         Arc::new(MemoryPreferenceStore::new()),
//!         appearance,
//!     );
//!
//!     controller.init().await;
//!     let active = controller.set_mode(ColorMode::Dark).await;
//!     assert!(active.is_dark());
//! }
//! ```

use app_platform::{AppearanceSource, ColorScheme, Platform};
use app_ui::style::StyleProps;
use app_ui::theme::{resolve_for, Color, ColorName, Theme, ThemeMode};
use app_ui::theme_styles::StyleUtils;
use app_ui::variants::ThemeVariant;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use storage::keys;
use storage::preferences::{ColorMode, PreferenceStore, UnknownColorMode};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

// =============================================================================
// Configuration
// =============================================================================

/// Theme controller configuration
#[derive(Debug, Clone)]
pub struct ThemeControllerConfig {
    /// Preference store key holding the color mode
    pub storage_key: String,
    /// Preference used before init and when nothing valid is persisted
    pub default_preference: ColorMode,
    /// Platform whose token values the themes carry
    pub platform: Platform,
}

impl Default for ThemeControllerConfig {
    fn default() -> Self {
        Self {
            storage_key: keys::THEME_MODE.to_string(),
            default_preference: ColorMode::System,
            platform: Platform::current(),
        }
    }
}

impl ThemeControllerConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the fallback preference
    pub fn default_preference(mut self, preference: ColorMode) -> Self {
        self.default_preference = preference;
        self
    }

    /// Set the platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

// =============================================================================
// Active Theme
// =============================================================================

/// Lifecycle phase of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Created, `init` not called yet
    Uninitialized,
    /// Reading the persisted preference
    Loading,
    /// Serving a resolved theme
    Active,
    /// Listeners released; transitions are ignored
    Disposed,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecyclePhase::Uninitialized => "uninitialized",
            LifecyclePhase::Loading => "loading",
            LifecyclePhase::Active => "active",
            LifecyclePhase::Disposed => "disposed",
        };
        f.write_str(name)
    }
}

/// Per-mode color overrides for [`ActiveTheme::color_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverride {
    /// Used while the light theme is active
    pub light: Option<Color>,
    /// Used while the dark theme is active
    pub dark: Option<Color>,
}

/// Snapshot of the active theme
///
/// Immutable. A transition publishes a new snapshot; snapshots already
/// handed out keep their values.
#[derive(Debug)]
pub struct ActiveTheme {
    preference: ColorMode,
    mode: ThemeMode,
    platform: Platform,
    styles: Arc<StyleUtils<'static>>,
}

impl ActiveTheme {
    fn new(preference: ColorMode, mode: ThemeMode, platform: Platform) -> Self {
        Self {
            preference,
            mode,
            platform,
            styles: Arc::new(StyleUtils::new(resolve_for(mode, platform))),
        }
    }

    /// Snapshot for a new preference and mode
    ///
    /// Keeps this snapshot's style cache when the resolved theme is the same.
    fn derive(&self, preference: ColorMode, mode: ThemeMode) -> Self {
        let theme = resolve_for(mode, self.platform);
        let styles = if std::ptr::eq(self.theme(), theme) {
            Arc::clone(&self.styles)
        } else {
            Arc::new(StyleUtils::new(theme))
        };
        Self { preference, mode, platform: self.platform, styles }
    }

    /// Preference the theme was resolved from
    pub fn preference(&self) -> ColorMode {
        self.preference
    }

    /// Resolved mode
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Platform the theme's token values belong to
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// The active theme
    pub fn theme(&self) -> &'static Theme {
        self.styles.theme()
    }

    /// Style utilities bound to the active theme
    pub fn styles(&self) -> &StyleUtils<'static> {
        &self.styles
    }

    /// Shared handle to the style utilities
    pub fn styles_handle(&self) -> Arc<StyleUtils<'static>> {
        Arc::clone(&self.styles)
    }

    /// Semantic color of the active theme
    pub fn color(&self, name: ColorName) -> &'static str {
        self.theme().colors.get(name)
    }

    /// Override for the active mode if set, else the theme color
    pub fn color_with<'a>(&'a self, overrides: &'a ColorOverride, name: ColorName) -> &'a str {
        let preferred = if self.is_dark() { &overrides.dark } else { &overrides.light };
        match preferred {
            Some(color) => color,
            None => self.color(name),
        }
    }

    /// Derive a value from the active theme
    pub fn select<T>(&self, selector: impl FnOnce(&Theme) -> T) -> T {
        selector(self.theme())
    }

    /// Style for a variant looked up by name
    pub fn variant<V: ThemeVariant>(&self, name: &str) -> StyleProps {
        V::from_name(name).style(self.theme())
    }
}

// =============================================================================
// Controller
// =============================================================================

struct Inner {
    config: ThemeControllerConfig,
    store: Arc<dyn PreferenceStore>,
    appearance: Arc<dyn AppearanceSource>,
    state_tx: watch::Sender<Arc<ActiveTheme>>,
    phase: Mutex<LifecyclePhase>,
    listener: Mutex<Option<JoinHandle<()>>>,
    /// Bumped by every explicit mode change
    generation: AtomicU64,
}

impl Inner {
    fn current(&self) -> Arc<ActiveTheme> {
        Arc::clone(&self.state_tx.borrow())
    }

    fn is_disposed(&self) -> bool {
        *self.phase.lock() == LifecyclePhase::Disposed
    }

    fn resolve_mode(&self, preference: ColorMode) -> ThemeMode {
        match preference {
            ColorMode::System => scheme_mode(self.appearance.color_scheme()),
            ColorMode::Light => ThemeMode::Light,
            ColorMode::Dark => ThemeMode::Dark,
        }
    }

    /// Apply a preference and publish the result
    fn transition(self: &Arc<Self>, preference: ColorMode) -> Arc<ActiveTheme> {
        // The listener subscribes before the scheme is read, so an OS event
        // landing in between is delivered rather than lost
        self.sync_listener(preference);
        let mut published = None;

        self.state_tx.send_if_modified(|current| {
            let mode = self.resolve_mode(preference);
            if current.preference == preference && current.mode == mode {
                published = Some(Arc::clone(current));
                return false;
            }
            tracing::debug!(
                from = %current.mode,
                to = %mode,
                preference = %preference,
                "theme transition"
            );
            *current = Arc::new(current.derive(preference, mode));
            published = Some(Arc::clone(current));
            true
        });

        published.unwrap_or_else(|| self.current())
    }

    /// OS appearance changed; only honored while following the system
    fn on_appearance_change(&self, scheme: Option<ColorScheme>) {
        let mode = scheme_mode(scheme);
        self.state_tx.send_if_modified(|current| {
            if !current.preference.is_system() || current.mode == mode {
                return false;
            }
            tracing::debug!(from = %current.mode, to = %mode, "system appearance changed");
            *current = Arc::new(current.derive(current.preference, mode));
            true
        });
    }

    /// Subscribe to appearance events exactly while following the system
    fn sync_listener(self: &Arc<Self>, preference: ColorMode) {
        let mut listener = self.listener.lock();
        let running = listener.as_ref().is_some_and(|handle| !handle.is_finished());

        if preference.is_system() && !running && !self.is_disposed() {
            *listener = Some(self.spawn_listener());
        } else if !preference.is_system() {
            if let Some(handle) = listener.take() {
                handle.abort();
                tracing::debug!("stopped following system appearance");
            }
        }
    }

    fn spawn_listener(self: &Arc<Self>) -> JoinHandle<()> {
        // Subscribe before spawning so no event between here and the first poll is lost
        let mut events = self.appearance.subscribe();
        let inner: Weak<Inner> = Arc::downgrade(self);
        tracing::debug!("following system appearance");

        tokio::spawn(async move {
            loop {
                let scheme = match events.recv().await {
                    Ok(change) => change.color_scheme,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        let Some(inner) = inner.upgrade() else { break };
                        tracing::warn!(skipped, "appearance events lagged; resyncing");
                        inner.appearance.color_scheme()
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };

                match inner.upgrade() {
                    Some(inner) => inner.on_appearance_change(scheme),
                    None => break,
                }
            }
        })
    }

    fn stop_listener(&self) {
        if let Some(handle) = self.listener.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.stop_listener();
    }
}

/// A missing color scheme counts as light
fn scheme_mode(scheme: Option<ColorScheme>) -> ThemeMode {
    ThemeMode::from(scheme.unwrap_or_default())
}

/// Process-wide owner of the active theme
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct ThemeController {
    inner: Arc<Inner>,
}

impl ThemeController {
    /// Create a controller in the `Uninitialized` phase
    ///
    /// Until [`init`](Self::init) runs, the configured default preference is
    /// resolved against the current OS appearance.
    pub fn new(
        config: ThemeControllerConfig,
        store: Arc<dyn PreferenceStore>,
        appearance: Arc<dyn AppearanceSource>,
    ) -> Self {
        let preference = config.default_preference;
        let mode = match preference {
            ColorMode::System => scheme_mode(appearance.color_scheme()),
            ColorMode::Light => ThemeMode::Light,
            ColorMode::Dark => ThemeMode::Dark,
        };
        let initial = ActiveTheme::new(preference, mode, config.platform);
        let (state_tx, _) = watch::channel(Arc::new(initial));

        Self {
            inner: Arc::new(Inner {
                config,
                store,
                appearance,
                state_tx,
                phase: Mutex::new(LifecyclePhase::Uninitialized),
                listener: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Load the persisted preference and become active
    ///
    /// A missing, unreadable or unrecognized value falls back to the
    /// configured default. Only the first call loads; later calls return the
    /// current theme. An explicit [`set_mode`](Self::set_mode) issued while
    /// loading wins over the loaded value.
    pub async fn init(&self) -> Arc<ActiveTheme> {
        {
            let mut phase = self.inner.phase.lock();
            if *phase != LifecyclePhase::Uninitialized {
                let current = *phase;
                tracing::debug!(phase = %current, "theme controller already initialized");
                return self.current();
            }
            *phase = LifecyclePhase::Loading;
        }

        let generation = self.inner.generation.load(Ordering::SeqCst);
        let preference = self.load_preference().await;

        let phase = self.phase();
        if phase != LifecyclePhase::Loading
            || self.inner.generation.load(Ordering::SeqCst) != generation
        {
            tracing::debug!(phase = %phase, "theme preference changed while loading");
            return self.current();
        }

        let active = self.inner.transition(preference);
        {
            let mut phase = self.inner.phase.lock();
            if *phase == LifecyclePhase::Loading {
                *phase = LifecyclePhase::Active;
            }
        }
        tracing::info!(
            preference = %active.preference(),
            mode = %active.mode(),
            "theme controller active"
        );
        active
    }

    async fn load_preference(&self) -> ColorMode {
        let key = self.inner.config.storage_key.as_str();
        let fallback = self.inner.config.default_preference;

        match self.inner.store.get(key).await {
            Ok(Some(value)) => match value.parse::<ColorMode>() {
                Ok(preference) => preference,
                Err(error) => {
                    tracing::warn!(key, %error, "ignoring unrecognized theme preference");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(error) => {
                tracing::warn!(key, %error, "failed to read theme preference");
                fallback
            }
        }
    }

    /// Switch to a preference, then persist it
    ///
    /// The new theme is published before the write starts and is returned
    /// even if the write fails. Ignored after [`dispose`](Self::dispose).
    pub async fn set_mode(&self, preference: ColorMode) -> Arc<ActiveTheme> {
        {
            let mut phase = self.inner.phase.lock();
            if *phase == LifecyclePhase::Disposed {
                tracing::warn!(preference = %preference, "set_mode on disposed theme controller");
                return self.current();
            }
            *phase = LifecyclePhase::Active;
        }

        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        let active = self.inner.transition(preference);

        let key = self.inner.config.storage_key.as_str();
        if let Err(error) = self.inner.store.set(key, preference.as_str()).await {
            tracing::warn!(key, preference = %preference, %error, "failed to persist theme preference");
        }

        active
    }

    /// [`set_mode`](Self::set_mode) from a stored or user-supplied name
    ///
    /// Unrecognized names fail without touching state.
    pub async fn set_mode_named(&self, name: &str) -> Result<Arc<ActiveTheme>, UnknownColorMode> {
        let preference = name.parse::<ColorMode>()?;
        Ok(self.set_mode(preference).await)
    }

    /// Flip between explicit light and dark based on the resolved theme
    pub async fn toggle(&self) -> Arc<ActiveTheme> {
        let next = if self.current().is_dark() { ColorMode::Light } else { ColorMode::Dark };
        self.set_mode(next).await
    }

    /// The active theme
    pub fn current(&self) -> Arc<ActiveTheme> {
        self.inner.current()
    }

    /// Watch the active theme
    pub fn subscribe(&self) -> watch::Receiver<Arc<ActiveTheme>> {
        self.inner.state_tx.subscribe()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LifecyclePhase {
        *self.inner.phase.lock()
    }

    /// Whether the OS appearance listener is running
    pub fn is_following_system(&self) -> bool {
        self.inner
            .listener
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Release the appearance listener; later transitions are ignored
    pub fn dispose(&self) {
        *self.inner.phase.lock() = LifecyclePhase::Disposed;
        self.inner.stop_listener();
        tracing::debug!("theme controller disposed");
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current();
        f.debug_struct("ThemeController")
            .field("phase", &self.phase())
            .field("preference", &current.preference())
            .field("mode", &current.mode())
            .finish()
    }
}
