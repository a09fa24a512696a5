//! OS appearance (light/dark color scheme)
//!
//! The operating system reports a color scheme that may change while the
//! app is running. [`SystemAppearance`] is the process-side mirror of that
//! value: platform glue feeds it with [`SystemAppearance::set_color_scheme`]
//! and interested parties receive [`AppearanceChange`] events through a
//! broadcast channel.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Color scheme reported by the operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light appearance
    #[default]
    Light,
    /// Dark appearance
    Dark,
}

impl ColorScheme {
    /// Whether this is the dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// The opposite scheme
    pub fn toggle(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Appearance-change event
///
/// `color_scheme` is `None` when the OS has no preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceChange {
    /// New color scheme, if the OS reports one
    pub color_scheme: Option<ColorScheme>,
}

impl AppearanceChange {
    /// Whether the event asks for dark appearance
    ///
    /// An absent scheme counts as light.
    pub fn is_dark(&self) -> bool {
        self.color_scheme.is_some_and(|s| s.is_dark())
    }
}

/// Source of OS appearance information
pub trait AppearanceSource: Send + Sync {
    /// Color scheme currently reported by the OS
    fn color_scheme(&self) -> Option<ColorScheme>;

    /// Subscribe to appearance changes
    ///
    /// Dropping the receiver unsubscribes.
    fn subscribe(&self) -> broadcast::Receiver<AppearanceChange>;
}

/// Default buffer for pending appearance events per subscriber
const EVENT_BUFFER: usize = 16;

/// Process-wide mirror of the OS appearance
pub struct SystemAppearance {
    current: RwLock<Option<ColorScheme>>,
    event_tx: broadcast::Sender<AppearanceChange>,
}

impl SystemAppearance {
    /// Create a new appearance mirror with the scheme the OS reports at launch
    pub fn new(initial: Option<ColorScheme>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { current: RwLock::new(initial), event_tx }
    }

    /// Record a new OS color scheme and notify subscribers
    ///
    /// Every call emits an event, even when the scheme is unchanged; the OS
    /// does the same.
    pub fn set_color_scheme(&self, scheme: Option<ColorScheme>) {
        *self.current.write() = scheme;
        tracing::debug!(?scheme, "OS appearance changed");
        // No subscribers is fine
        let _ = self.event_tx.send(AppearanceChange { color_scheme: scheme });
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.event_tx.receiver_count()
    }
}

impl Default for SystemAppearance {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AppearanceSource for SystemAppearance {
    fn color_scheme(&self) -> Option<ColorScheme> {
        *self.current.read()
    }

    fn subscribe(&self) -> broadcast::Receiver<AppearanceChange> {
        self.event_tx.subscribe()
    }
}
