//! Platform detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform family the app is compiled for
///
/// Token values (font families, shadows, system bar heights) differ per
/// platform; token key sets never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS / iPadOS
    Ios,
    /// Android
    Android,
    /// Browser (wasm)
    Web,
    /// Any desktop OS
    Desktop,
}

impl Platform {
    /// Detect the platform of the current build target
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Desktop
        }
    }

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }

    /// Whether this is a handheld platform
    pub fn is_mobile(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }

    /// Pick a value for this platform
    ///
    /// `default` is used for every platform that is neither iOS nor Android.
    pub fn select<T>(&self, ios: T, android: T, default: T) -> T {
        match self {
            Platform::Ios => ios,
            Platform::Android => android,
            Platform::Web | Platform::Desktop => default,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        assert_eq!(Platform::Ios.select(20, 24, 0), 20);
        assert_eq!(Platform::Android.select(20, 24, 0), 24);
        assert_eq!(Platform::Web.select(20, 24, 0), 0);
        assert_eq!(Platform::Desktop.select(20, 24, 0), 0);
    }

    #[test]
    fn test_is_mobile() {
        assert!(Platform::Ios.is_mobile());
        assert!(Platform::Android.is_mobile());
        assert!(!Platform::Desktop.is_mobile());
    }

    #[test]
    fn test_current_on_host() {
        // Tests run on a desktop host
        assert_eq!(Platform::current(), Platform::Desktop);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Platform::Android).unwrap();
        assert_eq!(json, "\"android\"");
        assert_eq!(Platform::Ios.to_string(), "ios");
    }
}
