//! Window, screen and system bar metrics

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Width below which a device counts as small (px)
pub const SMALL_DEVICE_WIDTH: f32 = 375.0;

/// A width/height pair in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Layout metrics of the running device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowMetrics {
    /// Usable window area
    pub window: Size,
    /// Full physical screen
    pub screen: Size,
    /// Status bar height
    pub status_bar: f32,
    /// Navigation bar height
    pub nav_bar: f32,
}

impl WindowMetrics {
    /// Build metrics for a platform
    ///
    /// `reported_status_bar` is the height the OS reports, which only
    /// Android provides; iOS uses a fixed 20px and other platforms 0.
    pub fn for_platform(
        platform: Platform,
        window: Size,
        screen: Size,
        reported_status_bar: Option<f32>,
    ) -> Self {
        let status_bar = platform.select(20.0, reported_status_bar.unwrap_or(0.0), 0.0);
        let nav_bar = platform.select(44.0, 56.0, 64.0);

        Self { window, screen, status_bar, nav_bar }
    }

    /// Whether the window is narrower than a standard phone
    pub fn is_small_device(&self) -> bool {
        self.window.width < SMALL_DEVICE_WIDTH
    }

    /// Window height left after the status and navigation bars
    pub fn content_height(&self) -> f32 {
        (self.window.height - self.status_bar - self.nav_bar).max(0.0)
    }
}
