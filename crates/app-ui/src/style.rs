//! Style objects and the themed style cache
//!
//! A *style descriptor* is a pure function from a [`Theme`] to a
//! [`StyleObject`]. Descriptors are compiled into [`CompiledStyle`]s, which
//! are cached by *content*: two descriptors that produce the same style
//! object under the same theme share one compiled style, and callers can
//! rely on identity ([`CompiledStyle::ptr_eq`]) to skip re-layout.
//!
//! Two cache scopes exist:
//! - [`StyleCache`] is bound to one theme and lives as long as its owner
//!   (a screen, a provider, the active theme of a controller).
//! - [`create_component_styles`] uses a process-wide registry with one
//!   namespace per theme mode.
//!
//! Descriptors must be deterministic. A descriptor that returns different
//! content for the same theme simply produces a new cache entry on every
//! call; this is not detected.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::style::{StyleCache, StyleObject, StyleProperty, StyleProps};
//! use app_ui::theme::{resolve, ThemeMode};
//!
//! let cache = StyleCache::new(resolve(ThemeMode::Light));
//! let styles = cache
//!     .create_themed_style(|theme| {
//!         StyleObject::new().style(
//!             "container",
//!             StyleProps::new()
//!                 .with(StyleProperty::BackgroundColor, &theme.colors.background)
//!                 .with(StyleProperty::Padding, theme.spacing.md),
//!         )
//!     })
//!     .unwrap();
//!
//! assert!(styles.get("container").is_some());
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

use crate::theme::{Theme, ThemeMode};

/// Style errors
#[derive(Debug, Error)]
pub enum StyleError {
    /// The style object could not be serialized into a cache key
    #[error("Failed to build style cache key: {0}")]
    CacheKey(#[from] serde_json::Error),

    /// A numeric value is NaN or infinite and has no content key
    #[error("Non-finite value for {property:?} in style '{style}'")]
    NonFinite {
        /// Style name
        style: String,
        /// Offending property
        property: StyleProperty,
    },
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;

// =============================================================================
// Style Vocabulary
// =============================================================================

/// Style property names
///
/// Serialized in camelCase, matching the names the native layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    // Flexbox
    /// flex
    Flex,
    /// flexDirection
    FlexDirection,
    /// flexWrap
    FlexWrap,
    /// flexGrow
    FlexGrow,
    /// flexShrink
    FlexShrink,
    /// flexBasis
    FlexBasis,
    /// justifyContent
    JustifyContent,
    /// alignItems
    AlignItems,
    /// alignSelf
    AlignSelf,
    /// gap
    Gap,

    // Box model
    /// position
    Position,
    /// top
    Top,
    /// right
    Right,
    /// bottom
    Bottom,
    /// left
    Left,
    /// width
    Width,
    /// height
    Height,
    /// padding
    Padding,
    /// paddingHorizontal
    PaddingHorizontal,
    /// paddingVertical
    PaddingVertical,
    /// margin
    Margin,
    /// marginHorizontal
    MarginHorizontal,
    /// marginVertical
    MarginVertical,

    // Visual
    /// backgroundColor
    BackgroundColor,
    /// opacity
    Opacity,
    /// borderColor
    BorderColor,
    /// borderWidth
    BorderWidth,
    /// borderRadius
    BorderRadius,
    /// shadowColor
    ShadowColor,
    /// shadowOffset
    ShadowOffset,
    /// shadowOpacity
    ShadowOpacity,
    /// shadowRadius
    ShadowRadius,
    /// elevation (Android)
    Elevation,

    // Text
    /// color
    Color,
    /// fontSize
    FontSize,
    /// fontWeight
    FontWeight,
    /// fontFamily
    FontFamily,
    /// lineHeight
    LineHeight,
    /// letterSpacing
    LetterSpacing,
    /// textAlign
    TextAlign,
    /// textTransform
    TextTransform,
}

/// A style property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (pixels, ratios, flex factors)
    Number(f64),
    /// Keyword, color or percentage
    Text(String),
    /// Width/height pair, used by `shadowOffset`
    Size {
        /// Horizontal component
        width: f64,
        /// Vertical component
        height: f64,
    },
    /// Explicitly unset, restoring the platform default
    Unset,
}

impl StyleValue {
    /// Numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether every numeric component is finite
    pub fn is_finite(&self) -> bool {
        match self {
            StyleValue::Number(n) => n.is_finite(),
            StyleValue::Size { width, height } => width.is_finite() && height.is_finite(),
            StyleValue::Text(_) | StyleValue::Unset => true,
        }
    }

    /// Text value, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

/// Flat property bag for a single style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleProps(BTreeMap<StyleProperty, StyleValue>);

impl StyleProps {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, property: StyleProperty, value: impl Into<StyleValue>) -> Self {
        self.0.insert(property, value.into());
        self
    }

    /// Set a property
    pub fn set(&mut self, property: StyleProperty, value: impl Into<StyleValue>) {
        self.0.insert(property, value.into());
    }

    /// Get a property
    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.0.get(&property)
    }

    /// Overlay another bag on top of this one (later values win)
    pub fn merge(&mut self, other: &StyleProps) {
        for (property, value) in &other.0 {
            self.0.insert(*property, value.clone());
        }
    }

    /// Builder-style [`merge`](Self::merge)
    pub fn merged(mut self, other: &StyleProps) -> Self {
        self.merge(other);
        self
    }

    /// Flatten several bags into one, left to right
    pub fn compose<'a>(layers: impl IntoIterator<Item = &'a StyleProps>) -> Self {
        layers.into_iter().fold(Self::new(), |acc, layer| acc.merged(layer))
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag has no properties
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over properties in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (&StyleProperty, &StyleValue)> {
        self.0.iter()
    }
}

/// Named styles produced by a descriptor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject(BTreeMap<String, StyleProps>);

impl StyleObject {
    /// Create an empty style object
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn style(mut self, name: impl Into<String>, props: StyleProps) -> Self {
        self.0.insert(name.into(), props);
        self
    }

    /// Insert a named style
    pub fn insert(&mut self, name: impl Into<String>, props: StyleProps) {
        self.0.insert(name.into(), props);
    }

    /// Get a named style
    pub fn get(&self, name: &str) -> Option<&StyleProps> {
        self.0.get(name)
    }

    /// Append every style of `other`, replacing same-named entries
    pub fn extend(&mut self, other: StyleObject) {
        self.0.extend(other.0);
    }

    /// Number of named styles
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no styles
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Style names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Content-addressed cache key
    ///
    /// Serializes the whole object on every call. Non-finite numbers
    /// serialize to `null` like [`StyleValue::Unset`], so they are rejected.
    pub fn cache_key(&self) -> Result<String> {
        self.check_finite()?;
        Ok(serde_json::to_string(self)?)
    }

    fn check_finite(&self) -> Result<()> {
        for (style, props) in &self.0 {
            if let Some((property, _)) = props.iter().find(|(_, value)| !value.is_finite()) {
                return Err(StyleError::NonFinite { style: style.clone(), property: *property });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Compiled Styles
// =============================================================================

/// Frozen handle to one compiled style
#[derive(Debug, Clone, PartialEq)]
pub struct StyleHandle(Arc<StyleProps>);

impl StyleHandle {
    /// Properties behind the handle
    pub fn props(&self) -> &StyleProps {
        &self.0
    }

    /// Whether two handles refer to the same compiled style
    pub fn ptr_eq(a: &StyleHandle, b: &StyleHandle) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

#[derive(Debug)]
struct CompiledSheet {
    styles: BTreeMap<String, StyleHandle>,
}

/// Immutable, cached output of a style descriptor
///
/// Cloning is cheap and preserves identity.
#[derive(Debug, Clone)]
pub struct CompiledStyle(Arc<CompiledSheet>);

impl CompiledStyle {
    /// Freeze a style object
    pub fn compile(object: StyleObject) -> Self {
        let styles = object
            .0
            .into_iter()
            .map(|(name, props)| (name, StyleHandle(Arc::new(props))))
            .collect();
        Self(Arc::new(CompiledSheet { styles }))
    }

    /// Look up a compiled style by name
    pub fn get(&self, name: &str) -> Option<&StyleHandle> {
        self.0.styles.get(name)
    }

    /// Style names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.styles.keys().map(String::as_str)
    }

    /// Number of named styles
    pub fn len(&self) -> usize {
        self.0.styles.len()
    }

    /// Whether the compiled style has no entries
    pub fn is_empty(&self) -> bool {
        self.0.styles.is_empty()
    }

    /// Identity comparison
    pub fn ptr_eq(a: &CompiledStyle, b: &CompiledStyle) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

// =============================================================================
// Theme-scoped Cache
// =============================================================================

/// Hit/miss counters of a cache scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that compiled a new style
    pub misses: u64,
}

/// Style cache bound to a single theme
///
/// Entries live until the cache is dropped or [`clear`](Self::clear)ed.
/// A different theme needs a different cache.
pub struct StyleCache<'t> {
    theme: &'t Theme,
    entries: Mutex<HashMap<String, CompiledStyle>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<'t> StyleCache<'t> {
    /// Create an empty cache for a theme
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Theme this cache is bound to
    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Evaluate a descriptor against the bound theme and return its
    /// compiled style
    ///
    /// Descriptors producing identical content share one [`CompiledStyle`].
    /// The descriptor runs on every call; only compilation is cached.
    pub fn create_themed_style<F>(&self, descriptor: F) -> Result<CompiledStyle>
    where
        F: FnOnce(&Theme) -> StyleObject,
    {
        let object = descriptor(self.theme);
        let key = object.cache_key()?;

        let mut entries = self.entries.lock();
        match entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(mode = %self.theme.mode, "style cache hit");
                Ok(entry.get().clone())
            }
            Entry::Vacant(entry) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    mode = %self.theme.mode,
                    styles = object.len(),
                    "compiling themed style"
                );
                Ok(entry.insert(CompiledStyle::compile(object)).clone())
            }
        }
    }

    /// Number of cached compiled styles
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl std::fmt::Debug for StyleCache<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleCache")
            .field("mode", &self.theme.mode)
            .field("entries", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}

// =============================================================================
// Process-wide Cache
// =============================================================================

/// Component styles shared for the lifetime of the process
type ComponentRegistry = Mutex<HashMap<ThemeMode, HashMap<String, CompiledStyle>>>;

static COMPONENT_STYLES: OnceLock<ComponentRegistry> = OnceLock::new();

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentKey<'a> {
    colors: &'a crate::theme::ThemeColors,
    spacing: &'a crate::tokens::SizeScale,
    border_radius: &'a crate::tokens::RadiusScale,
    styles: &'a StyleObject,
}

/// Compile a descriptor into the process-wide component cache
///
/// The registry keeps one namespace per theme mode. Keys cover the theme's
/// colors, spacing and radii together with the produced styles, so two
/// themes of the same mode with different values never share entries.
pub fn create_component_styles<F>(theme: &Theme, descriptor: F) -> Result<CompiledStyle>
where
    F: FnOnce(&Theme) -> StyleObject,
{
    let object = descriptor(theme);
    object.check_finite()?;
    let key = serde_json::to_string(&ComponentKey {
        colors: &theme.colors,
        spacing: &theme.spacing,
        border_radius: &theme.border_radius,
        styles: &object,
    })?;

    let registry = COMPONENT_STYLES.get_or_init(|| Mutex::new(HashMap::new()));
    let mut registry = registry.lock();
    let namespace = registry.entry(theme.mode).or_default();

    Ok(namespace
        .entry(key)
        .or_insert_with(|| {
            tracing::debug!(mode = %theme.mode, "compiling component style");
            CompiledStyle::compile(object)
        })
        .clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{build_theme, resolve};
    use app_platform::Platform;

    fn container(theme: &Theme) -> StyleObject {
        StyleObject::new().style(
            "container",
            StyleProps::new()
                .with(StyleProperty::BackgroundColor, &theme.colors.background)
                .with(StyleProperty::Padding, theme.spacing.md),
        )
    }

    // ==========================================================================
    // Vocabulary Tests
    // ==========================================================================

    #[test]
    fn test_style_props_builder() {
        let props = StyleProps::new()
            .with(StyleProperty::Flex, 1)
            .with(StyleProperty::FlexDirection, "row");

        assert_eq!(props.len(), 2);
        assert_eq!(props.get(StyleProperty::Flex), Some(&StyleValue::Number(1.0)));
        assert_eq!(
            props.get(StyleProperty::FlexDirection).and_then(StyleValue::as_text),
            Some("row")
        );
        assert!(props.get(StyleProperty::Color).is_none());
    }

    #[test]
    fn test_style_props_merge_later_wins() {
        let base = StyleProps::new()
            .with(StyleProperty::Color, "#000000")
            .with(StyleProperty::FontSize, 16);
        let overlay = StyleProps::new().with(StyleProperty::Color, "#FFFFFF");

        let merged = base.merged(&overlay);
        assert_eq!(merged.get(StyleProperty::Color).and_then(StyleValue::as_text), Some("#FFFFFF"));
        assert_eq!(merged.get(StyleProperty::FontSize).and_then(StyleValue::as_number), Some(16.0));
    }

    #[test]
    fn test_style_props_compose() {
        let a = StyleProps::new().with(StyleProperty::Opacity, 1);
        let b = StyleProps::new().with(StyleProperty::Opacity, 0.8);
        let c = StyleProps::new().with(StyleProperty::Margin, 4);

        let composed = StyleProps::compose([&a, &b, &c]);
        assert_eq!(composed.get(StyleProperty::Opacity), Some(&StyleValue::Number(0.8)));
        assert_eq!(composed.len(), 2);
    }

    #[test]
    fn test_style_props_serialization() {
        let props = StyleProps::new()
            .with(StyleProperty::BackgroundColor, "#FFFFFF")
            .with(StyleProperty::ShadowOffset, StyleValue::Size { width: 0.0, height: 2.0 })
            .with(StyleProperty::Flex, StyleValue::Unset);

        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["backgroundColor"], "#FFFFFF");
        assert_eq!(json["shadowOffset"]["height"], 2.0);
        assert!(json["flex"].is_null());
    }

    #[test]
    fn test_cache_key_is_order_independent() {
        let a = StyleObject::new()
            .style("a", StyleProps::new().with(StyleProperty::Flex, 1).with(StyleProperty::Gap, 4))
            .style("b", StyleProps::new());
        let b = StyleObject::new()
            .style("b", StyleProps::new())
            .style("a", StyleProps::new().with(StyleProperty::Gap, 4).with(StyleProperty::Flex, 1));

        assert_eq!(a.cache_key().unwrap(), b.cache_key().unwrap());
    }

    #[test]
    fn test_cache_key_rejects_non_finite_numbers() {
        let nan = StyleObject::new()
            .style("x", StyleProps::new().with(StyleProperty::Opacity, f64::NAN));
        assert!(matches!(
            nan.cache_key(),
            Err(StyleError::NonFinite { style, property: StyleProperty::Opacity }) if style == "x"
        ));

        let offset = StyleValue::Size { width: 0.0, height: f64::INFINITY };
        let inf = StyleObject::new()
            .style("x", StyleProps::new().with(StyleProperty::ShadowOffset, offset));
        assert!(matches!(inf.cache_key(), Err(StyleError::NonFinite { .. })));

        let unset = StyleObject::new()
            .style("x", StyleProps::new().with(StyleProperty::Opacity, StyleValue::Unset));
        assert!(unset.cache_key().is_ok());
    }

    // ==========================================================================
    // Compiled Style Tests
    // ==========================================================================

    #[test]
    fn test_compile_preserves_content() {
        let theme = resolve(ThemeMode::Light);
        let compiled = CompiledStyle::compile(container(theme));

        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled.names().collect::<Vec<_>>(), vec!["container"]);
        let handle = compiled.get("container").unwrap();
        assert_eq!(handle.props(), container(theme).get("container").unwrap());
        assert!(compiled.get("missing").is_none());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let compiled = CompiledStyle::compile(StyleObject::new());
        let clone = compiled.clone();
        assert!(CompiledStyle::ptr_eq(&compiled, &clone));
        assert!(compiled.is_empty());
    }

    // ==========================================================================
    // Cache Tests
    // ==========================================================================

    #[test]
    fn test_repeated_calls_share_identity() {
        let cache = StyleCache::new(resolve(ThemeMode::Light));

        let first = cache.create_themed_style(container).unwrap();
        let second = cache.create_themed_style(container).unwrap();

        assert!(CompiledStyle::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_distinct_descriptors_with_equal_content_collide() {
        let cache = StyleCache::new(resolve(ThemeMode::Dark));

        let from_fn = cache.create_themed_style(container).unwrap();
        let from_closure = cache
            .create_themed_style(|theme| {
                StyleObject::new().style(
                    "container",
                    StyleProps::new()
                        .with(StyleProperty::Padding, theme.spacing.md)
                        .with(StyleProperty::BackgroundColor, theme.colors.background.clone()),
                )
            })
            .unwrap();

        assert!(CompiledStyle::ptr_eq(&from_fn, &from_closure));
    }

    #[test]
    fn test_different_content_gets_distinct_identity() {
        let cache = StyleCache::new(resolve(ThemeMode::Light));

        let a = cache.create_themed_style(container).unwrap();
        let b = cache
            .create_themed_style(|theme| {
                StyleObject::new().style(
                    "container",
                    StyleProps::new().with(StyleProperty::BackgroundColor, &theme.colors.surface),
                )
            })
            .unwrap();

        assert!(!CompiledStyle::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_theme_scopes_are_disjoint() {
        let light = StyleCache::new(resolve(ThemeMode::Light));
        let dark = StyleCache::new(resolve(ThemeMode::Dark));

        let in_light = light.create_themed_style(container).unwrap();
        let in_dark = dark.create_themed_style(container).unwrap();

        assert!(!CompiledStyle::ptr_eq(&in_light, &in_dark));
        assert_ne!(
            in_light.get("container").unwrap().props(),
            in_dark.get("container").unwrap().props()
        );
    }

    #[test]
    fn test_descriptor_runs_on_every_call() {
        // Content addressing re-evaluates and re-serializes each time; only
        // compilation is skipped. Acceptable for small static descriptors.
        let cache = StyleCache::new(resolve(ThemeMode::Light));
        let calls = std::cell::Cell::new(0);

        for _ in 0..3 {
            cache
                .create_themed_style(|theme| {
                    calls.set(calls.get() + 1);
                    container(theme)
                })
                .unwrap();
        }

        assert_eq!(calls.get(), 3);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_nan_never_shares_an_entry_with_unset() {
        fn opacity(value: StyleValue) -> impl FnOnce(&Theme) -> StyleObject {
            move |_| StyleObject::new().style("x", StyleProps::new().with(StyleProperty::Opacity, value))
        }

        let cache = StyleCache::new(resolve(ThemeMode::Light));

        assert!(cache.create_themed_style(opacity(StyleValue::Number(f64::NAN))).is_err());
        assert!(cache.is_empty());

        let unset = cache.create_themed_style(opacity(StyleValue::Unset)).unwrap();
        assert_eq!(
            unset.get("x").unwrap().props().get(StyleProperty::Opacity),
            Some(&StyleValue::Unset)
        );
        assert_eq!(cache.len(), 1);

        // still rejected once an unset entry exists
        assert!(cache.create_themed_style(opacity(StyleValue::Number(f64::NAN))).is_err());
        let shared = create_component_styles(cache.theme(), opacity(StyleValue::Number(f64::NAN)));
        assert!(shared.is_err());
    }

    #[test]
    fn test_clear_releases_entries() {
        let cache = StyleCache::new(resolve(ThemeMode::Light));
        let before = cache.create_themed_style(container).unwrap();
        cache.clear();
        assert!(cache.is_empty());

        let after = cache.create_themed_style(container).unwrap();
        assert!(!CompiledStyle::ptr_eq(&before, &after));
    }

    #[test]
    fn test_cache_over_local_theme() {
        let theme = build_theme(ThemeMode::Dark, Platform::Android);
        let cache = StyleCache::new(&theme);
        let compiled = cache.create_themed_style(container).unwrap();
        assert_eq!(
            compiled.get("container").unwrap().props().get(StyleProperty::BackgroundColor),
            Some(&StyleValue::from(&theme.colors.background))
        );
        assert_eq!(cache.theme().mode, ThemeMode::Dark);
    }

    // ==========================================================================
    // Component Registry Tests
    // ==========================================================================

    #[test]
    fn test_component_styles_are_process_wide() {
        let theme = resolve(ThemeMode::Light);
        let first = create_component_styles(theme, container).unwrap();
        let second = create_component_styles(theme, container).unwrap();
        assert!(CompiledStyle::ptr_eq(&first, &second));
    }

    #[test]
    fn test_component_styles_separate_modes() {
        let light = create_component_styles(resolve(ThemeMode::Light), |_| {
            StyleObject::new().style("row", StyleProps::new().with(StyleProperty::FlexDirection, "row"))
        })
        .unwrap();
        let dark = create_component_styles(resolve(ThemeMode::Dark), |_| {
            StyleObject::new().style("row", StyleProps::new().with(StyleProperty::FlexDirection, "row"))
        })
        .unwrap();

        assert!(!CompiledStyle::ptr_eq(&light, &dark));
        assert_eq!(light.get("row").unwrap().props(), dark.get("row").unwrap().props());
    }
}
