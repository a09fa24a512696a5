//! Base theme styles and per-theme style utilities
//!
//! [`StyleUtils`] is what screens and components receive: a theme, the
//! theme's base styles and a [`StyleCache`] scoped to that theme. A new
//! theme means a new `StyleUtils`.

use crate::style::{
    CompiledStyle, Result, StyleCache, StyleHandle, StyleObject, StyleProperty, StyleProps,
};
use crate::theme::Theme;
use crate::tokens;

/// Shared layout styles derived from a theme
///
/// Contains the flex presets plus `fill`, `container`, `row`, `column`
/// and the three text alignments.
pub fn base_styles(theme: &Theme) -> StyleObject {
    let mut styles = tokens::flex();
    styles.extend(
        StyleObject::new()
            .style("fill", StyleProps::new().with(StyleProperty::Flex, 1))
            .style(
                "container",
                StyleProps::new()
                    .with(StyleProperty::Flex, 1)
                    .with(StyleProperty::BackgroundColor, &theme.colors.background),
            )
            .style("row", StyleProps::new().with(StyleProperty::FlexDirection, "row"))
            .style("column", StyleProps::new().with(StyleProperty::FlexDirection, "column"))
            .style("textAlignLeft", StyleProps::new().with(StyleProperty::TextAlign, "left"))
            .style("textAlignRight", StyleProps::new().with(StyleProperty::TextAlign, "right"))
            .style("textAlignCenter", StyleProps::new().with(StyleProperty::TextAlign, "center")),
    );
    styles
}

/// Style helpers bound to one theme
pub struct StyleUtils<'t> {
    cache: StyleCache<'t>,
    base: CompiledStyle,
}

impl<'t> StyleUtils<'t> {
    /// Create utilities for a theme
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            cache: StyleCache::new(theme),
            base: CompiledStyle::compile(base_styles(theme)),
        }
    }

    /// Theme these utilities are bound to
    pub fn theme(&self) -> &'t Theme {
        self.cache.theme()
    }

    /// Compiled base styles
    pub fn styles(&self) -> &CompiledStyle {
        &self.base
    }

    /// One base style by name
    pub fn style(&self, name: &str) -> Option<&StyleHandle> {
        self.base.get(name)
    }

    /// Create (or fetch) the compiled style for a descriptor
    pub fn create_themed_style<F>(&self, descriptor: F) -> Result<CompiledStyle>
    where
        F: FnOnce(&Theme) -> StyleObject,
    {
        self.cache.create_themed_style(descriptor)
    }

    /// The cache scope behind [`create_themed_style`](Self::create_themed_style)
    pub fn cache(&self) -> &StyleCache<'t> {
        &self.cache
    }

    /// Layers for a full-screen view with centered content
    ///
    /// Absolute fill, theme background, centered on both axes.
    pub fn fullscreen_centered_content(&self) -> StyleProps {
        let absolute_fill = StyleProps::new()
            .with(StyleProperty::Position, "absolute")
            .with(StyleProperty::Top, 0)
            .with(StyleProperty::Right, 0)
            .with(StyleProperty::Bottom, 0)
            .with(StyleProperty::Left, 0);
        let background =
            StyleProps::new().with(StyleProperty::BackgroundColor, &self.theme().colors.background);

        let mut layers = vec![absolute_fill, background];
        for name in ["justifyContentCenter", "alignItemsCenter"] {
            if let Some(handle) = self.base.get(name) {
                layers.push(handle.props().clone());
            }
        }
        StyleProps::compose(&layers)
    }
}

impl std::fmt::Debug for StyleUtils<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleUtils").field("cache", &self.cache).finish()
    }
}
