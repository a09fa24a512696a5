//! Typography variants
//!
//! Text styles are derived from the active theme's typography tokens.
//! Line heights are a fixed multiple of the font size: 1.2 for headings,
//! 1.5 for running text.

use serde::{Deserialize, Serialize};

use crate::style::{StyleObject, StyleProperty, StyleProps};
use crate::theme::{Color, ColorName, Theme};
use crate::variants::ThemeVariant;

/// Line height multiplier for headings
pub const HEADING_LINE_HEIGHT: f32 = 1.2;

/// Line height multiplier for body text
pub const BODY_LINE_HEIGHT: f32 = 1.5;

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight token ("400", "700", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Line height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Letter spacing in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    /// Text color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Text transform keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}

impl TextStyle {
    /// Create a text style with only a size
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            font_weight: None,
            line_height: None,
            letter_spacing: None,
            color: None,
            text_transform: None,
        }
    }

    /// Set font weight
    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Set line height as a multiple of `base`
    pub fn with_line_height(mut self, base: f32, multiplier: f32) -> Self {
        self.line_height = Some(base * multiplier);
        self
    }

    /// Set letter spacing
    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set text transform
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.text_transform = Some(transform.into());
        self
    }

    /// Scale size, line height and letter spacing (accessibility font scale)
    pub fn scale(&self, multiplier: f32) -> Self {
        Self {
            font_size: self.font_size * multiplier,
            line_height: self.line_height.map(|lh| lh * multiplier),
            letter_spacing: self.letter_spacing.map(|ls| ls * multiplier),
            ..self.clone()
        }
    }

    /// Convert to a style property bag
    pub fn to_props(&self) -> StyleProps {
        let mut props = StyleProps::new().with(StyleProperty::FontSize, self.font_size);
        if let Some(weight) = &self.font_weight {
            props.set(StyleProperty::FontWeight, weight);
        }
        if let Some(line_height) = self.line_height {
            props.set(StyleProperty::LineHeight, line_height);
        }
        if let Some(spacing) = self.letter_spacing {
            props.set(StyleProperty::LetterSpacing, spacing);
        }
        if let Some(color) = &self.color {
            props.set(StyleProperty::Color, color);
        }
        if let Some(transform) = &self.text_transform {
            props.set(StyleProperty::TextTransform, transform);
        }
        props
    }
}

// =============================================================================
// Font Weight
// =============================================================================

/// Named font weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// 400
    #[default]
    Regular,
    /// 500
    Medium,
    /// 600
    Semibold,
    /// 700
    Bold,
}

impl FontWeight {
    /// All weights
    pub const ALL: [FontWeight; 4] = [
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
    ];

    /// Style key used in [`typography_styles`]
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        }
    }

    /// Weight token for this theme
    pub fn value<'t>(&self, theme: &'t Theme) -> &'t str {
        let weights = &theme.typography.weights;
        match self {
            FontWeight::Regular => &weights.regular,
            FontWeight::Medium => &weights.medium,
            FontWeight::Semibold => &weights.semibold,
            FontWeight::Bold => &weights.bold,
        }
    }
}

// =============================================================================
// Typography Variants
// =============================================================================

/// Text variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    /// Largest heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
    /// Fourth-level heading
    H4,
    /// Screen or card title
    Title,
    /// Secondary-colored subtitle
    Subtitle,
    /// Small subtitle
    Subtitle1,
    /// Running text
    #[default]
    Body1,
    /// Smaller running text
    Body2,
    /// Annotations
    Caption,
    /// Uppercase label
    Overline,
    /// Primary-colored link text
    Link,
    /// Error message
    Error,
}

impl TypographyVariant {
    /// All variants
    pub const ALL: [TypographyVariant; 13] = [
        TypographyVariant::H1,
        TypographyVariant::H2,
        TypographyVariant::H3,
        TypographyVariant::H4,
        TypographyVariant::Title,
        TypographyVariant::Subtitle,
        TypographyVariant::Subtitle1,
        TypographyVariant::Body1,
        TypographyVariant::Body2,
        TypographyVariant::Caption,
        TypographyVariant::Overline,
        TypographyVariant::Link,
        TypographyVariant::Error,
    ];

    /// Style key used in [`typography_styles`]
    pub fn as_str(&self) -> &'static str {
        match self {
            TypographyVariant::H1 => "h1",
            TypographyVariant::H2 => "h2",
            TypographyVariant::H3 => "h3",
            TypographyVariant::H4 => "h4",
            TypographyVariant::Title => "title",
            TypographyVariant::Subtitle => "subtitle",
            TypographyVariant::Subtitle1 => "subtitle1",
            TypographyVariant::Body1 => "body1",
            TypographyVariant::Body2 => "body2",
            TypographyVariant::Caption => "caption",
            TypographyVariant::Overline => "overline",
            TypographyVariant::Link => "link",
            TypographyVariant::Error => "error",
        }
    }

    /// Resolved text style under `theme`
    pub fn text_style(&self, theme: &Theme) -> TextStyle {
        let sizes = &theme.typography.sizes;
        let weights = &theme.typography.weights;
        let colors = &theme.colors;

        match self {
            TypographyVariant::H1 => TextStyle::new(sizes.xxxl)
                .with_weight(&weights.bold)
                .with_line_height(sizes.xxxl, HEADING_LINE_HEIGHT),
            TypographyVariant::H2 => TextStyle::new(sizes.xxl)
                .with_weight(&weights.bold)
                .with_line_height(sizes.xxl, HEADING_LINE_HEIGHT),
            TypographyVariant::H3 => TextStyle::new(sizes.xl)
                .with_weight(&weights.semibold)
                .with_line_height(sizes.xl, HEADING_LINE_HEIGHT),
            TypographyVariant::H4 => TextStyle::new(sizes.lg)
                .with_weight(&weights.semibold)
                .with_line_height(sizes.lg, HEADING_LINE_HEIGHT),
            TypographyVariant::Title => TextStyle::new(sizes.lg)
                .with_weight(&weights.bold)
                .with_line_height(sizes.md, BODY_LINE_HEIGHT),
            TypographyVariant::Subtitle => TextStyle::new(sizes.md)
                .with_weight(&weights.medium)
                .with_color(&colors.text_secondary)
                .with_line_height(sizes.md, BODY_LINE_HEIGHT),
            TypographyVariant::Subtitle1 => TextStyle::new(sizes.sm)
                .with_weight(&weights.medium)
                .with_line_height(sizes.sm, BODY_LINE_HEIGHT),
            TypographyVariant::Body1 => {
                TextStyle::new(sizes.md).with_line_height(sizes.md, BODY_LINE_HEIGHT)
            }
            TypographyVariant::Body2 => {
                TextStyle::new(sizes.sm).with_line_height(sizes.sm, BODY_LINE_HEIGHT)
            }
            TypographyVariant::Caption => {
                TextStyle::new(sizes.xs).with_line_height(sizes.xs, BODY_LINE_HEIGHT)
            }
            TypographyVariant::Overline => TextStyle::new(sizes.xs)
                .with_weight(&weights.medium)
                .with_transform("uppercase")
                .with_letter_spacing(1.0),
            TypographyVariant::Link => TextStyle::new(sizes.md)
                .with_weight(&weights.medium)
                .with_color(&colors.primary),
            // error text keeps the smaller line height of body2
            TypographyVariant::Error => TextStyle::new(sizes.md)
                .with_weight(&weights.medium)
                .with_color(&colors.error)
                .with_line_height(sizes.sm, BODY_LINE_HEIGHT),
        }
    }
}

impl ThemeVariant for TypographyVariant {
    fn style(&self, theme: &Theme) -> StyleProps {
        self.text_style(theme).to_props()
    }

    fn from_name(name: &str) -> Self {
        TypographyVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == name)
            .unwrap_or_default()
    }
}

/// Descriptor producing `base`, one entry per variant and one per weight
pub fn typography_styles(theme: &Theme) -> StyleObject {
    let mut styles = StyleObject::new().style(
        "base",
        StyleProps::new().with(StyleProperty::Color, &theme.colors.text),
    );
    for variant in TypographyVariant::ALL {
        styles.insert(variant.as_str(), variant.style(theme));
    }
    for weight in FontWeight::ALL {
        styles.insert(
            weight.as_str(),
            StyleProps::new().with(StyleProperty::FontWeight, weight.value(theme)),
        );
    }
    styles
}

/// Options layered on top of a variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Weight override; applied after the variant
    pub weight: Option<FontWeight>,
    /// Center-align the text
    pub center: bool,
    /// Theme color override
    pub color: Option<ColorName>,
}

/// Flattened text style: base, variant, weight, alignment, color
///
/// The weight defaults to regular and is always applied, so it overrides
/// any weight the variant sets.
pub fn text_props(theme: &Theme, variant: TypographyVariant, options: TextOptions) -> StyleProps {
    let weight = options.weight.unwrap_or_default();
    let mut props = StyleProps::new().with(StyleProperty::Color, &theme.colors.text);
    props.merge(&variant.style(theme));
    props.set(StyleProperty::FontWeight, weight.value(theme));
    if options.center {
        props.set(StyleProperty::TextAlign, "center");
    }
    if let Some(color) = options.color {
        props.set(StyleProperty::Color, theme.colors.get(color));
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;
    use crate::theme::{resolve, ThemeMode};

    #[test]
    fn test_heading_sizes() {
        let theme = resolve(ThemeMode::Light);
        let h1 = TypographyVariant::H1.text_style(theme);
        assert_eq!(h1.font_size, 32.0);
        assert_eq!(h1.font_weight.as_deref(), Some("700"));
        assert!((h1.line_height.unwrap() - 38.4).abs() < 1e-4);

        let h4 = TypographyVariant::H4.text_style(theme);
        assert_eq!(h4.font_size, 18.0);
        assert_eq!(h4.font_weight.as_deref(), Some("600"));
    }

    #[test]
    fn test_body_line_heights() {
        let theme = resolve(ThemeMode::Light);
        assert_eq!(TypographyVariant::Body1.text_style(theme).line_height, Some(24.0));
        assert_eq!(TypographyVariant::Body2.text_style(theme).line_height, Some(21.0));
        assert_eq!(TypographyVariant::Caption.text_style(theme).line_height, Some(18.0));
        assert_eq!(TypographyVariant::Error.text_style(theme).line_height, Some(21.0));
        assert_eq!(TypographyVariant::Link.text_style(theme).line_height, None);
    }

    #[test]
    fn test_overline() {
        let theme = resolve(ThemeMode::Dark);
        let style = TypographyVariant::Overline.style(theme);
        assert_eq!(style.get(StyleProperty::TextTransform), Some(&StyleValue::from("uppercase")));
        assert_eq!(style.get(StyleProperty::LetterSpacing), Some(&StyleValue::Number(1.0)));
    }

    #[test]
    fn test_colored_variants_follow_theme() {
        for mode in ThemeMode::ALL {
            let theme = resolve(mode);
            assert_eq!(
                TypographyVariant::Link.text_style(theme).color.as_deref(),
                Some(theme.colors.primary.as_str())
            );
            assert_eq!(
                TypographyVariant::Error.text_style(theme).color.as_deref(),
                Some(theme.colors.error.as_str())
            );
            assert_eq!(
                TypographyVariant::Subtitle.text_style(theme).color.as_deref(),
                Some(theme.colors.text_secondary.as_str())
            );
        }
    }

    #[test]
    fn test_from_name_falls_back_to_body1() {
        assert_eq!(TypographyVariant::from_name("h2"), TypographyVariant::H2);
        assert_eq!(TypographyVariant::from_name("subtitle1"), TypographyVariant::Subtitle1);
        assert_eq!(TypographyVariant::from_name("display"), TypographyVariant::Body1);
        assert_eq!(TypographyVariant::default(), TypographyVariant::Body1);
    }

    #[test]
    fn test_scale() {
        let theme = resolve(ThemeMode::Light);
        let scaled = TypographyVariant::Body1.text_style(theme).scale(1.5);
        assert_eq!(scaled.font_size, 24.0);
        assert_eq!(scaled.line_height, Some(36.0));
    }

    #[test]
    fn test_typography_styles_descriptor() {
        let theme = resolve(ThemeMode::Light);
        let styles = typography_styles(theme);
        assert_eq!(styles.len(), 1 + TypographyVariant::ALL.len() + FontWeight::ALL.len());
        assert_eq!(
            styles.get("bold").and_then(|s| s.get(StyleProperty::FontWeight)),
            Some(&StyleValue::from("700"))
        );
        assert!(styles.get("caption").is_some());
    }

    #[test]
    fn test_text_props_layers() {
        let theme = resolve(ThemeMode::Dark);
        let plain = text_props(theme, TypographyVariant::H1, TextOptions::default());
        // explicit weight prop wins over the variant weight
        assert_eq!(plain.get(StyleProperty::FontWeight), Some(&StyleValue::from("400")));
        assert_eq!(
            plain.get(StyleProperty::Color),
            Some(&StyleValue::from(theme.colors.text.as_str()))
        );

        let options = TextOptions {
            weight: Some(FontWeight::Semibold),
            center: true,
            color: Some(ColorName::Primary),
        };
        let styled = text_props(theme, TypographyVariant::Body2, options);
        assert_eq!(styled.get(StyleProperty::FontWeight), Some(&StyleValue::from("600")));
        assert_eq!(styled.get(StyleProperty::TextAlign), Some(&StyleValue::from("center")));
        assert_eq!(
            styled.get(StyleProperty::Color),
            Some(&StyleValue::from(theme.colors.primary.as_str()))
        );
    }
}
