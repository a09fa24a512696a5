//! Theme-dependent component variants
//!
//! Each variant family is a closed enum with an explicit `Default` arm.
//! Looking up a variant by name never fails: unknown names resolve to
//! `Default`, and every arm maps to a style through an exhaustive match.

use serde::{Deserialize, Serialize};

use crate::style::{StyleObject, StyleProperty, StyleProps};
use crate::theme::Theme;

/// A variant whose style depends on the theme
pub trait ThemeVariant: Copy {
    /// Style for this variant under `theme`
    fn style(&self, theme: &Theme) -> StyleProps;

    /// Resolve a variant name, falling back to the default arm
    fn from_name(name: &str) -> Self;
}

/// Resolve a variant by name and style it in one step
pub fn resolve_variant<V: ThemeVariant>(name: &str, theme: &Theme) -> StyleProps {
    V::from_name(name).style(theme)
}

// =============================================================================
// Button Variants
// =============================================================================

/// Visual button variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Main call to action in the brand color
    Primary,
    /// Alternative action on the surface color
    Secondary,
    /// Bordered, transparent background
    Outline,
    /// Text only
    Ghost,
    /// Fallback; looks like [`ButtonVariant::Primary`]
    #[default]
    Default,
}

impl ButtonVariant {
    /// Text style paired with this container variant
    pub fn text_style(&self, theme: &Theme) -> StyleProps {
        let color = match self {
            ButtonVariant::Primary | ButtonVariant::Default => &theme.colors.text_inverse,
            ButtonVariant::Secondary | ButtonVariant::Outline | ButtonVariant::Ghost => {
                &theme.colors.text
            }
        };
        StyleProps::new().with(StyleProperty::Color, color)
    }
}

impl ThemeVariant for ButtonVariant {
    fn style(&self, theme: &Theme) -> StyleProps {
        let (background, border, width) = match self {
            ButtonVariant::Primary | ButtonVariant::Default => {
                (theme.colors.primary.as_str(), theme.colors.transparent.as_str(), 0)
            }
            ButtonVariant::Secondary => {
                (theme.colors.surface.as_str(), theme.colors.transparent.as_str(), 0)
            }
            ButtonVariant::Outline => {
                (theme.colors.transparent.as_str(), theme.colors.border.as_str(), 1)
            }
            ButtonVariant::Ghost => {
                (theme.colors.transparent.as_str(), theme.colors.transparent.as_str(), 0)
            }
        };

        StyleProps::new()
            .with(StyleProperty::BackgroundColor, background)
            .with(StyleProperty::BorderColor, border)
            .with(StyleProperty::BorderWidth, width)
    }

    fn from_name(name: &str) -> Self {
        match name {
            "primary" => ButtonVariant::Primary,
            "secondary" => ButtonVariant::Secondary,
            "outline" => ButtonVariant::Outline,
            "ghost" => ButtonVariant::Ghost,
            _ => ButtonVariant::Default,
        }
    }
}

/// Button size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact
    Small,
    /// Standard
    Medium,
    /// Prominent
    Large,
    /// Fallback; same as [`ButtonSize::Medium`]
    #[default]
    Default,
}

impl ThemeVariant for ButtonSize {
    fn style(&self, theme: &Theme) -> StyleProps {
        let (padding, font_size) = match self {
            ButtonSize::Small => (theme.spacing.sm, 14),
            ButtonSize::Medium | ButtonSize::Default => (theme.spacing.md, 16),
            ButtonSize::Large => (theme.spacing.lg, 18),
        };

        StyleProps::new()
            .with(StyleProperty::Padding, padding)
            .with(StyleProperty::FontSize, font_size)
    }

    fn from_name(name: &str) -> Self {
        match name {
            "small" => ButtonSize::Small,
            "medium" => ButtonSize::Medium,
            "large" => ButtonSize::Large,
            _ => ButtonSize::Default,
        }
    }
}

/// Shared button styles: base shape, label, disabled state
pub fn button_styles(theme: &Theme) -> StyleObject {
    StyleObject::new()
        .style(
            "button",
            StyleProps::new()
                .with(StyleProperty::BorderRadius, theme.border_radius.md)
                .with(StyleProperty::AlignItems, "center")
                .with(StyleProperty::JustifyContent, "center")
                .with(StyleProperty::FlexDirection, "row")
                .with(StyleProperty::Gap, theme.spacing.xs),
        )
        .style(
            "text",
            StyleProps::new().with(StyleProperty::FontWeight, &theme.typography.weights.semibold),
        )
        .style(
            "disabled",
            StyleProps::new()
                .with(StyleProperty::BackgroundColor, &theme.colors.primary_disabled)
                .with(StyleProperty::BorderColor, &theme.colors.border),
        )
        .style(
            "disabledText",
            StyleProps::new().with(StyleProperty::Color, &theme.colors.text_disabled),
        )
}

/// Flattened container style for a button in a given state
pub fn button_container(
    theme: &Theme,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    pressed: bool,
) -> StyleProps {
    let shared = button_styles(theme);
    let mut style = shared.get("button").cloned().unwrap_or_default();
    style.merge(&variant.style(theme));
    style.merge(&size.style(theme));
    if disabled {
        if let Some(disabled) = shared.get("disabled") {
            style.merge(disabled);
        }
    }
    style.set(StyleProperty::Opacity, if pressed { 0.8 } else { 1.0 });
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;
    use crate::theme::{resolve, ThemeMode};

    fn text(value: &str) -> Option<StyleValue> {
        Some(StyleValue::from(value))
    }

    #[test]
    fn test_button_variant_from_name() {
        assert_eq!(ButtonVariant::from_name("outline"), ButtonVariant::Outline);
        assert_eq!(ButtonVariant::from_name("ghost"), ButtonVariant::Ghost);
        assert_eq!(ButtonVariant::from_name("neon"), ButtonVariant::Default);
        assert_eq!(ButtonVariant::from_name(""), ButtonVariant::Default);
    }

    #[test]
    fn test_default_variant_matches_primary() {
        let theme = resolve(ThemeMode::Light);
        assert_eq!(ButtonVariant::Default.style(theme), ButtonVariant::Primary.style(theme));
        assert_eq!(
            ButtonVariant::Default.text_style(theme),
            ButtonVariant::Primary.text_style(theme)
        );
        assert_eq!(ButtonSize::Default.style(theme), ButtonSize::Medium.style(theme));
    }

    #[test]
    fn test_outline_variant() {
        let theme = resolve(ThemeMode::Dark);
        let style = ButtonVariant::Outline.style(theme);
        assert_eq!(style.get(StyleProperty::BorderColor).cloned(), text(&theme.colors.border));
        assert_eq!(style.get(StyleProperty::BorderWidth), Some(&StyleValue::Number(1.0)));
        assert_eq!(style.get(StyleProperty::BackgroundColor).cloned(), text("transparent"));
    }

    #[test]
    fn test_button_text_colors() {
        let theme = resolve(ThemeMode::Light);
        assert_eq!(
            ButtonVariant::Primary.text_style(theme).get(StyleProperty::Color).cloned(),
            text(&theme.colors.text_inverse)
        );
        assert_eq!(
            ButtonVariant::Ghost.text_style(theme).get(StyleProperty::Color).cloned(),
            text(&theme.colors.text)
        );
    }

    #[test]
    fn test_button_sizes() {
        let theme = resolve(ThemeMode::Light);
        let small = ButtonSize::from_name("small").style(theme);
        assert_eq!(small.get(StyleProperty::Padding), Some(&StyleValue::Number(8.0)));
        assert_eq!(small.get(StyleProperty::FontSize), Some(&StyleValue::Number(14.0)));

        let large = resolve_variant::<ButtonSize>("large", theme);
        assert_eq!(large.get(StyleProperty::Padding), Some(&StyleValue::Number(24.0)));
        assert_eq!(ButtonSize::from_name("gigantic"), ButtonSize::Default);
    }

    #[test]
    fn test_variants_follow_theme() {
        let light = ButtonVariant::Secondary.style(resolve(ThemeMode::Light));
        let dark = ButtonVariant::Secondary.style(resolve(ThemeMode::Dark));
        assert_ne!(light, dark);
    }

    #[test]
    fn test_button_container_states() {
        let theme = resolve(ThemeMode::Light);
        let idle = button_container(theme, ButtonVariant::Primary, ButtonSize::Medium, false, false);
        assert_eq!(idle.get(StyleProperty::BackgroundColor).cloned(), text(&theme.colors.primary));
        assert_eq!(idle.get(StyleProperty::Opacity), Some(&StyleValue::Number(1.0)));
        assert_eq!(idle.get(StyleProperty::BorderRadius), Some(&StyleValue::Number(8.0)));

        let pressed = button_container(theme, ButtonVariant::Primary, ButtonSize::Medium, false, true);
        assert_eq!(pressed.get(StyleProperty::Opacity), Some(&StyleValue::Number(0.8)));

        let disabled = button_container(theme, ButtonVariant::Primary, ButtonSize::Small, true, false);
        assert_eq!(
            disabled.get(StyleProperty::BackgroundColor).cloned(),
            text(&theme.colors.primary_disabled)
        );
    }
}
