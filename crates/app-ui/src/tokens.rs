//! Design tokens for the storefront
//!
//! This module provides the fixed vocabulary of design constants: palette,
//! spacing, gap, typography, border radius, shadows and flex presets.
//!
//! Key sets never depend on the platform. Only values may: font families
//! and shadow fragments are derived per [`Platform`], so a style written
//! against one platform's tokens is valid against every other.

use app_platform::Platform;
use serde::{Deserialize, Serialize};

use crate::style::{StyleObject, StyleProperty, StyleProps, StyleValue};

// =============================================================================
// Palette
// =============================================================================

/// Raw palette colors
pub mod palette {
    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
    /// Pure black
    pub const BLACK: &str = "#000000";
    /// Fully transparent
    pub const TRANSPARENT: &str = "transparent";

    /// Brand blue
    pub const PRIMARY: &str = "#3D93F8";
    /// Pressed brand blue
    pub const PRIMARY_DARK: &str = "#0596c7";
    /// Tinted brand background
    pub const PRIMARY_LIGHT: &str = "#e6f6fb";

    /// Accent orange
    pub const SECONDARY: &str = "#F97316";
    /// Pressed accent
    pub const SECONDARY_DARK: &str = "#ea580c";
    /// Tinted accent background
    pub const SECONDARY_LIGHT: &str = "#fef3c7";

    /// Neutral base gray
    pub const GRAY: &str = "#F5F5F5";
    /// Gray 50
    pub const GRAY_50: &str = "#F9FAFB";
    /// Gray 100
    pub const GRAY_100: &str = "#F3F4F6";
    /// Gray 200
    pub const GRAY_200: &str = "#E5E7EB";
    /// Gray 300
    pub const GRAY_300: &str = "#D1D5DB";
    /// Gray 400
    pub const GRAY_400: &str = "#9CA3AF";
    /// Gray 500
    pub const GRAY_500: &str = "#6B7280";
    /// Gray 600
    pub const GRAY_600: &str = "#4B5563";
    /// Gray 700
    pub const GRAY_700: &str = "#374151";
    /// Gray 800
    pub const GRAY_800: &str = "#1F2937";
    /// Gray 900
    pub const GRAY_900: &str = "#111827";

    /// Success green
    pub const SUCCESS: &str = "#10B981";
    /// Warning amber
    pub const WARNING: &str = "#FBBF24";
    /// Error red
    pub const ERROR: &str = "#EA4335";
    /// Tinted error background
    pub const ERROR_LIGHT: &str = "#FEF2F2";
    /// Informational blue
    pub const INFO: &str = "#3B82F6";

    /// Modal scrim
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.5)";
    /// Shadow color
    pub const SHADOW: &str = "#000000";
}

// =============================================================================
// Size Scales
// =============================================================================

/// Keys shared by the spacing and gap scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    /// 0
    None,
    /// Extra small
    Xs,
    /// Small
    Sm,
    /// Medium
    Md,
    /// Large
    Lg,
    /// Extra large
    Xl,
    /// 2x large
    Xxl,
    /// 3x large
    Xxxl,
}

impl SizeKey {
    /// Every key, smallest first
    pub const ALL: [SizeKey; 8] = [
        SizeKey::None,
        SizeKey::Xs,
        SizeKey::Sm,
        SizeKey::Md,
        SizeKey::Lg,
        SizeKey::Xl,
        SizeKey::Xxl,
        SizeKey::Xxxl,
    ];

    /// Parse a key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(SizeKey::None),
            "xs" => Some(SizeKey::Xs),
            "sm" => Some(SizeKey::Sm),
            "md" => Some(SizeKey::Md),
            "lg" => Some(SizeKey::Lg),
            "xl" => Some(SizeKey::Xl),
            "xxl" => Some(SizeKey::Xxl),
            "xxxl" => Some(SizeKey::Xxxl),
            _ => None,
        }
    }
}

/// Numeric scale addressed by [`SizeKey`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeScale {
    /// none
    pub none: f32,
    /// xs
    pub xs: f32,
    /// sm
    pub sm: f32,
    /// md
    pub md: f32,
    /// lg
    pub lg: f32,
    /// xl
    pub xl: f32,
    /// xxl
    pub xxl: f32,
    /// xxxl
    pub xxxl: f32,
}

impl SizeScale {
    /// Value for a key
    pub fn get(&self, key: SizeKey) -> f32 {
        match key {
            SizeKey::None => self.none,
            SizeKey::Xs => self.xs,
            SizeKey::Sm => self.sm,
            SizeKey::Md => self.md,
            SizeKey::Lg => self.lg,
            SizeKey::Xl => self.xl,
            SizeKey::Xxl => self.xxl,
            SizeKey::Xxxl => self.xxxl,
        }
    }

    /// Negated value for a key (pulls content outward)
    pub fn negative(&self, key: SizeKey) -> f32 {
        -self.get(key)
    }

    /// Look up by name; `-md` style names give negative values
    pub fn by_name(&self, name: &str) -> Option<f32> {
        match name.strip_prefix('-') {
            Some(rest) => SizeKey::from_name(rest).map(|key| self.negative(key)),
            None => SizeKey::from_name(name).map(|key| self.get(key)),
        }
    }
}

/// Spacing scale for padding and margin
pub fn spacing() -> SizeScale {
    SizeScale {
        none: 0.0,
        xs: 4.0,
        sm: 8.0,
        md: 16.0,
        lg: 24.0,
        xl: 32.0,
        xxl: 40.0,
        xxxl: 48.0,
    }
}

/// Gap scale for spacing between children of a container
pub fn gap() -> SizeScale {
    SizeScale {
        none: 0.0,
        xs: 4.0,
        sm: 8.0,
        md: 12.0,
        lg: 16.0,
        xl: 24.0,
        xxl: 32.0,
        xxxl: 40.0,
    }
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font size scale in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// 12px
    pub xs: f32,
    /// 14px
    pub sm: f32,
    /// 16px
    pub md: f32,
    /// 18px
    pub lg: f32,
    /// 20px
    pub xl: f32,
    /// 24px
    pub xxl: f32,
    /// 32px
    pub xxxl: f32,
}

/// Font weight tokens, as the numeric strings the native layer expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    /// "400"
    pub regular: String,
    /// "500"
    pub medium: String,
    /// "600"
    pub semibold: String,
    /// "700"
    pub bold: String,
}

/// Font families; values depend on the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    /// Body and UI text
    pub primary: String,
    /// Monospaced text
    pub mono: String,
}

/// Typography tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    /// Size scale
    pub sizes: FontSizes,
    /// Weight scale
    pub weights: FontWeights,
    /// Families
    pub families: FontFamilies,
}

/// Typography tokens for a platform
pub fn typography(platform: Platform) -> TypographyTokens {
    TypographyTokens {
        sizes: FontSizes {
            xs: 12.0,
            sm: 14.0,
            md: 16.0,
            lg: 18.0,
            xl: 20.0,
            xxl: 24.0,
            xxxl: 32.0,
        },
        weights: FontWeights {
            regular: "400".to_string(),
            medium: "500".to_string(),
            semibold: "600".to_string(),
            bold: "700".to_string(),
        },
        families: FontFamilies {
            primary: platform.select("System", "Roboto", "System").to_string(),
            mono: platform.select("Courier", "monospace", "monospace").to_string(),
        },
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    /// 0px
    pub none: f32,
    /// 4px
    pub sm: f32,
    /// 8px
    pub md: f32,
    /// 12px
    pub lg: f32,
    /// 16px
    pub xl: f32,
    /// Fully rounded
    pub pill: f32,
}

/// Border radius tokens
pub fn border_radius() -> RadiusScale {
    RadiusScale {
        none: 0.0,
        sm: 4.0,
        md: 8.0,
        lg: 12.0,
        xl: 16.0,
        pill: 9999.0,
    }
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Elevation levels; each maps to a platform-specific style fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadows {
    /// No shadow
    pub none: StyleProps,
    /// Small shadow
    pub sm: StyleProps,
    /// Medium shadow
    pub md: StyleProps,
    /// Large shadow
    pub lg: StyleProps,
}

/// Shadow fragment for one elevation level
///
/// iOS draws shadows from color/offset/opacity/radius, Android from an
/// elevation, and other platforms get an empty fragment.
fn shadow(platform: Platform, offset_y: f64, radius: f64, elevation: f64) -> StyleProps {
    match platform {
        Platform::Ios => StyleProps::new()
            .with(StyleProperty::ShadowColor, palette::BLACK)
            .with(StyleProperty::ShadowOffset, StyleValue::Size { width: 0.0, height: offset_y })
            .with(StyleProperty::ShadowOpacity, 0.15)
            .with(StyleProperty::ShadowRadius, radius),
        Platform::Android => StyleProps::new().with(StyleProperty::Elevation, elevation),
        Platform::Web | Platform::Desktop => StyleProps::new(),
    }
}

/// Shadow tokens for a platform
pub fn shadows(platform: Platform) -> Shadows {
    Shadows {
        none: StyleProps::new()
            .with(StyleProperty::ShadowColor, palette::TRANSPARENT)
            .with(StyleProperty::ShadowOffset, StyleValue::Size { width: 0.0, height: 0.0 })
            .with(StyleProperty::ShadowOpacity, 0)
            .with(StyleProperty::ShadowRadius, 0)
            .with(StyleProperty::Elevation, 0),
        sm: shadow(platform, 1.0, 2.0, 2.0),
        md: shadow(platform, 2.0, 4.0, 4.0),
        lg: shadow(platform, 4.0, 8.0, 8.0),
    }
}

// =============================================================================
// Flex Presets
// =============================================================================

/// Flexbox utility styles
pub fn flex() -> StyleObject {
    use StyleProperty::*;

    let one = |property: StyleProperty, value: StyleValue| StyleProps::new().with(property, value);
    let mut presets = StyleObject::new()
        .style("flexReset", one(Flex, StyleValue::Unset))
        .style("flexRow", one(FlexDirection, "row".into()))
        .style("flexColumn", one(FlexDirection, "column".into()))
        .style("flexColumnReverse", one(FlexDirection, "column-reverse".into()))
        .style("flexWrap", one(FlexWrap, "wrap".into()))
        .style("justifyContentCenter", one(JustifyContent, "center".into()))
        .style("justifyContentStart", one(JustifyContent, "flex-start".into()))
        .style("justifyContentEnd", one(JustifyContent, "flex-end".into()))
        .style("justifyContentBetween", one(JustifyContent, "space-between".into()))
        .style("justifyContentAround", one(JustifyContent, "space-around".into()))
        .style("alignSelfStretch", one(AlignSelf, "stretch".into()))
        .style("alignSelfCenter", one(AlignSelf, "center".into()))
        .style("alignSelfStart", one(AlignSelf, "flex-start".into()))
        .style("alignSelfEnd", one(AlignSelf, "flex-end".into()))
        .style("alignItemsStart", one(AlignItems, "flex-start".into()))
        .style("alignItemsCenter", one(AlignItems, "center".into()))
        .style("alignItemsEnd", one(AlignItems, "flex-end".into()))
        .style("alignItemsBaseline", one(AlignItems, "baseline".into()))
        .style("alignItemsStretch", one(AlignItems, "stretch".into()))
        .style("flexBasisAuto", one(FlexBasis, "auto".into()))
        .style("flexBasis100", one(FlexBasis, "100%".into()))
        .style("flexBasis0", one(FlexBasis, StyleValue::from(0)));

    for factor in 0..=5i32 {
        presets.insert(format!("flex{factor}"), one(Flex, StyleValue::from(factor)));
    }
    for factor in [0i32, 1, 2, 4] {
        presets.insert(format!("flexGrow{factor}"), one(FlexGrow, StyleValue::from(factor)));
    }
    for factor in [0i32, 1, 2] {
        presets.insert(format!("flexShrink{factor}"), one(FlexShrink, StyleValue::from(factor)));
    }

    presets
}

/// Common layout shortcuts
pub fn presets() -> StyleObject {
    StyleObject::new()
        .style(
            "center",
            StyleProps::new()
                .with(StyleProperty::JustifyContent, "center")
                .with(StyleProperty::AlignItems, "center"),
        )
        .style("row", StyleProps::new().with(StyleProperty::FlexDirection, "row"))
}

// =============================================================================
// Registry
// =============================================================================

/// Every token scale for one platform
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRegistry {
    /// Platform the values were derived for
    pub platform: Platform,
    /// Spacing scale
    pub spacing: SizeScale,
    /// Gap scale
    pub gap: SizeScale,
    /// Typography
    pub typography: TypographyTokens,
    /// Border radii
    pub border_radius: RadiusScale,
    /// Shadows
    pub shadows: Shadows,
}

impl TokenRegistry {
    /// Tokens for a platform
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            spacing: spacing(),
            gap: gap(),
            typography: typography(platform),
            border_radius: border_radius(),
            shadows: shadows(platform),
        }
    }

    /// Tokens for the platform of the current build
    pub fn current() -> Self {
        Self::for_platform(Platform::current())
    }
}
