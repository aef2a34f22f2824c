use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use gpui::{BoxShadow, Pixels, Rgba, SharedString, point, px};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use super::deserializers::de_pixels;
use crate::{
    theme::{ThemeMode, ThemeTypography},
    utils::RgbaExt,
};

/// A fully resolved theme: shared palette, layout scales, typography, and one
/// semantic color record per mode.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub palette: ThemePalette,
    pub layout: ThemeLayout,
    pub typography: ThemeTypography,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme file and resolves every named color reference against
    /// its palette.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        let spec: ThemeSpec = serde_json::from_str(str.as_ref())?;
        spec.resolve()
    }

    /// Derives the state consumed by components for one render pass.
    ///
    /// Pure: the same mode and system signal always produce the same
    /// snapshot, and both variants carry the full semantic record, so a
    /// token lookup can never come up empty across a mode switch.
    pub fn snapshot(&self, mode: ThemeMode, system_is_dark: bool) -> ThemeSnapshot<'_> {
        let is_dark = mode.resolve(system_is_dark);

        ThemeSnapshot {
            is_dark,
            colors: self.variants.active(is_dark),
            palette: &self.palette,
            layout: &self.layout,
            typography: &self.typography,
        }
    }
}

impl gpui::Global for Theme {}

/// Everything a component reads during a single render pass.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSnapshot<'a> {
    pub is_dark: bool,
    pub colors: &'a ThemeColors,
    pub palette: &'a ThemePalette,
    pub layout: &'a ThemeLayout,
    pub typography: &'a ThemeTypography,
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown color reference {0:?}")]
    UnknownColor(SharedString),

    #[error("a theme must define both a light and a dark variant")]
    MissingVariant,
}

/// The raw shape of a theme file, before color references are resolved.
#[derive(Deserialize)]
struct ThemeSpec {
    name: SharedString,
    palette: ThemePalette,
    layout: ThemeLayout,
    typography: ThemeTypography,
    variants: Vec<ThemeVariantSpec>,
}

#[derive(Deserialize)]
struct ThemeVariantSpec {
    kind: ThemeVariantKind,
    colors: ThemeColorsOf<ColorRef>,
}

impl ThemeSpec {
    fn resolve(self) -> Result<Theme, ThemeError> {
        let mut light = None;
        let mut dark = None;

        for variant in &self.variants {
            let colors = variant.colors.resolve(&self.palette)?;

            match variant.kind {
                ThemeVariantKind::Light => light = Some(colors),
                ThemeVariantKind::Dark => dark = Some(colors),
            }
        }

        let (Some(light), Some(dark)) = (light, dark) else {
            return Err(ThemeError::MissingVariant);
        };

        Ok(Theme {
            name: self.name,
            palette: self.palette,
            layout: self.layout,
            typography: self.typography,
            variants: ThemeVariants { light, dark },
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

/// Both semantic color records of a theme.
///
/// Light and dark share one record type, so the semantic key sets are
/// identical across modes by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeVariants {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

impl ThemeVariants {
    pub fn active(&self, is_dark: bool) -> &ThemeColors {
        if is_dark { &self.dark } else { &self.light }
    }
}

/// A color entry in a theme file: either a literal, or a name resolved
/// against the palette and its aliases. A literal always wins over whatever
/// the palette would have produced for the same role.
#[derive(Debug, Clone, PartialEq)]
enum ColorRef {
    Literal(Rgba),
    Named(SharedString),
}

impl ColorRef {
    fn resolve(&self, palette: &ThemePalette) -> Result<Rgba, ThemeError> {
        match self {
            ColorRef::Literal(color) => Ok(*color),
            ColorRef::Named(name) => palette
                .resolve(name)
                .ok_or_else(|| ThemeError::UnknownColor(name.clone())),
        }
    }
}

impl<'de> Deserialize<'de> for ColorRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;

        if string.starts_with('#') {
            let color = Rgba::try_from(string.as_str())
                .map_err(|_| D::Error::custom(format!("invalid color literal {string:?}")))?;

            return Ok(ColorRef::Literal(color));
        }

        Ok(ColorRef::Named(string.into()))
    }
}

pub type ThemeColors = ThemeColorsOf<Rgba>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColorsOf<C> {
    pub background: C,
    pub text: ThemeTextColorsOf<C>,
    pub accent: ThemeAccentColorsOf<C>,
    pub surface: ThemeSurfaceColorsOf<C>,
    pub controls: ThemeControlColorsOf<C>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeTextColorsOf<C> {
    pub primary: C,
    pub secondary: C,
    pub tertiary: C,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeAccentColorsOf<C> {
    pub primary: C,
    pub secondary: C,
    pub success: C,
    pub warning: C,
    pub error: C,
    pub info: C,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeSurfaceColorsOf<C> {
    pub card: C,
    pub border: C,
    pub divider: C,
    pub disabled: C,
}

/// Window control accents (macOS traffic lights).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeControlColorsOf<C> {
    pub close: C,
    pub minimize: C,
    pub expand: C,
}

impl ThemeColorsOf<ColorRef> {
    fn resolve(&self, palette: &ThemePalette) -> Result<ThemeColors, ThemeError> {
        Ok(ThemeColors {
            background: self.background.resolve(palette)?,
            text: ThemeTextColorsOf {
                primary: self.text.primary.resolve(palette)?,
                secondary: self.text.secondary.resolve(palette)?,
                tertiary: self.text.tertiary.resolve(palette)?,
            },
            accent: ThemeAccentColorsOf {
                primary: self.accent.primary.resolve(palette)?,
                secondary: self.accent.secondary.resolve(palette)?,
                success: self.accent.success.resolve(palette)?,
                warning: self.accent.warning.resolve(palette)?,
                error: self.accent.error.resolve(palette)?,
                info: self.accent.info.resolve(palette)?,
            },
            surface: ThemeSurfaceColorsOf {
                card: self.surface.card.resolve(palette)?,
                border: self.surface.border.resolve(palette)?,
                divider: self.surface.divider.resolve(palette)?,
                disabled: self.surface.disabled.resolve(palette)?,
            },
            controls: ThemeControlColorsOf {
                close: self.controls.close.resolve(palette)?,
                minimize: self.controls.minimize.resolve(palette)?,
                expand: self.controls.expand.resolve(palette)?,
            },
        })
    }
}

/// The shared hue families every theme variant draws from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemePalette {
    pub orange: ColorScale,
    pub green: ColorScale,
    pub pink: ColorScale,
    pub blue: ColorScale,
    pub purple: ColorScale,
    pub black: ColorScale,
    pub black_alpha: ColorScale,
    pub white: ColorScale,
    pub close: Rgba,
    pub minimize: Rgba,
    pub expand: Rgba,
}

impl ThemePalette {
    /// Resolves a palette reference (`"blue.2"`) or alias (`"blue"`,
    /// `"blue2"`, `"gray"`). Bare family names resolve to the base shade.
    pub fn resolve(&self, name: &str) -> Option<Rgba> {
        if let Some((family, shade)) = name.split_once('.') {
            return self.family(family)?.shade(shade.parse().ok()?);
        }

        match name {
            "gray" => return Some(self.black.s5),
            "close" => return Some(self.close),
            "minimize" => return Some(self.minimize),
            "expand" => return Some(self.expand),
            _ => {}
        }

        let (family, shade) = match name.find(|c: char| c.is_ascii_digit()) {
            Some(split) => (&name[..split], name[split..].parse().ok()?),
            None => (name, 1),
        };

        self.family(family)?.shade(shade)
    }

    fn family(&self, name: &str) -> Option<&ColorScale> {
        match name {
            "orange" => Some(&self.orange),
            "green" => Some(&self.green),
            "pink" => Some(&self.pink),
            "blue" => Some(&self.blue),
            "purple" => Some(&self.purple),
            "black" => Some(&self.black),
            "black_alpha" => Some(&self.black_alpha),
            "white" => Some(&self.white),
            _ => None,
        }
    }
}

/// Five shades of a hue family, strongest first, with an optional sixth for
/// families that need the extra step.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ColorScale {
    #[serde(rename = "1")]
    pub s1: Rgba,
    #[serde(rename = "2")]
    pub s2: Rgba,
    #[serde(rename = "3")]
    pub s3: Rgba,
    #[serde(rename = "4")]
    pub s4: Rgba,
    #[serde(rename = "5")]
    pub s5: Rgba,
    #[serde(rename = "6", default, skip_serializing_if = "Option::is_none")]
    pub s6: Option<Rgba>,
}

impl ColorScale {
    pub fn shade(&self, index: u8) -> Option<Rgba> {
        match index {
            1 => Some(self.s1),
            2 => Some(self.s2),
            3 => Some(self.s3),
            4 => Some(self.s4),
            5 => Some(self.s5),
            6 => self.s6,
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub spacing: ThemeSpacing,
    pub corner_radii: ThemeCornerRadii,
    pub shadows: ThemeShadows,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
}

/// Spacing scale derived from a single base unit.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSpacing {
    #[serde(deserialize_with = "de_pixels")]
    pub base_unit: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub none: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xxxl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub huge: Pixels,
}

impl ThemeSpacing {
    /// An arbitrary multiple of the base unit, for spots the named scale
    /// doesn't cover.
    pub fn custom(&self, multiplier: f32) -> Pixels {
        self.base_unit * multiplier
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub none: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xs: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub pill: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeShadows {
    pub sm: ThemeShadow,
    pub md: ThemeShadow,
    pub lg: ThemeShadow,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ThemeShadow {
    #[serde(deserialize_with = "de_pixels")]
    pub y: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub blur: Pixels,
    pub opacity: f32,
}

impl ThemeShadow {
    pub fn to_box_shadow(&self, color: Rgba) -> BoxShadow {
        BoxShadow {
            color: color.alpha(self.opacity).into(),
            offset: point(px(0.), self.y),
            blur_radius: self.blur,
            spread_radius: px(0.),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use gpui::rgb;

    const DEFAULT_JSON: &str = include_str!("../../themes/default.json");

    #[test]
    fn test_builtin_theme_parses() {
        let theme = Theme::from_string(DEFAULT_JSON).expect("default theme should parse");
        assert_eq!(theme.name, Theme::DEFAULT.name);
    }

    #[test]
    fn test_snapshot_mode_resolution() {
        let theme = &Theme::DEFAULT;

        assert!(!theme.snapshot(ThemeMode::Light, false).is_dark);
        assert!(!theme.snapshot(ThemeMode::Light, true).is_dark);
        assert!(theme.snapshot(ThemeMode::Dark, false).is_dark);
        assert!(theme.snapshot(ThemeMode::Dark, true).is_dark);
        assert!(!theme.snapshot(ThemeMode::System, false).is_dark);
        assert!(theme.snapshot(ThemeMode::System, true).is_dark);
    }

    #[test]
    fn test_snapshot_selects_matching_variant() {
        let theme = &Theme::DEFAULT;

        let light = theme.snapshot(ThemeMode::Light, false);
        let dark = theme.snapshot(ThemeMode::Dark, false);

        assert_eq!(light.colors, &theme.variants.light);
        assert_eq!(dark.colors, &theme.variants.dark);
        assert_ne!(
            light.colors.background, dark.colors.background,
            "light and dark backgrounds should differ"
        );
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let theme = &Theme::DEFAULT;

        let first = theme.snapshot(ThemeMode::System, true);
        let second = theme.snapshot(ThemeMode::System, true);

        assert_eq!(first.is_dark, second.is_dark);
        assert_eq!(first.colors, second.colors);
    }

    #[test]
    fn test_variants_share_semantic_roles() {
        // The shared record type makes the key sets identical; both variants
        // must still carry visible values for every role.
        let variants = &Theme::DEFAULT.variants;

        for colors in [&variants.light, &variants.dark] {
            assert!(colors.background.a > 0.0, "background should be visible");
            assert!(
                colors.text.primary.a > 0.0,
                "primary text should be visible"
            );
            assert!(
                colors.accent.primary.a > 0.0,
                "primary accent should be visible"
            );
            assert!(colors.surface.border.a > 0.0, "border should be visible");
        }
    }

    #[test]
    fn test_palette_shades() {
        let palette = &Theme::DEFAULT.palette;

        assert_eq!(palette.blue.s1, rgb(0x2979FF));
        assert_eq!(palette.orange.s1, rgb(0xFF5722));
        assert_eq!(palette.white.shade(6), Some(rgb(0x9E9E9E)));
        assert_eq!(palette.blue.shade(7), None);
    }

    #[test]
    fn test_palette_alias_resolution() {
        let palette = &Theme::DEFAULT.palette;

        assert_eq!(palette.resolve("blue"), Some(palette.blue.s1));
        assert_eq!(palette.resolve("blue2"), Some(palette.blue.s2));
        assert_eq!(palette.resolve("blue.2"), Some(palette.blue.s2));
        assert_eq!(palette.resolve("gray"), Some(palette.black.s5));
        assert_eq!(palette.resolve("close"), Some(palette.close));
        assert_eq!(palette.resolve("teal"), None);
        assert_eq!(palette.resolve("blue.9"), None);
    }

    #[test]
    fn test_literal_overrides_palette_reference() {
        let mut spec: serde_json::Value = serde_json::from_str(DEFAULT_JSON).unwrap();
        spec["variants"][0]["colors"]["background"] = "#123456".into();

        let theme = Theme::from_string(spec.to_string()).unwrap();
        let overridden = theme.variants.active(false).background;

        assert_eq!(overridden, rgb(0x123456));
        assert_ne!(overridden, theme.palette.white.s1);
    }

    #[test]
    fn test_unknown_color_reference_is_rejected() {
        let mut spec: serde_json::Value = serde_json::from_str(DEFAULT_JSON).unwrap();
        spec["variants"][0]["colors"]["background"] = "chartreuse.9".into();

        let error = Theme::from_string(spec.to_string()).unwrap_err();
        assert!(matches!(error, ThemeError::UnknownColor(_)));
    }

    #[test]
    fn test_missing_variant_is_rejected() {
        let mut spec: serde_json::Value = serde_json::from_str(DEFAULT_JSON).unwrap();
        let variants = spec["variants"].as_array_mut().unwrap();
        variants.retain(|variant| variant["kind"] != "Dark");

        let error = Theme::from_string(spec.to_string()).unwrap_err();
        assert!(matches!(error, ThemeError::MissingVariant));
    }

    #[test]
    fn test_spacing_scale() {
        let spacing = &Theme::DEFAULT.layout.spacing;

        assert_eq!(spacing.base_unit, px(4.));
        assert_eq!(spacing.custom(3.), px(12.));
        assert_eq!(spacing.custom(4.), px(16.));

        let steps = [
            spacing.none,
            spacing.xxs,
            spacing.xs,
            spacing.sm,
            spacing.md,
            spacing.lg,
            spacing.xl,
            spacing.xxl,
            spacing.xxxl,
            spacing.huge,
        ];
        for pair in steps.windows(2) {
            assert!(pair[0] <= pair[1], "spacing steps should not decrease");
        }
    }

    #[test]
    fn test_corner_radii_ordering() {
        let radii = &Theme::DEFAULT.layout.corner_radii;

        assert!(radii.none <= radii.xs);
        assert!(radii.xs <= radii.sm);
        assert!(radii.sm <= radii.md);
        assert!(radii.md <= radii.lg);
        assert!(radii.lg <= radii.xl);
        assert!(radii.xl <= radii.pill);
    }

    #[test]
    fn test_shadow_conversion() {
        let shadow = ThemeShadow {
            y: px(2.),
            blur: px(6.),
            opacity: 0.4,
        };

        let palette = &Theme::DEFAULT.palette;
        let box_shadow = shadow.to_box_shadow(palette.black.s1);

        assert_eq!(box_shadow.offset.y, px(2.));
        assert_eq!(box_shadow.blur_radius, px(6.));
        assert_eq!(box_shadow.spread_radius, px(0.));
    }
}
