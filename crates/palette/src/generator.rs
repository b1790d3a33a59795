//! Shade, text and fade color generation.

use shadegen_color::WHITE;
use shadegen_theme::{ResolvedColors, ThemeError, ThemeSpec};

use crate::palette::Palette;
use crate::shade::{Shade, FADE_COUNT, NUMBER_OF_SHADES, PALETTE_SIZE};

/// Default total lightness swing across a base color's shades.
pub const DEFAULT_LUMINOSITY_SPREAD: f64 = 0.15;

/// Default opacity of generated text colors.
pub const DEFAULT_TEXT_ALPHA: f64 = 0.9;

/// Weight of the base color when tinting the background in dark mode.
pub const DARK_BACKGROUND_TINT: f64 = 0.12;

/// Dark-mode shades of dark-tinted colors use a spread compressed by this factor.
pub const DARK_SPREAD_DIVISOR: f64 = 1.5;

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    /// Generate the dark-mode palette
    pub dark: bool,
    /// Total lightness swing across the seven shades, in `0.0..=1.0`
    pub luminosity_spread: f64,
    /// Opacity of text colors before fading, in `0.0..=1.0`
    pub text_alpha: f64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dark: false,
            luminosity_spread: DEFAULT_LUMINOSITY_SPREAD,
            text_alpha: DEFAULT_TEXT_ALPHA,
        }
    }
}

impl GenerateOptions {
    /// Default options for light or dark mode.
    pub fn with_dark(dark: bool) -> Self {
        Self {
            dark,
            ..Self::default()
        }
    }

    /// Non-finite parameters revert to their defaults; the rest are clamped
    /// to `0.0..=1.0`.
    pub fn sanitized(&self) -> Self {
        let sanitize = |value: f64, default: f64| {
            if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                default
            }
        };
        Self {
            dark: self.dark,
            luminosity_spread: sanitize(self.luminosity_spread, DEFAULT_LUMINOSITY_SPREAD),
            text_alpha: sanitize(self.text_alpha, DEFAULT_TEXT_ALPHA),
        }
    }
}

/// Generate the full palette for `theme`.
///
/// Fails only if a theme color does not parse; no entries are produced in
/// that case.
pub fn generate(theme: &ThemeSpec, options: &GenerateOptions) -> Result<Palette, ThemeError> {
    let colors = theme.resolve_all(options.dark)?;
    Ok(generate_resolved(&colors, options))
}

/// Generate the full palette from already-resolved base colors.
pub fn generate_resolved(colors: &ResolvedColors, options: &GenerateOptions) -> Palette {
    let options = options.sanitized();
    let background = colors.background();
    let mut palette = Palette::with_capacity(PALETTE_SIZE);

    for (field, color) in colors.iter() {
        let dark_tinted = options.dark && field.is_dark_tinted();
        let spread = if dark_tinted {
            options.luminosity_spread / DARK_SPREAD_DIVISOR
        } else {
            options.luminosity_spread
        };
        let step = spread / 2.0;
        // Dark-tinted shades are anchored to the background, not the raw hue.
        let dark_background = background.blend(color, DARK_BACKGROUND_TINT);

        for level in -NUMBER_OF_SHADES..=NUMBER_OF_SHADES {
            let shade = Shade { field, level };
            let delta = f64::from(level) * step;

            let shade_color = if dark_tinted {
                dark_background.blend(WHITE, spread + delta).clamped()
            } else {
                color.lighten(delta).clamped()
            };
            palette.insert(shade.name(), shade_color);

            let text_color = shade_color.contrast_text(options.text_alpha);
            palette.insert(shade.text_name(), text_color);
            for fade in 1..=FADE_COUNT {
                let faded = text_color.blend(shade_color, f64::from(fade) * 0.1 + 0.15);
                palette.insert(shade.fade_name(fade), faded);
            }
        }
    }

    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade::shades;
    use shadegen_color::Color;
    use shadegen_theme::ThemeField;

    fn demo_theme() -> ThemeSpec {
        ThemeSpec::builder("#005EA8")
            .secondary("#F59402")
            .warning("#FFA000")
            .error("#C62828")
            .success("#558B2F")
            .build()
    }

    fn hex(palette: &Palette, name: &str) -> String {
        palette.hex(name).unwrap_or_else(|| panic!("missing entry {}", name))
    }

    #[test]
    fn test_palette_is_complete() {
        for dark in [false, true] {
            let palette = generate(&demo_theme(), &GenerateOptions::with_dark(dark)).unwrap();
            assert_eq!(palette.len(), PALETTE_SIZE);
            for shade in shades() {
                assert!(palette.contains(&shade.name()));
                for name in shade.text_names() {
                    assert!(palette.contains(&name), "missing {}", name);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let theme = demo_theme();
        let options = GenerateOptions {
            dark: true,
            luminosity_spread: 0.3,
            text_alpha: 0.8,
        };
        let first = generate(&theme, &options).unwrap();
        let second = generate(&theme, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_toml_string().unwrap(), second.to_toml_string().unwrap());
    }

    #[test]
    fn test_primary_light_scenario() {
        let palette = generate(&ThemeSpec::new("#005EA8"), &GenerateOptions::default()).unwrap();
        assert_eq!(hex(&palette, "primary"), "#005EA8");

        let primary = palette.get("primary").unwrap();
        let lightest = palette.get("primary-lighten-3").unwrap();
        assert!(lightest.lightness() > primary.lightness());
        assert!(lightest.relative_luminance() > primary.relative_luminance());

        let text = palette.get("text-primary").unwrap();
        assert!((text.a - 0.9).abs() < 1e-9);
        assert_eq!(text.hex(), "#FFFFFFE6");
        let visible = text.composite_over(primary);
        assert!(visible.contrast_ratio(primary) > 4.5);
        // Full-opacity white would contrast more than the 90% text color.
        assert!(WHITE.contrast_ratio(primary) > visible.contrast_ratio(primary));
    }

    #[test]
    fn test_zero_shade_is_base_color() {
        let theme = demo_theme();
        for spread in [0.0, 0.15, 0.5, 1.0] {
            let options = GenerateOptions {
                luminosity_spread: spread,
                ..GenerateOptions::default()
            };
            let palette = generate(&theme, &options).unwrap();
            let colors = theme.resolve_all(false).unwrap();
            for field in ThemeField::ALL {
                assert_eq!(palette.get(field.name()), Some(colors.get(field)));
            }
        }
    }

    #[test]
    fn test_shades_are_monotonic() {
        let theme = ThemeSpec::builder("#005EA8").warning("#808080").build();
        let palette = generate(&theme, &GenerateOptions::default()).unwrap();

        for field in [ThemeField::Primary, ThemeField::Warning] {
            let lightness: Vec<f64> = (-NUMBER_OF_SHADES..=NUMBER_OF_SHADES)
                .map(|level| {
                    let shade = Shade::new(field, level).unwrap();
                    palette.get(&shade.name()).unwrap().lightness()
                })
                .collect();
            for pair in lightness.windows(2) {
                assert!(pair[0] < pair[1], "{}: {:?}", field, lightness);
            }
        }
    }

    #[test]
    fn test_dark_mode_anchors_primary_to_background() {
        let theme = ThemeSpec::new("#005EA8");
        let light = generate(&theme, &GenerateOptions::with_dark(false)).unwrap();
        let dark = generate(&theme, &GenerateOptions::with_dark(true)).unwrap();

        assert_ne!(hex(&light, "primary"), hex(&dark, "primary"));

        // Background #000000 tinted 12% toward primary, then toward white by
        // the compressed spread.
        let expected = Color::parse("#000000")
            .unwrap()
            .blend(Color::parse("#005EA8").unwrap(), DARK_BACKGROUND_TINT)
            .blend(WHITE, DEFAULT_LUMINOSITY_SPREAD / DARK_SPREAD_DIVISOR);
        assert_eq!(hex(&dark, "primary"), expected.hex());

        // Warning is not dark-tinted: same plain lightening in both modes.
        for shade in shades().filter(|s| s.field == ThemeField::Warning) {
            assert_eq!(hex(&light, &shade.name()), hex(&dark, &shade.name()));
        }
        assert_ne!(hex(&light, "background"), hex(&dark, "background"));
    }

    #[test]
    fn test_dark_tinted_shades_brighten_with_level() {
        let palette = generate(&demo_theme(), &GenerateOptions::with_dark(true)).unwrap();
        for field in [ThemeField::Primary, ThemeField::Secondary] {
            let darker = palette.get(&format!("{}-darken-1", field)).unwrap();
            let base = palette.get(field.name()).unwrap();
            let lighter = palette.get(&format!("{}-lighten-3", field)).unwrap();
            assert!(darker.relative_luminance() < base.relative_luminance());
            assert!(base.relative_luminance() < lighter.relative_luminance());
        }
    }

    #[test]
    fn test_fade_variants_blend_toward_shade() {
        let palette = generate(&demo_theme(), &GenerateOptions::default()).unwrap();
        let shade = palette.get("error-lighten-1").unwrap();
        let text = palette.get("text-error-lighten-1").unwrap();
        assert_eq!(text, shade.contrast_text(DEFAULT_TEXT_ALPHA));
        assert_eq!(
            palette.get("text-error-lighten-1-fade-1"),
            Some(text.blend(shade, 0.25))
        );
        assert_eq!(
            palette.get("text-error-lighten-1-fade-2"),
            Some(text.blend(shade, 0.35))
        );
    }

    #[test]
    fn test_fallback_chain_with_primary_only() {
        let light = generate(&ThemeSpec::new("#005EA8"), &GenerateOptions::default()).unwrap();
        for shade in shades().filter(|s| s.field == ThemeField::Primary) {
            let expected = hex(&light, &shade.name());
            for field in [
                ThemeField::Secondary,
                ThemeField::Warning,
                ThemeField::Accent1,
                ThemeField::Error,
                ThemeField::Success,
                ThemeField::Accent2,
            ] {
                let other = Shade::new(field, shade.level).unwrap();
                assert_eq!(hex(&light, &other.name()), expected);
                assert_eq!(hex(&light, &other.text_name()), hex(&light, &shade.text_name()));
            }
        }
    }

    #[test]
    fn test_error_falls_back_to_secondary() {
        let theme = ThemeSpec::builder("#005EA8").secondary("#F59402").build();
        let palette = generate(&theme, &GenerateOptions::default()).unwrap();
        assert_eq!(hex(&palette, "error"), "#F59402");
        assert_eq!(hex(&palette, "success"), "#F59402");
        assert_eq!(hex(&palette, "accent2"), "#F59402");
        assert_eq!(hex(&palette, "accent1"), "#005EA8");
    }

    #[test]
    fn test_extreme_parameters_stay_in_range() {
        let theme = ThemeSpec::builder("#005EA8")
            .secondary("#FFFFFF")
            .warning("#000000")
            .background("#F0F0F0")
            .build();
        for options in [
            GenerateOptions {
                dark: true,
                luminosity_spread: 1.0,
                text_alpha: 1.0,
            },
            GenerateOptions {
                dark: false,
                luminosity_spread: 1.0,
                text_alpha: 0.0,
            },
            GenerateOptions {
                dark: true,
                luminosity_spread: 7.5,
                text_alpha: -3.0,
            },
        ] {
            let palette = generate(&theme, &options).unwrap();
            assert_eq!(palette.len(), PALETTE_SIZE);
            for (name, color) in palette.iter() {
                for channel in [color.r, color.g, color.b, color.a] {
                    assert!((0.0..=1.0).contains(&channel), "{} out of range: {:?}", name, color);
                }
            }
        }
    }

    #[test]
    fn test_parameters_are_sanitized() {
        let options = GenerateOptions {
            dark: true,
            luminosity_spread: f64::NAN,
            text_alpha: 2.0,
        }
        .sanitized();
        assert!(options.dark);
        assert_eq!(options.luminosity_spread, DEFAULT_LUMINOSITY_SPREAD);
        assert_eq!(options.text_alpha, 1.0);

        let theme = demo_theme();
        let clamped = generate(
            &theme,
            &GenerateOptions { luminosity_spread: 5.0, ..GenerateOptions::default() },
        )
        .unwrap();
        let capped = generate(
            &theme,
            &GenerateOptions { luminosity_spread: 1.0, ..GenerateOptions::default() },
        )
        .unwrap();
        assert_eq!(clamped, capped);
    }

    #[test]
    fn test_invalid_color_fails_before_generation() {
        let theme = ThemeSpec::builder("#005EA8").success("greenish").build();
        let err = generate(&theme, &GenerateOptions::default()).unwrap_err();
        let ThemeError::InvalidColor { field, .. } = err;
        assert_eq!(field, ThemeField::Success);
    }

    #[test]
    fn test_hex_map_preserves_order() {
        let palette = generate(&demo_theme(), &GenerateOptions::default()).unwrap();
        let map = palette.to_hex_map();
        let first: Vec<&str> = map.keys().take(5).map(String::as_str).collect();
        assert_eq!(
            first,
            [
                "primary-darken-3",
                "text-primary-darken-3",
                "text-primary-darken-3-fade-1",
                "text-primary-darken-3-fade-2",
                "primary-darken-2",
            ]
        );
        assert_eq!(map["primary"], "#005EA8");
    }
}
