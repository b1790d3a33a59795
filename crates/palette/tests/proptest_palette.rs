//! Property-based tests for palette generation.
//!
//! 1. Every palette has exactly one entry per generated name
//! 2. Generation is a pure function of its inputs
//! 3. Every color is displayable regardless of parameters
//! 4. The unsuffixed entry of a plain (non dark-tinted) color is the color itself
//! 5. Text colors carry the requested alpha

use proptest::prelude::*;
use shadegen_color::Color;
use shadegen_palette::{generate, shades, GenerateOptions, PALETTE_SIZE};
use shadegen_theme::{ThemeField, ThemeSpec};

// ── Strategies ──────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::from_rgb(r, g, b))
}

fn theme_strategy() -> impl Strategy<Value = ThemeSpec> {
    (
        color_strategy(),
        proptest::option::of(color_strategy()),
        proptest::option::of(color_strategy()),
        proptest::option::of(color_strategy()),
    )
        .prop_map(|(primary, secondary, error, background)| {
            let mut builder = ThemeSpec::builder(primary);
            if let Some(color) = secondary {
                builder = builder.secondary(color);
            }
            if let Some(color) = error {
                builder = builder.error(color);
            }
            if let Some(color) = background {
                builder = builder.background(color);
            }
            builder.build()
        })
}

fn options_strategy() -> impl Strategy<Value = GenerateOptions> {
    (any::<bool>(), 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(dark, luminosity_spread, text_alpha)| {
        GenerateOptions {
            dark,
            luminosity_spread,
            text_alpha,
        }
    })
}

proptest! {
    #[test]
    fn palette_is_always_complete(theme in theme_strategy(), options in options_strategy()) {
        let palette = generate(&theme, &options).unwrap();
        prop_assert_eq!(palette.len(), PALETTE_SIZE);
        for shade in shades() {
            prop_assert!(palette.contains(&shade.name()));
            for name in shade.text_names() {
                prop_assert!(palette.contains(&name));
            }
        }
    }

    #[test]
    fn generation_is_deterministic(theme in theme_strategy(), options in options_strategy()) {
        let first = generate(&theme, &options).unwrap();
        let second = generate(&theme, &options).unwrap();
        prop_assert_eq!(first.to_hex_map(), second.to_hex_map());
    }

    #[test]
    fn colors_are_displayable(
        theme in theme_strategy(),
        dark in any::<bool>(),
        luminosity_spread in -2.0f64..4.0,
        text_alpha in -1.0f64..2.0,
    ) {
        let options = GenerateOptions { dark, luminosity_spread, text_alpha };
        let palette = generate(&theme, &options).unwrap();
        for (_, color) in palette.iter() {
            for channel in [color.r, color.g, color.b, color.a] {
                prop_assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn plain_base_entry_is_identity(theme in theme_strategy(), options in options_strategy()) {
        let palette = generate(&theme, &options).unwrap();
        let resolved = theme.resolve_all(options.dark).unwrap();
        for field in ThemeField::ALL {
            if options.dark && field.is_dark_tinted() {
                continue;
            }
            prop_assert_eq!(palette.hex(field.name()), Some(resolved.get(field).hex()));
        }
    }

    #[test]
    fn text_colors_use_requested_alpha(theme in theme_strategy(), options in options_strategy()) {
        let palette = generate(&theme, &options).unwrap();
        for shade in shades() {
            let text = palette.get(&shade.text_name()).unwrap();
            prop_assert!((text.a - options.text_alpha).abs() < 1e-12);
        }
    }
}
