//! Palette generation for shadegen.
//!
//! Expands the nine base colors of a [`ThemeSpec`](shadegen_theme::ThemeSpec)
//! into 63 shades plus a contrasting text color and two faded text variants
//! for each shade: 252 named colors in total.

mod generator;
mod palette;
mod shade;

pub use generator::{
    generate, generate_resolved, GenerateOptions, DARK_BACKGROUND_TINT, DARK_SPREAD_DIVISOR,
    DEFAULT_LUMINOSITY_SPREAD, DEFAULT_TEXT_ALPHA,
};
pub use palette::Palette;
pub use shade::{shade_names, shades, Shade, Shades, FADE_COUNT, NUMBER_OF_SHADES, PALETTE_SIZE};
