//! Color value type for shadegen.
//!
//! A [`Color`] is an immutable RGBA value with channels normalized to
//! `0.0..=1.0`. Every operation returns a new value. Intermediate results of
//! extrapolating blends may fall outside the displayable range until
//! [`Color::clamped`] is applied; formatting always clamps.

mod lab;
mod named;
mod parse;

pub use parse::ColorParseError;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque white.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Opaque black.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
/// Fully transparent black.
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

/// RGBA color with normalized channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
    /// Alpha (1.0 is opaque)
    pub a: f64,
}

impl Color {
    /// Create a color from normalized channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channels and a normalized alpha.
    pub fn from_rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a,
        }
    }

    /// Parse a color expression.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`, `rgba()`,
    /// `hsl()`, `hsla()` and named colors.
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        parse::parse_color(text)
    }

    /// Return a copy with a different alpha.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Linear interpolation toward `destination`.
    ///
    /// Factors outside `0.0..=1.0` extrapolate; callers clamp the result
    /// when they need a displayable color.
    pub fn blend(&self, destination: Color, factor: f64) -> Self {
        if factor == 0.0 {
            return *self;
        }
        if factor == 1.0 {
            return destination;
        }
        Self {
            r: self.r + (destination.r - self.r) * factor,
            g: self.g + (destination.g - self.g) * factor,
            b: self.b + (destination.b - self.b) * factor,
            a: self.a + (destination.a - self.a) * factor,
        }
    }

    /// Shift L* (CIE Lab) by `amount * 100`. Negative amounts darken.
    pub fn lighten(&self, amount: f64) -> Self {
        if amount == 0.0 {
            return *self;
        }
        let (l, a, b) = lab::rgb_to_lab(self);
        lab::lab_to_rgb(l + amount * 100.0, a, b, self.a).clamped()
    }

    /// Inverse of [`Color::lighten`].
    pub fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Lightness (L*) in `0.0..=100.0`.
    pub fn lightness(&self) -> f64 {
        lab::rgb_to_lab(&self.clamped()).0
    }

    /// Perceived brightness in `0.0..=1.0`.
    pub fn brightness(&self) -> f64 {
        (299.0 * self.r + 587.0 * self.g + 114.0 * self.b) / 1000.0
    }

    /// White or black, whichever reads better on this color, at `alpha`.
    pub fn contrast_text(&self, alpha: f64) -> Self {
        let base = if self.brightness() < 0.5 { WHITE } else { BLACK };
        base.with_alpha(alpha)
    }

    /// Clamp every channel into the displayable range.
    pub fn clamped(&self) -> Self {
        Self {
            r: clamp_unit(self.r),
            g: clamp_unit(self.g),
            b: clamp_unit(self.b),
            a: clamp_unit(self.a),
        }
    }

    /// Alpha-composite this color over `backdrop`.
    pub fn composite_over(&self, backdrop: Color) -> Self {
        let top = self.clamped();
        let bottom = backdrop.clamped();
        let a = top.a + bottom.a * (1.0 - top.a);
        if a <= 0.0 {
            return TRANSPARENT;
        }
        let mix = |c: f64, cb: f64| (c * top.a + cb * bottom.a * (1.0 - top.a)) / a;
        Self {
            r: mix(top.r, bottom.r),
            g: mix(top.g, bottom.g),
            b: mix(top.b, bottom.b),
            a,
        }
    }

    /// WCAG 2.x relative luminance of the clamped color.
    pub fn relative_luminance(&self) -> f64 {
        let c = self.clamped();
        0.2126 * lab::linearize(c.r) + 0.7152 * lab::linearize(c.g) + 0.0722 * lab::linearize(c.b)
    }

    /// WCAG contrast ratio between two colors, in `1.0..=21.0`.
    pub fn contrast_ratio(&self, other: Color) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (hi, lo) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// 8-bit RGB channels after clamping.
    pub fn rgb_u8(&self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Whether alpha is fully opaque.
    pub fn is_opaque(&self) -> bool {
        to_u8(self.a) == 255
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when translucent.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb_u8();
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, to_u8(self.a))
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_u8(value: f64) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.rgb_u8();
        ratatui::style::Color::Rgb(r, g, b)
    }
}
