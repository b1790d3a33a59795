//! Shade naming.

use shadegen_theme::ThemeField;
use std::fmt;

/// Shades on each side of a base color.
pub const NUMBER_OF_SHADES: i8 = 3;

/// Faded text variants per shade.
pub const FADE_COUNT: u8 = 2;

const SHADES_PER_FIELD: usize = (2 * NUMBER_OF_SHADES + 1) as usize;
const SHADE_COUNT: usize = ThemeField::ALL.len() * SHADES_PER_FIELD;

/// Entries in a complete palette: each shade plus its text and fade colors.
pub const PALETTE_SIZE: usize = SHADE_COUNT * (2 + FADE_COUNT as usize);

/// A base color at a lightness level in `-NUMBER_OF_SHADES..=NUMBER_OF_SHADES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shade {
    pub field: ThemeField,
    pub level: i8,
}

impl Shade {
    /// Create a shade, or `None` if `level` is out of range.
    pub fn new(field: ThemeField, level: i8) -> Option<Self> {
        (-NUMBER_OF_SHADES..=NUMBER_OF_SHADES)
            .contains(&level)
            .then_some(Self { field, level })
    }

    /// `-darken-N`, `-lighten-N`, or empty for the base level.
    pub fn suffix(&self) -> String {
        match self.level {
            0 => String::new(),
            n if n < 0 => format!("-darken-{}", n.unsigned_abs()),
            n => format!("-lighten-{}", n),
        }
    }

    /// Palette key of the shade color, e.g. `primary-lighten-2`.
    pub fn name(&self) -> String {
        format!("{}{}", self.field.name(), self.suffix())
    }

    /// Palette key of the text color drawn on this shade.
    pub fn text_name(&self) -> String {
        format!("text-{}", self.name())
    }

    /// Palette key of a faded text color, `fade` in `1..=FADE_COUNT`.
    pub fn fade_name(&self, fade: u8) -> String {
        format!("text-{}-fade-{}", self.name(), fade)
    }

    /// Text key followed by the fade keys.
    pub fn text_names(&self) -> Vec<String> {
        std::iter::once(self.text_name())
            .chain((1..=FADE_COUNT).map(|fade| self.fade_name(fade)))
            .collect()
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.field.name(), self.suffix())
    }
}

/// Iterator over every shade, darkest to lightest within each base color.
#[derive(Debug, Clone, Default)]
pub struct Shades {
    next: usize,
}

impl Iterator for Shades {
    type Item = Shade;

    fn next(&mut self) -> Option<Shade> {
        if self.next >= SHADE_COUNT {
            return None;
        }
        let field = ThemeField::ALL[self.next / SHADES_PER_FIELD];
        let level = (self.next % SHADES_PER_FIELD) as i8 - NUMBER_OF_SHADES;
        self.next += 1;
        Some(Shade { field, level })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SHADE_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Shades {}

/// All 63 shades in declared order. Each call starts a fresh iteration.
pub fn shades() -> Shades {
    Shades::default()
}

/// Names of all 63 shades in declared order.
pub fn shade_names() -> impl Iterator<Item = String> + Clone {
    shades().map(|shade| shade.name())
}
