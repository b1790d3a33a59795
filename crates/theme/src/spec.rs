//! Theme specification: the designer-supplied base colors.

use shadegen_color::{Color, ColorParseError};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Background used in dark mode when the theme leaves it unset (`#000000`).
pub const DEFAULT_DARK_BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
/// Surface used in dark mode when the theme leaves it unset (`#121212`).
pub const DEFAULT_DARK_SURFACE: Color = Color::new(18.0 / 255.0, 18.0 / 255.0, 18.0 / 255.0, 1.0);
/// Background used in light mode when the theme leaves it unset (`#F5F5F5`).
pub const DEFAULT_LIGHT_BACKGROUND: Color =
    Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);
/// Surface used in light mode when the theme leaves it unset (`#EFEFEF`).
pub const DEFAULT_LIGHT_SURFACE: Color =
    Color::new(239.0 / 255.0, 239.0 / 255.0, 239.0 / 255.0, 1.0);

/// One of the nine base colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeField {
    Primary,
    Secondary,
    Background,
    Surface,
    Warning,
    Error,
    Success,
    Accent1,
    Accent2,
}

impl ThemeField {
    /// All fields in their declared order.
    pub const ALL: [ThemeField; 9] = [
        ThemeField::Primary,
        ThemeField::Secondary,
        ThemeField::Background,
        ThemeField::Surface,
        ThemeField::Warning,
        ThemeField::Error,
        ThemeField::Success,
        ThemeField::Accent1,
        ThemeField::Accent2,
    ];

    /// Name used in palette keys and theme files.
    pub const fn name(self) -> &'static str {
        match self {
            ThemeField::Primary => "primary",
            ThemeField::Secondary => "secondary",
            ThemeField::Background => "background",
            ThemeField::Surface => "surface",
            ThemeField::Warning => "warning",
            ThemeField::Error => "error",
            ThemeField::Success => "success",
            ThemeField::Accent1 => "accent1",
            ThemeField::Accent2 => "accent2",
        }
    }

    /// Position in [`ThemeField::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fields anchored to the background instead of lightened in dark mode.
    pub const fn is_dark_tinted(self) -> bool {
        matches!(self, ThemeField::Primary | ThemeField::Secondary)
    }
}

impl fmt::Display for ThemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown theme color: {}", s))
    }
}

/// Errors raised while reading theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("invalid color for '{field}': {source}")]
    InvalidColor {
        field: ThemeField,
        #[source]
        source: ColorParseError,
    },
}

/// A color as supplied by the designer.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Color expression, parsed on first read
    Raw(String),
    /// Already-parsed color
    Parsed(Color),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        ColorInput::Raw(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        ColorInput::Raw(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        ColorInput::Parsed(value)
    }
}

/// A stored input plus its memoized parse result.
#[derive(Debug, Clone)]
struct ColorSlot {
    input: ColorInput,
    parsed: OnceLock<Result<Color, ColorParseError>>,
}

impl ColorSlot {
    fn new(input: ColorInput) -> Self {
        Self {
            input,
            parsed: OnceLock::new(),
        }
    }

    fn get(&self) -> Result<Color, ColorParseError> {
        self.parsed
            .get_or_init(|| match &self.input {
                ColorInput::Raw(text) => Color::parse(text),
                ColorInput::Parsed(color) => Ok(*color),
            })
            .clone()
    }
}

/// Designer-supplied theme: a required primary color and eight optional ones.
///
/// Raw color strings are parsed the first time a field is read and the result
/// (including a failure) is cached for later reads. The spec is immutable and
/// safe to share between threads.
#[derive(Debug, Clone)]
pub struct ThemeSpec {
    name: String,
    primary: ColorSlot,
    // Indexed by `ThemeField::index`; the primary entry is never used.
    optional: [Option<ColorSlot>; 9],
}

impl ThemeSpec {
    /// Theme with only a primary color.
    pub fn new(primary: impl Into<ColorInput>) -> Self {
        Self::builder(primary).build()
    }

    /// Start building a theme around `primary`.
    pub fn builder(primary: impl Into<ColorInput>) -> ThemeSpecBuilder {
        ThemeSpecBuilder::new(primary.into())
    }

    /// Theme name ("custom" unless set).
    pub fn name(&self) -> &str {
        &self.name
    }

    fn slot(&self, field: ThemeField) -> Option<&ColorSlot> {
        match field {
            ThemeField::Primary => Some(&self.primary),
            _ => self.optional[field.index()].as_ref(),
        }
    }

    /// The unparsed input for `field`, if set.
    pub fn input(&self, field: ThemeField) -> Option<&ColorInput> {
        self.slot(field).map(|slot| &slot.input)
    }

    /// Whether the designer supplied `field`.
    pub fn is_set(&self, field: ThemeField) -> bool {
        self.slot(field).is_some()
    }

    /// Read `field`, parsing it on first access. Unset fields are `Ok(None)`.
    pub fn resolve(&self, field: ThemeField) -> Result<Option<Color>, ThemeError> {
        match self.slot(field) {
            Some(slot) => slot
                .get()
                .map(Some)
                .map_err(|source| ThemeError::InvalidColor { field, source }),
            None => Ok(None),
        }
    }

    /// The required primary color.
    pub fn primary(&self) -> Result<Color, ThemeError> {
        self.primary
            .get()
            .map_err(|source| ThemeError::InvalidColor {
                field: ThemeField::Primary,
                source,
            })
    }

    /// Resolve all nine colors, applying fallbacks for unset fields.
    ///
    /// `error`, `success` and `accent2` fall back to `secondary` (which itself
    /// falls back to `primary`), not to a fixed semantic hue.
    pub fn resolve_all(&self, dark: bool) -> Result<ResolvedColors, ThemeError> {
        let primary = self.primary()?;
        let secondary = self.resolve(ThemeField::Secondary)?.unwrap_or(primary);
        let warning = self.resolve(ThemeField::Warning)?.unwrap_or(primary);
        let error = self.resolve(ThemeField::Error)?.unwrap_or(secondary);
        let success = self.resolve(ThemeField::Success)?.unwrap_or(secondary);
        let accent1 = self.resolve(ThemeField::Accent1)?.unwrap_or(primary);
        let accent2 = self.resolve(ThemeField::Accent2)?.unwrap_or(secondary);

        let background = self.resolve(ThemeField::Background)?.unwrap_or(if dark {
            DEFAULT_DARK_BACKGROUND
        } else {
            DEFAULT_LIGHT_BACKGROUND
        });
        let surface = self.resolve(ThemeField::Surface)?.unwrap_or(if dark {
            DEFAULT_DARK_SURFACE
        } else {
            DEFAULT_LIGHT_SURFACE
        });

        Ok(ResolvedColors {
            colors: [
                primary, secondary, background, surface, warning, error, success, accent1,
                accent2,
            ],
        })
    }
}

/// Builder for [`ThemeSpec`].
#[derive(Debug, Clone)]
pub struct ThemeSpecBuilder {
    name: String,
    primary: ColorSlot,
    optional: [Option<ColorSlot>; 9],
}

impl ThemeSpecBuilder {
    fn new(primary: ColorInput) -> Self {
        Self {
            name: "custom".to_string(),
            primary: ColorSlot::new(primary),
            optional: Default::default(),
        }
    }

    /// Set the theme name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set any field by key.
    pub fn set(mut self, field: ThemeField, value: impl Into<ColorInput>) -> Self {
        let slot = ColorSlot::new(value.into());
        match field {
            ThemeField::Primary => self.primary = slot,
            _ => self.optional[field.index()] = Some(slot),
        }
        self
    }

    pub fn secondary(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Secondary, value)
    }

    pub fn warning(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Warning, value)
    }

    pub fn error(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Error, value)
    }

    pub fn success(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Success, value)
    }

    pub fn accent1(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Accent1, value)
    }

    pub fn accent2(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Accent2, value)
    }

    pub fn background(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Background, value)
    }

    pub fn surface(self, value: impl Into<ColorInput>) -> Self {
        self.set(ThemeField::Surface, value)
    }

    pub fn build(self) -> ThemeSpec {
        ThemeSpec {
            name: self.name,
            primary: self.primary,
            optional: self.optional,
        }
    }
}

/// The nine base colors after fallback resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    colors: [Color; 9],
}

impl ResolvedColors {
    /// Resolved color for `field`.
    pub fn get(&self, field: ThemeField) -> Color {
        self.colors[field.index()]
    }

    /// Background color (used to anchor dark-mode shades).
    pub fn background(&self) -> Color {
        self.get(ThemeField::Background)
    }

    /// `(field, color)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeField, Color)> + '_ {
        ThemeField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}
