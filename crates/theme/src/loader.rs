//! Theme loading from TOML files.

use anyhow::{Context, Result};
use serde::Deserialize;
use shadegen_color::Color;
use std::path::Path;

use crate::{ColorInput, ThemeField, ThemeSpec};

/// Color representation in TOML.
///
/// Strings are stored unparsed and only validated when the field is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Expr(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn into_input(self) -> ColorInput {
        match self {
            TomlColor::Expr(text) => ColorInput::Raw(text),
            TomlColor::Rgb { rgb } => ColorInput::Parsed(Color::from_rgb(rgb[0], rgb[1], rgb[2])),
        }
    }
}

/// TOML theme colors structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlColors {
    primary: TomlColor,
    secondary: Option<TomlColor>,
    background: Option<TomlColor>,
    surface: Option<TomlColor>,
    warning: Option<TomlColor>,
    error: Option<TomlColor>,
    success: Option<TomlColor>,
    accent1: Option<TomlColor>,
    accent2: Option<TomlColor>,
}

/// TOML theme structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

impl From<TomlTheme> for ThemeSpec {
    fn from(theme: TomlTheme) -> Self {
        let colors = theme.colors;
        let optional = [
            (ThemeField::Secondary, colors.secondary),
            (ThemeField::Background, colors.background),
            (ThemeField::Surface, colors.surface),
            (ThemeField::Warning, colors.warning),
            (ThemeField::Error, colors.error),
            (ThemeField::Success, colors.success),
            (ThemeField::Accent1, colors.accent1),
            (ThemeField::Accent2, colors.accent2),
        ];

        optional
            .into_iter()
            .filter_map(|(field, color)| color.map(|c| (field, c)))
            .fold(
                ThemeSpec::builder(colors.primary.into_input()).name(theme.name),
                |builder, (field, color)| builder.set(field, color.into_input()),
            )
            .build()
    }
}

/// Load theme from TOML file.
pub fn load_theme(path: &Path) -> Result<ThemeSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme file {}", path.display()))?;
    load_theme_from_str(&content)
        .with_context(|| format!("Failed to parse theme file {}", path.display()))
}

/// Load theme from TOML string.
pub fn load_theme_from_str(content: &str) -> Result<ThemeSpec> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    Ok(toml_theme.into())
}
