//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "shadegen",
    version,
    about = "Derive a complete UI color palette from a handful of theme colors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Minimum log level (debug, info, warn, error). Overrides the config file.
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the palette for a theme.
    Generate(GenerateArgs),

    /// List the 63 shade names in palette order.
    Names,

    /// List built-in and user themes.
    Themes,

    /// Show every shade with its text colors, light and dark side by side.
    Preview(PreviewArgs),
}

/// Where the theme comes from.
#[derive(Args, Clone, Default)]
pub struct ThemeSource {
    /// Theme name (built-in or from the user themes directory).
    #[arg(long, value_name = "NAME", conflicts_with = "file")]
    pub theme: Option<String>,

    /// Theme TOML file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: ThemeSource,

    /// Generate the dark-mode palette.
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Generate the light-mode palette even if the config enables dark mode.
    #[arg(long)]
    pub light: bool,

    /// Total lightness swing across shades (0.0 - 1.0).
    #[arg(long, value_name = "SPREAD")]
    pub spread: Option<f64>,

    /// Opacity of text colors (0.0 - 1.0).
    #[arg(long = "text-alpha", value_name = "ALPHA")]
    pub text_alpha: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value = "list")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: ThemeSource,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name #RRGGBB` per line
    List,
    /// Flat TOML table
    Toml,
}
