//! Subcommand implementations.

use anyhow::{Context, Result};
use shadegen_config::Config;
use shadegen_logger as log;
use shadegen_palette::{generate, shade_names, GenerateOptions, Palette};
use shadegen_theme::{load_theme, ThemeSpec};
use std::io::Write;
use std::sync::Arc;

use crate::cli::{GenerateArgs, OutputFormat, PreviewArgs, ThemeSource};
use crate::preview;

/// Resolve the theme from CLI flags, falling back to the configured theme.
pub fn resolve_theme(source: &ThemeSource, config: &Config) -> Result<Arc<ThemeSpec>> {
    if let Some(path) = &source.file {
        log::info(format!("Loading theme file {}", path.display()));
        return Ok(Arc::new(load_theme(path)?));
    }

    let name = source.theme.as_deref().unwrap_or(&config.general.theme);
    ThemeSpec::find_by_name(name).with_context(|| format!("Unknown theme '{}'", name))
}

/// Generation options from the config, overridden by CLI flags.
pub fn generate_options(args: &GenerateArgs, config: &Config) -> GenerateOptions {
    let dark = if args.dark {
        true
    } else if args.light {
        false
    } else {
        config.palette.dark
    };

    GenerateOptions {
        dark,
        luminosity_spread: args.spread.unwrap_or(config.palette.luminosity_spread),
        text_alpha: args.text_alpha.unwrap_or(config.palette.text_alpha),
    }
}

pub fn run_generate(out: &mut impl Write, args: &GenerateArgs, config: &Config) -> Result<()> {
    let theme = resolve_theme(&args.source, config)?;
    let options = generate_options(args, config);
    log::debug(format!("Generating '{}' with {:?}", theme.name(), options));

    let palette = generate(&theme, &options)
        .with_context(|| format!("Failed to generate palette for theme '{}'", theme.name()))?;
    write_palette(out, &palette, args.format)
}

/// Write a palette in the requested format.
pub fn write_palette(out: &mut impl Write, palette: &Palette, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::List => {
            let width = palette.names().map(str::len).max().unwrap_or(0);
            for (name, color) in palette.iter() {
                writeln!(out, "{:<width$} {}", name, color, width = width)?;
            }
        }
        OutputFormat::Toml => {
            let content = palette.to_toml_string()?;
            out.write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

pub fn run_names(out: &mut impl Write) -> Result<()> {
    for name in shade_names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub fn run_themes(out: &mut impl Write, config: &Config) -> Result<()> {
    let marker = |name: &str| if name == config.general.theme { "*" } else { " " };

    writeln!(out, "Built-in themes:")?;
    for name in ThemeSpec::all_theme_names() {
        writeln!(out, " {} {}", marker(name), name)?;
    }

    let user = ThemeSpec::user_theme_names();
    if !user.is_empty() {
        writeln!(out, "User themes:")?;
        for name in &user {
            writeln!(out, " {} {}", marker(name.as_str()), name)?;
        }
    }
    Ok(())
}

pub fn run_preview(out: &mut impl Write, args: &PreviewArgs, config: &Config) -> Result<()> {
    let theme = resolve_theme(&args.source, config)?;
    let base = GenerateOptions {
        dark: false,
        luminosity_spread: config.palette.luminosity_spread,
        text_alpha: config.palette.text_alpha,
    };
    let light = generate(&theme, &base)?;
    let dark = generate(&theme, &GenerateOptions { dark: true, ..base })?;
    preview::write_preview(out, &light, &dark)
}
