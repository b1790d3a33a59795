//! Terminal swatch preview of light and dark palettes.

use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};
use shadegen_color::Color;
use shadegen_palette::{shades, Palette, FADE_COUNT};
use std::io::Write;

const COLUMN_WIDTH: usize = 44;

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.rgb_u8();
    TermColor::Rgb { r, g, b }
}

/// One swatch: the shade's hex and name in its text color, then the faded
/// variants, all on the shade background.
fn swatch(palette: &Palette, name: &str) -> String {
    let Some(background) = palette.get(name) else {
        return " ".repeat(COLUMN_WIDTH);
    };
    // Translucent text is shown as it would render on the shade.
    let ink = |key: String| {
        palette
            .get(&key)
            .map(|color| term_color(color.composite_over(background)))
            .unwrap_or(TermColor::Reset)
    };
    let bg = term_color(background);

    let mut line = format!(" {} ", background)
        .with(ink(format!("text-{}", name)))
        .on(bg)
        .to_string();
    let mut used = background.to_string().len() + 2;

    let labels = std::iter::once(format!("text-{}", name))
        .chain((1..=FADE_COUNT).map(|fade| format!("text-{}-fade-{}", name, fade)));
    for key in labels {
        let label = format!("{} ", name);
        used += label.len();
        line.push_str(&label.with(ink(key)).on(bg).to_string());
    }

    let padding = COLUMN_WIDTH.saturating_sub(used);
    line.push_str(&" ".repeat(padding).on(bg).to_string());
    line
}

/// Write a two-column preview: light palette on the left, dark on the right.
pub fn write_preview(out: &mut impl Write, light: &Palette, dark: &Palette) -> Result<()> {
    writeln!(
        out,
        "{:<width$}  {}",
        "Light",
        "Dark",
        width = COLUMN_WIDTH
    )?;
    for shade in shades() {
        let name = shade.name();
        writeln!(out, "{}  {}", swatch(light, &name), swatch(dark, &name))?;
    }
    Ok(())
}
