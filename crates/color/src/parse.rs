//! Color expression parsing.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::{named, Color, TRANSPARENT};

/// A color expression did not match any recognized syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {text:?} as a color: {reason}")]
pub struct ColorParseError {
    /// The offending input
    pub text: String,
    /// What was wrong with it
    pub reason: String,
}

impl ColorParseError {
    fn new(text: &str, reason: impl Into<String>) -> Self {
        Self {
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}

const NUMBER: &str = r"\s*(-?\d+(?:\.\d+)?)\s*";
const PERCENT: &str = r"\s*(-?\d+(?:\.\d+)?)%\s*";

fn hex_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
            .expect("hex color pattern is valid")
    })
}

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)(rgba?|hsla?)\((.*)\)$").expect("color function pattern is valid")
    })
}

fn args_regex(pattern: &[&str]) -> Regex {
    let body = pattern.join(",");
    Regex::new(&format!("^{}$", body)).expect("color argument pattern is valid")
}

fn rgb_args() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| args_regex(&[NUMBER, NUMBER, NUMBER]))
}

fn rgba_args() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| args_regex(&[NUMBER, NUMBER, NUMBER, NUMBER]))
}

fn hsl_args() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| args_regex(&[NUMBER, PERCENT, PERCENT]))
}

fn hsla_args() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| args_regex(&[NUMBER, PERCENT, PERCENT, NUMBER]))
}

pub(crate) fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ColorParseError::new(input, "empty color"));
    }

    if text.starts_with('#') {
        return parse_hex(input, text);
    }

    if let Some(caps) = function_regex().captures(text) {
        let function = caps[1].to_ascii_lowercase();
        return parse_function(input, &function, &caps[2]);
    }

    if text.eq_ignore_ascii_case("transparent") {
        return Ok(TRANSPARENT);
    }

    named::lookup(text)
        .map(|(r, g, b)| Color::from_rgb(r, g, b))
        .ok_or_else(|| ColorParseError::new(input, "unknown color name"))
}

fn parse_hex(input: &str, text: &str) -> Result<Color, ColorParseError> {
    let caps = hex_regex()
        .captures(text)
        .ok_or_else(|| ColorParseError::new(input, "expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA"))?;
    let digits = &caps[1];

    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    let single = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
    let bad = |_| ColorParseError::new(input, "invalid hex digit");

    let (r, g, b, a) = match digits.len() {
        3 => (single(0), single(1), single(2), Ok(255)),
        4 => (single(0), single(1), single(2), single(3)),
        6 => (pair(0), pair(2), pair(4), Ok(255)),
        _ => (pair(0), pair(2), pair(4), pair(6)),
    };
    let alpha = f64::from(a.map_err(bad)?) / 255.0;
    Ok(Color::from_rgba(
        r.map_err(bad)?,
        g.map_err(bad)?,
        b.map_err(bad)?,
        alpha,
    ))
}

fn parse_function(input: &str, function: &str, args: &str) -> Result<Color, ColorParseError> {
    let pattern = match function {
        "rgb" => rgb_args(),
        "rgba" => rgba_args(),
        "hsl" => hsl_args(),
        _ => hsla_args(),
    };
    let caps = pattern
        .captures(args)
        .ok_or_else(|| ColorParseError::new(input, format!("malformed {}() arguments", function)))?;

    let mut values = Vec::with_capacity(4);
    for i in 1..caps.len() {
        let value: f64 = caps[i]
            .parse()
            .map_err(|_| ColorParseError::new(input, "invalid number"))?;
        values.push(value);
    }
    let alpha = values.get(3).copied().unwrap_or(1.0).clamp(0.0, 1.0);

    let color = if function.starts_with("rgb") {
        Color::new(
            values[0].clamp(0.0, 255.0) / 255.0,
            values[1].clamp(0.0, 255.0) / 255.0,
            values[2].clamp(0.0, 255.0) / 255.0,
            alpha,
        )
    } else {
        let hue = values[0].rem_euclid(360.0) / 360.0;
        let saturation = values[1].clamp(0.0, 100.0) / 100.0;
        let lightness = values[2].clamp(0.0, 100.0) / 100.0;
        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Color::new(r, g, b, alpha)
    };
    Ok(color)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
