//! Generated name → color mapping.

use indexmap::IndexMap;
use serde::Serialize;
use shadegen_color::Color;

/// Named colors produced by [`generate`](crate::generate).
///
/// Entries keep generation order. Serializes as a map of name to hex string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, Color>,
}

impl Palette {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: String, color: Color) {
        self.entries.insert(name, color);
    }

    /// Color stored under `name`.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    /// Hex string stored under `name`.
    pub fn hex(&self, name: &str) -> Option<String> {
        self.get(name).map(|color| color.hex())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in generation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, color)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Name → `#RRGGBB`/`#RRGGBBAA` map for renderers.
    pub fn to_hex_map(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(name, color)| (name.clone(), color.hex()))
            .collect()
    }

    /// Render as a flat TOML table.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
