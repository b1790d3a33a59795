//! Theme system for shadegen.
//!
//! A theme is the small set of designer-supplied base colors that the palette
//! generator expands. Built-in themes are embedded at compile time; user
//! themes are loaded from TOML files in the themes directory.

mod loader;
mod spec;

pub use loader::{load_theme, load_theme_from_str};
pub use spec::{
    ColorInput, ResolvedColors, ThemeError, ThemeField, ThemeSpec, ThemeSpecBuilder,
    DEFAULT_DARK_BACKGROUND, DEFAULT_DARK_SURFACE, DEFAULT_LIGHT_BACKGROUND,
    DEFAULT_LIGHT_SURFACE,
};

use shadegen_logger as log;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

/// Name of the theme used when a requested theme is unknown.
pub const DEFAULT_THEME_NAME: &str = "default";

// Embed theme files at compile time
const BUILTIN_THEMES: &[(&str, &str)] = &[
    ("default", include_str!("../themes/default.toml")),
    ("forest", include_str!("../themes/forest.toml")),
    ("mono", include_str!("../themes/mono.toml")),
    ("ocean", include_str!("../themes/ocean.toml")),
    ("sunset", include_str!("../themes/sunset.toml")),
];

// Parsed built-in themes, in `BUILTIN_THEMES` order
static BUILTIN: OnceLock<Vec<Arc<ThemeSpec>>> = OnceLock::new();

// Cache for user-loaded themes
static USER_THEMES: OnceLock<Mutex<HashMap<String, Arc<ThemeSpec>>>> = OnceLock::new();

// Themes directory path (set by app on startup)
static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the themes directory path (call this at app startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

/// Get themes directory path.
fn get_themes_dir() -> Option<&'static PathBuf> {
    THEMES_DIR.get()
}

/// Hardcoded fallback theme in case of parse errors.
fn get_hardcoded_fallback_theme(name: &str) -> ThemeSpec {
    ThemeSpec::builder("#005EA8")
        .name(name)
        .secondary("#F59402")
        .warning("#FFA000")
        .error("#C62828")
        .success("#558B2F")
        .build()
}

/// Load theme from embedded TOML content.
fn load_builtin(content: &str, name: &str) -> ThemeSpec {
    match load_theme_from_str(content) {
        Ok(theme) => theme,
        Err(e) => {
            log::error(format!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name, e
            ));
            get_hardcoded_fallback_theme(name)
        }
    }
}

fn builtin_themes() -> &'static [Arc<ThemeSpec>] {
    BUILTIN.get_or_init(|| {
        BUILTIN_THEMES
            .iter()
            .map(|(name, content)| Arc::new(load_builtin(content, name)))
            .collect()
    })
}

fn find_builtin(name: &str) -> Option<Arc<ThemeSpec>> {
    builtin_themes()
        .iter()
        .find(|theme| theme.name() == name)
        .cloned()
}

/// Try to load user theme from config directory.
fn try_load_user_theme(name: &str) -> Option<Arc<ThemeSpec>> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    // Use ok() to gracefully handle poisoned mutex (return None instead of panicking)
    {
        let cache_lock = cache.lock().ok()?;
        if let Some(theme) = cache_lock.get(name) {
            return Some(theme.clone());
        }
    }

    let theme_path = get_themes_dir()?.join(format!("{}.toml", name));
    if !theme_path.exists() {
        return None;
    }

    let theme = match load_theme(&theme_path) {
        Ok(theme) => Arc::new(theme),
        Err(e) => {
            log::warn(format!("Ignoring user theme '{}': {:#}", name, e));
            return None;
        }
    };
    log::debug(format!("Loaded user theme from {}", theme_path.display()));

    // Cache it (ignore if mutex is poisoned - theme already loaded, just won't be cached)
    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), theme.clone());
    }

    Some(theme)
}

impl ThemeSpec {
    /// Find a theme by name without falling back.
    ///
    /// User themes shadow built-in themes of the same name.
    pub fn find_by_name(name: &str) -> Option<Arc<ThemeSpec>> {
        try_load_user_theme(name).or_else(|| find_builtin(name))
    }

    /// Get theme by name.
    ///
    /// First tries to load from user's config directory.
    /// If not found, falls back to built-in themes, then to the default theme.
    pub fn get_by_name(name: &str) -> Arc<ThemeSpec> {
        if let Some(theme) = Self::find_by_name(name) {
            return theme;
        }
        log::warn(format!(
            "Unknown theme '{}', using '{}'",
            name, DEFAULT_THEME_NAME
        ));
        find_builtin(DEFAULT_THEME_NAME)
            .unwrap_or_else(|| Arc::new(get_hardcoded_fallback_theme(DEFAULT_THEME_NAME)))
    }

    /// Get list of all built-in themes.
    pub fn all_themes() -> Vec<Arc<ThemeSpec>> {
        builtin_themes().to_vec()
    }

    /// Get list of all built-in theme names.
    pub fn all_theme_names() -> Vec<&'static str> {
        BUILTIN_THEMES.iter().map(|(name, _)| *name).collect()
    }

    /// Names of `*.toml` files in the user themes directory, sorted.
    pub fn user_theme_names() -> Vec<String> {
        let Some(dir) = get_themes_dir() else {
            return Vec::new();
        };
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }
}
