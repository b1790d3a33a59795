//! Logging infrastructure for shadegen.
//!
//! Provides a simple, thread-safe logging system with optional file output
//! and in-memory log storage. Messages logged before [`init`] are dropped,
//! so library crates can log unconditionally.

use chrono::Local;
use std::collections::VecDeque;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp in HH:MM:SS format
    pub timestamp: String,
    /// Message level
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Global logger state
#[derive(Debug)]
struct Logger {
    /// Recent entries (last N messages)
    entries: VecDeque<LogEntry>,
    /// Maximum number of entries in log
    max_entries: usize,
    /// Minimum log level to record
    min_level: LogLevel,
    /// Log file path, if file output is enabled
    file_path: Option<PathBuf>,
}

impl Logger {
    /// Create new logger instance
    fn new(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Clear log file on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== shadegen log start ===");
            }
        }

        Self {
            entries: VecDeque::new(),
            max_entries,
            min_level,
            file_path,
        }
    }

    /// Add entry to log
    fn add_entry(&mut self, level: LogLevel, message: String) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();

        // Write to file (create if deleted)
        if let Some(path) = &self.file_path {
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "[{}] {}: {}", timestamp, level, message);
            }
        }

        self.entries.push_back(LogEntry {
            timestamp,
            level,
            message,
        });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Run `f` against the logger if it has been initialized.
fn with_logger<T>(f: impl FnOnce(&mut Logger) -> T) -> Option<T> {
    let mut logger = LOGGER.get()?.lock().ok()?;
    Some(f(&mut logger))
}

/// Initialize the global logger
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Path to the log file, or `None` for memory only
/// * `max_entries` - Maximum number of log entries to keep in memory
/// * `min_level` - Minimum log level to record
pub fn init(file_path: Option<PathBuf>, max_entries: usize, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, max_entries, min_level)));
}

/// Set minimum log level dynamically
pub fn set_min_level(level: LogLevel) {
    with_logger(|logger| logger.set_min_level(level));
}

/// Log a message at `level`
pub fn log(level: LogLevel, message: impl Into<String>) {
    with_logger(|logger| logger.add_entry(level, message.into()));
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

/// Get all log entries currently stored in memory
pub fn get_entries() -> Vec<LogEntry> {
    with_logger(|logger| logger.entries.iter().cloned().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[test]
    fn test_logger_filters_and_bounds_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("shadegen.log");
        let mut logger = Logger::new(Some(path.clone()), 2, LogLevel::Info);

        logger.add_entry(LogLevel::Debug, "hidden".to_string());
        logger.add_entry(LogLevel::Info, "one".to_string());
        logger.add_entry(LogLevel::Warn, "two".to_string());
        logger.add_entry(LogLevel::Error, "three".to_string());

        let messages: Vec<&str> = logger.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["two", "three"]);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== shadegen log start ==="));
        assert!(content.contains("INFO: one"));
        assert!(!content.contains("hidden"));

        logger.set_min_level(LogLevel::Debug);
        logger.add_entry(LogLevel::Debug, "shown".to_string());
        assert_eq!(logger.entries.back().unwrap().message, "shown");
    }

    #[test]
    fn test_global_logger() {
        // Dropped silently before init.
        info("before init");
        init(None, 8, LogLevel::Info);

        debug("filtered");
        warn("recorded");
        set_min_level(LogLevel::Debug);
        debug("now recorded");

        let messages: Vec<String> = get_entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, ["recorded", "now recorded"]);
    }

    #[test]
    fn test_memory_only_logger() {
        let mut logger = Logger::new(None, 10, LogLevel::Debug);
        logger.add_entry(LogLevel::Debug, "kept".to_string());
        assert_eq!(logger.entries.len(), 1);
    }
}
