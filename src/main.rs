mod cli;
mod commands;
mod preview;

use anyhow::Result;
use clap::Parser;
use shadegen_config::Config;
use shadegen_logger::{self as log, LogLevel};
use shadegen_theme::set_themes_dir;
use std::io;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config first to get theme and palette defaults
    let config = Config::load().unwrap_or_default();

    // Initialize theme system with themes directory from config
    if let Ok(themes_dir) = Config::get_themes_dir() {
        set_themes_dir(themes_dir);
    }

    init_logging(&cli, &config);
    log::debug(format!("Running with config {:?}", config));

    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Command::Generate(args) => commands::run_generate(&mut stdout, args, &config),
        Command::Names => commands::run_names(&mut stdout),
        Command::Themes => commands::run_themes(&mut stdout, &config),
        Command::Preview(args) => commands::run_preview(&mut stdout, args, &config),
    };

    if let Err(err) = &result {
        log::error(format!("{:#}", err));
    }
    result
}

/// Start the logger with the CLI level taking precedence over the config.
fn init_logging(cli: &Cli, config: &Config) {
    let requested = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.min_level);
    let min_level = requested.parse::<LogLevel>().unwrap_or_else(|e| {
        eprintln!("{}. Using info.", e);
        LogLevel::Info
    });

    log::init(
        config.log_file_path().ok(),
        config.logging.max_entries,
        min_level,
    );
}
