// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;
use syndic_config::{ConfigManager, LogLevel};

mod commands;

fn build_cli() -> Command {
    Command::new("syndic")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Syndic Contributors")
        .about("Normalize RSS and Atom feeds into one canonical shape")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.toml (defaults to the platform config directory)")
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a feed and print its normalized form")
                .arg(
                    Arg::new("source")
                        .required(true)
                        .value_name("SOURCE")
                        .help("File path, '-' for stdin, or an http(s) URL"),
                )
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("N")
                        .help("Show at most N items")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("date")
                .about("Normalize a single timestamp")
                .arg(Arg::new("text").required(true).value_name("TEXT").help("Timestamp to normalize")),
        )
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Write a default config file if none exists"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
}

fn init_logging(level: LogLevel) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let manager = match matches.get_one::<String>("config") {
        Some(dir) => ConfigManager::with_directory(PathBuf::from(dir)),
        None => ConfigManager::new(),
    }
    .context("Failed to locate configuration directory")?;

    let loaded = manager.load_with_env_overrides();
    init_logging(loaded.as_ref().map(|c| c.app.log_level).unwrap_or(LogLevel::Warn));

    match matches.subcommand() {
        Some(("config", sub_matches)) => commands::manage_config(&manager, sub_matches),
        Some(("parse", sub_matches)) => {
            let config = loaded.context("Failed to load configuration")?;
            commands::parse_feed(&config, sub_matches).await
        }
        Some(("date", sub_matches)) => {
            let config = loaded.context("Failed to load configuration")?;
            commands::normalize_date(&config, sub_matches)
        }
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
