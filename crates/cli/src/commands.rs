// FILE: crates/cli/src/commands.rs

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::ArgMatches;
use console::style;
use std::io::Read;
use std::time::Duration;
use syndic_config::{Config, ConfigManager, FetchConfig, ParserConfig};
use syndic_feed_parser::{DateNormalizer, Feed, FeedItem, FeedParser, FeedType};
use syndic_network::{Client, ClientConfig};


/// Parse a feed from a file, stdin, or URL and print it
pub async fn parse_feed(config: &Config, matches: &ArgMatches) -> Result<()> {
    let source = matches
        .get_one::<String>("source")
        .ok_or_else(|| anyhow!("Source is required"))?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let limit = matches.get_one::<usize>("limit").copied();

    let bytes = read_source(source, &config.fetch).await?;
    let parser = build_parser(&config.parser)?;
    let mut feed = parser
        .parse(&bytes)
        .with_context(|| format!("Failed to parse feed from {}", source))?;

    if let Some(limit) = limit {
        feed.items.truncate(limit);
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&feed)?),
        _ => print!("{}", render_text(&feed)),
    }

    Ok(())
}

/// Normalize one timestamp and print it
pub fn normalize_date(config: &Config, matches: &ArgMatches) -> Result<()> {
    let text = matches
        .get_one::<String>("text")
        .ok_or_else(|| anyhow!("Timestamp is required"))?;

    let normalizer = build_normalizer(&config.parser)?;
    let instant = normalizer.parse_instant(text)?;
    println!("{}", describe_instant(instant));

    Ok(())
}

/// Handle `config init|show|path`
pub fn manage_config(manager: &ConfigManager, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) => {
            let created = manager
                .initialize()
                .context("Failed to write default configuration")?;
            if created {
                println!(
                    "{} Created {}",
                    style("✓").green().bold(),
                    manager.config_path().display()
                );
            } else {
                println!("Config already exists at {}", manager.config_path().display());
            }
            Ok(())
        }
        Some(("show", _)) => {
            let config = manager
                .load_with_env_overrides()
                .context("Failed to load configuration")?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Some(("path", _)) => {
            println!("{}", manager.config_path().display());
            Ok(())
        }
        _ => bail!("Unknown config command"),
    }
}

/// Builds a parser trying the configured formats in order
pub fn build_parser(config: &ParserConfig) -> Result<FeedParser> {
    let kinds = config
        .adapters
        .iter()
        .map(|tag| FeedType::from_tag(tag).ok_or_else(|| anyhow!("Unknown feed format {:?}", tag)))
        .collect::<Result<Vec<_>>>()?;

    if kinds.is_empty() {
        bail!("No feed formats configured");
    }

    Ok(FeedParser::from_kinds(&kinds, build_normalizer(config)?))
}

fn build_normalizer(config: &ParserConfig) -> Result<DateNormalizer> {
    let offset = config
        .reference_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            anyhow!(
                "Reference offset of {} minutes is out of range",
                config.reference_offset_minutes
            )
        })?;
    Ok(DateNormalizer::with_reference_offset(offset))
}

fn client_config(config: &FetchConfig) -> ClientConfig {
    ClientConfig {
        timeout: Duration::from_secs(config.timeout_secs),
        user_agent: config.user_agent.clone(),
        max_redirects: config.max_redirects,
        max_body_bytes: config.max_body_bytes,
    }
}

/// Reads raw document bytes from a URL, stdin (`-`), or a file
pub async fn read_source(source: &str, config: &FetchConfig) -> Result<Vec<u8>> {
    if source == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(bytes);
    }

    if source.contains("://") {
        let client = Client::with_config(client_config(config))?;
        return client
            .fetch(source)
            .await
            .with_context(|| format!("Failed to fetch {}", source));
    }

    std::fs::read(source).with_context(|| format!("Failed to read {}", source))
}

fn render_text(feed: &Feed) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{} {}\n",
        style(&feed.title).bold(),
        style(format!("[{}]", feed.feed_type)).dim()
    ));
    out.push_str(&format!("{}\n", "=".repeat(80)));

    for (label, value) in [
        ("Link", &feed.link),
        ("Description", &feed.description),
        ("Author", &feed.author),
        ("Generator", &feed.generator),
        ("Rights", &feed.rights),
        ("Image", &feed.image),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }
    if let Some(updated) = feed.updated {
        out.push_str(&format!("Updated: {}\n", updated.to_rfc3339()));
    }
    if !feed.categories.is_empty() {
        out.push_str(&format!("Categories: {}\n", feed.categories.join(", ")));
    }

    out.push_str(&format!("\n{} Items\n", style(feed.item_count()).bold().cyan()));
    for item in &feed.items {
        out.push_str(&render_item(item));
    }

    out
}

fn render_item(item: &FeedItem) -> String {
    let title = if item.title.is_empty() { "(untitled)" } else { item.title.as_str() };
    let mut out = format!("\n{}\n", style(title).bold());

    out.push_str(&format!("  Published: {}\n", item.published.format("%Y-%m-%d %H:%M UTC")));
    if !item.link.is_empty() {
        out.push_str(&format!("  Link: {}\n", item.link));
    }
    if item.has_attachment() {
        out.push_str(&format!("  Attachment: {}\n", item.attachment));
    }
    if !item.author.is_empty() {
        out.push_str(&format!("  Author: {}\n", item.author));
    }
    if !item.categories.is_empty() {
        out.push_str(&format!("  Categories: {}\n", item.categories.join(", ")));
    }

    out
}

fn describe_instant(instant: DateTime<Utc>) -> String {
    format!("{}\t{}", instant.to_rfc3339(), instant.timestamp())
}
